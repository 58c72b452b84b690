use crate::models::{Activity, ActivityDirectory};

// name, description, schedule, max_participants, participants
type SeedRow = (&'static str, &'static str, &'static str, i64, &'static [&'static str]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Basketball",
        "Team sport focusing on basketball skills and competitive play",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis techniques and participate in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        10,
        &["james@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and other visual arts",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["grace@mergington.edu", "lucy@mergington.edu"],
    ),
    (
        "Music Ensemble",
        "Join an orchestra or band and perform in concerts",
        "Mondays and Thursdays, 4:30 PM - 5:30 PM",
        25,
        &["noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop argumentation and public speaking skills",
        "Tuesdays, 3:30 PM - 4:30 PM",
        16,
        &["isabella@mergington.edu", "liam@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore STEM topics",
        "Fridays, 3:30 PM - 5:00 PM",
        20,
        &["ryan@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// The fixed activity table every process starts from.
pub fn seed_directory() -> ActivityDirectory {
    let mut dir = ActivityDirectory::new();
    for (name, description, schedule, max_participants, participants) in SEED_ACTIVITIES {
        dir.insert(
            *name,
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        );
    }
    dir
}
