use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::activities_repo::{self, RemoveOutcome};
use crate::database::ActivityStore;
use crate::error::{SignupError, SignupResult};
use crate::models::ActivityDirectory;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    activities_repo::list_all(store)
}

/// Registers `email` for `activity_name`. Repeated signups are recorded
/// again and `max_participants` is not enforced.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> SignupResult<MessageResponse> {
    if !activities_repo::append_participant(store, activity_name, email) {
        debug!(activity = %activity_name, "signup for unknown activity");
        return Err(SignupError::ActivityNotFound);
    }
    info!(activity = %activity_name, "participant signed up");
    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> SignupResult<MessageResponse> {
    match activities_repo::remove_participant(store, activity_name, email) {
        RemoveOutcome::Removed => {
            info!(activity = %activity_name, "participant unregistered");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        RemoveOutcome::ActivityMissing => Err(SignupError::ActivityNotFound),
        RemoveOutcome::ParticipantMissing => Err(SignupError::ParticipantNotFound),
    }
}

pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

pub struct OverviewPageData {
    pub activities: Vec<ActivityCardView>,
    pub activity_names: Vec<String>,
}

pub fn build_overview_page(store: &ActivityStore) -> OverviewPageData {
    let dir = activities_repo::list_all(store);
    let activities = dir
        .iter()
        .map(|(name, a)| ActivityCardView {
            name: name.to_string(),
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            max_participants: a.max_participants,
            spots_left: a.spots_left(),
            participants: a.participants.clone(),
        })
        .collect::<Vec<_>>();
    let activity_names = dir.names().map(str::to_string).collect();

    OverviewPageData {
        activities,
        activity_names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn logs_activity_but_not_email() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        let store = ActivityStore::seeded();
        tracing::subscriber::with_default(subscriber, || {
            signup(&store, "Art Studio", "private@mergington.edu").unwrap();
            unregister(&store, "Art Studio", "private@mergington.edu").unwrap();
            signup(&store, "Nowhere", "private@mergington.edu").unwrap_err();
        });

        let output = String::from_utf8(logs.0.lock().clone()).unwrap();
        assert!(output.contains("participant signed up"));
        assert!(output.contains("participant unregistered"));
        assert!(output.contains("Art Studio"));
        assert!(!output.contains("private@mergington.edu"));
    }

    #[test]
    fn signup_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let res = signup(&store, "Basketball", "new@mergington.edu").unwrap();
        assert_eq!(res.message, "Signed up new@mergington.edu for Basketball");
    }

    #[test]
    fn signup_unknown_activity() {
        let store = ActivityStore::seeded();
        assert_eq!(
            signup(&store, "InvalidActivity", "a@mergington.edu"),
            Err(SignupError::ActivityNotFound)
        );
    }

    #[test]
    fn unregister_errors_distinguish_activity_and_participant() {
        let store = ActivityStore::seeded();
        assert_eq!(
            unregister(&store, "InvalidActivity", "alex@mergington.edu"),
            Err(SignupError::ActivityNotFound)
        );
        assert_eq!(
            unregister(&store, "Basketball", "nobody@mergington.edu"),
            Err(SignupError::ParticipantNotFound)
        );
        let ok = unregister(&store, "Basketball", "alex@mergington.edu").unwrap();
        assert_eq!(ok.message, "Unregistered alex@mergington.edu from Basketball");
    }

    #[test]
    fn overview_counts_spots_left_without_enforcing() {
        let store = ActivityStore::seeded();
        for i in 0..12 {
            signup(&store, "Tennis Club", &format!("p{}@mergington.edu", i)).unwrap();
        }
        let page = build_overview_page(&store);
        let tennis = page
            .activities
            .iter()
            .find(|a| a.name == "Tennis Club")
            .unwrap();
        assert_eq!(tennis.participants.len(), 13);
        assert_eq!(tennis.spots_left, 0);
        assert_eq!(page.activity_names.len(), 9);
    }
}
