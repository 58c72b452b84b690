use std::sync::Arc;

use parking_lot::RwLock;

use crate::database::seed;
use crate::models::ActivityDirectory;

/// Process-wide activity directory shared by every request handler.
///
/// Cloning is cheap; clones share the same directory.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_directory())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    ActivityMissing,
    ParticipantMissing,
}

pub fn list_all(store: &ActivityStore) -> ActivityDirectory {
    store.inner.read().clone()
}

/// Appends `email` to the activity's participants. Returns `false` when the
/// activity does not exist. Membership and capacity are not checked.
pub fn append_participant(store: &ActivityStore, activity_name: &str, email: &str) -> bool {
    let mut dir = store.inner.write();
    match dir.get_mut(activity_name) {
        Some(activity) => {
            activity.participants.push(email.to_string());
            true
        }
        None => false,
    }
}

/// Removes the first occurrence of `email` from the activity's participants.
pub fn remove_participant(store: &ActivityStore, activity_name: &str, email: &str) -> RemoveOutcome {
    let mut dir = store.inner.write();
    let Some(activity) = dir.get_mut(activity_name) else {
        return RemoveOutcome::ActivityMissing;
    };
    match activity.participants.iter().position(|p| p == email) {
        Some(idx) => {
            activity.participants.remove(idx);
            RemoveOutcome::Removed
        }
        None => RemoveOutcome::ParticipantMissing,
    }
}

/// Restores the seed table, dropping every signup made since start.
pub fn reset(store: &ActivityStore) {
    *store.inner.write() = seed::seed_directory();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(store: &ActivityStore, name: &str) -> Vec<String> {
        list_all(store)
            .get(name)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }

    #[test]
    fn append_allows_duplicates() {
        let store = ActivityStore::seeded();
        assert!(append_participant(&store, "Basketball", "dup@mergington.edu"));
        assert!(append_participant(&store, "Basketball", "dup@mergington.edu"));

        let count = participants(&store, "Basketball")
            .iter()
            .filter(|p| *p == "dup@mergington.edu")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn append_to_missing_activity_is_rejected() {
        let store = ActivityStore::seeded();
        assert!(!append_participant(&store, "Quidditch", "x@mergington.edu"));
        assert!(list_all(&store).get("Quidditch").is_none());
    }

    #[test]
    fn remove_takes_only_first_occurrence() {
        let store = ActivityStore::seeded();
        append_participant(&store, "Chess Club", "michael@mergington.edu");

        assert_eq!(
            remove_participant(&store, "Chess Club", "michael@mergington.edu"),
            RemoveOutcome::Removed
        );
        assert_eq!(
            participants(&store, "Chess Club"),
            vec!["daniel@mergington.edu", "michael@mergington.edu"]
        );
    }

    #[test]
    fn remove_reports_what_was_missing() {
        let store = ActivityStore::seeded();
        assert_eq!(
            remove_participant(&store, "Quidditch", "x@mergington.edu"),
            RemoveOutcome::ActivityMissing
        );
        assert_eq!(
            remove_participant(&store, "Basketball", "x@mergington.edu"),
            RemoveOutcome::ParticipantMissing
        );
    }

    #[test]
    fn clones_share_state_and_reset_restores_seed() {
        let store = ActivityStore::seeded();
        let other = store.clone();
        append_participant(&other, "Gym Class", "new@mergington.edu");
        assert!(participants(&store, "Gym Class").contains(&"new@mergington.edu".to_string()));

        reset(&store);
        assert_eq!(list_all(&other), seed::seed_directory());
    }
}
