//! Activity directory use-cases: list, sign up, unregister.
//!
//! Every failure is terminal and reported as-is; a rejected call leaves the
//! roster untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::{info, warn};

use crate::database::activity_store::{self, ActivityStore};
use crate::models::ActivityCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityServiceError {
    ActivityNotFound,
    ParticipantNotFound,
    AlreadySignedUp { activity: String, email: String },
}

impl ActivityServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ActivityNotFound | Self::ParticipantNotFound => ErrorKind::NotFound,
            Self::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }
}

impl Display for ActivityServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActivityNotFound => write!(f, "Activity not found"),
            Self::ParticipantNotFound => write!(f, "Participant not found"),
            Self::AlreadySignedUp { activity, email } => {
                write!(f, "{email} already signed up for {activity}")
            }
        }
    }
}

impl Error for ActivityServiceError {}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityMessage {
    pub message: String,
}

pub fn list_activities(store: &ActivityStore) -> ActivityCatalog {
    activity_store::list_activities(store)
}

pub fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ActivityMessage, ActivityServiceError> {
    match activity_store::insert_participant(store, activity_name, email) {
        None => Err(ActivityServiceError::ActivityNotFound),
        Some(0) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: already signed up");
            Err(ActivityServiceError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })
        }
        Some(_) => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(ActivityMessage {
                message: format!("Signed up {email} for {activity_name}"),
            })
        }
    }
}

pub fn unregister_from_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<ActivityMessage, ActivityServiceError> {
    match activity_store::remove_participant(store, activity_name, email) {
        None => Err(ActivityServiceError::ActivityNotFound),
        Some(0) => Err(ActivityServiceError::ParticipantNotFound),
        Some(_) => {
            info!(activity = %activity_name, email = %email, "participant unregistered");
            Ok(ActivityMessage {
                message: format!("Unregistered {email} from {activity_name}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_twice_is_identical() {
        let store = ActivityStore::seeded();
        assert_eq!(list_activities(&store), list_activities(&store));
    }

    #[test]
    fn duplicate_signup_is_conflict_and_counted_once() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store)["Basketball Club"].participants.len();

        let ok = signup_for_activity(&store, "Basketball Club", "test@mergington.edu").unwrap();
        assert!(ok.message.contains("test@mergington.edu"));
        assert!(ok.message.contains("Basketball Club"));

        let err =
            signup_for_activity(&store, "Basketball Club", "test@mergington.edu").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(
            err.to_string(),
            "test@mergington.edu already signed up for Basketball Club"
        );

        let after = list_activities(&store)["Basketball Club"].participants.len();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn signup_then_unregister_restores_roster() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store)["Soccer Team"].participants.clone();

        signup_for_activity(&store, "Soccer Team", "new@mergington.edu").unwrap();
        let ok = unregister_from_activity(&store, "Soccer Team", "new@mergington.edu").unwrap();
        assert!(ok.message.contains("new@mergington.edu"));

        assert_eq!(list_activities(&store)["Soccer Team"].participants, before);
    }

    #[test]
    fn unknown_activity_is_not_found_for_both_operations() {
        let store = ActivityStore::seeded();
        let signup = signup_for_activity(&store, "Nonexistent Activity", "test@mergington.edu");
        let remove =
            unregister_from_activity(&store, "Nonexistent Activity", "test@mergington.edu");

        for err in [signup.unwrap_err(), remove.unwrap_err()] {
            assert_eq!(err, ActivityServiceError::ActivityNotFound);
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert_eq!(err.to_string(), "Activity not found");
        }
    }

    #[test]
    fn unknown_participant_is_not_found() {
        let store = ActivityStore::seeded();
        let err = unregister_from_activity(&store, "Soccer Team", "nonexistent@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ActivityServiceError::ParticipantNotFound);
        assert_eq!(err.to_string(), "Participant not found");
    }

    #[test]
    fn capacity_is_not_enforced() {
        let store = ActivityStore::seeded();
        let cap = list_activities(&store)["Chess Club"].max_participants as usize;
        for i in 0..cap + 2 {
            signup_for_activity(&store, "Chess Club", &format!("s{i}@mergington.edu")).unwrap();
        }
        assert!(list_activities(&store)["Chess Club"].participants.len() > cap);
    }
}
