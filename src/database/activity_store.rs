use std::sync::Arc;

use parking_lot::RwLock;

use crate::database::seed;
use crate::models::ActivityCatalog;

/// Process-wide activity directory.
///
/// Cloning hands out another handle to the same directory, the way a pool
/// handle is shared between handlers. Roster writes hold the write lock for
/// the whole check-and-mutate step.
#[derive(Clone, Debug, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityCatalog>>,
}

impl ActivityStore {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::default_catalog())
    }
}

pub fn list_activities(store: &ActivityStore) -> ActivityCatalog {
    store.inner.read().clone()
}

/// Appends `email` to the roster. Returns `None` when the activity is unknown,
/// otherwise the number of roster rows changed (0 when already signed up).
pub fn insert_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Option<u64> {
    let mut catalog = store.inner.write();
    let activity = catalog.get_mut(activity_name)?;
    if activity.has_participant(email) {
        return Some(0);
    }
    activity.participants.push(email.to_string());
    Some(1)
}

/// Removes `email` from the roster, keeping the order of everyone else.
pub fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Option<u64> {
    let mut catalog = store.inner.write();
    let activity = catalog.get_mut(activity_name)?;
    match activity.participants.iter().position(|p| p == email) {
        Some(idx) => {
            activity.participants.remove(idx);
            Some(1)
        }
        None => Some(0),
    }
}
