use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Activity, ActivityCatalog};

pub fn default_catalog() -> ActivityCatalog {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join our competitive soccer team and play in local tournaments",
                "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(&["alex@mergington.edu", "sam@mergington.edu"]),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Practice basketball skills and participate in inter-school games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and mixed media with guided projects",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["lily@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform plays for the school community",
                "Tuesdays, 4:00 PM - 6:00 PM",
                20,
            )
            .with_participants(&["ethan@mergington.edu", "grace@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Thursdays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(&["noah@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build argumentation skills and compete in regional debates",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(&["ava@mergington.edu", "liam@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Reads a seed catalog from a JSON object of `name -> activity`.
///
/// Duplicate emails inside one roster are collapsed to their first occurrence,
/// so a hand-edited file cannot break the one-signup-per-email rule.
pub fn load_catalog_file(path: impl AsRef<Path>) -> io::Result<ActivityCatalog> {
    let raw = fs::read_to_string(path)?;
    let mut catalog: ActivityCatalog = serde_json::from_str(&raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    for activity in catalog.values_mut() {
        let mut seen: Vec<String> = Vec::with_capacity(activity.participants.len());
        activity.participants.retain(|email| {
            if seen.contains(email) {
                false
            } else {
                seen.push(email.clone());
                true
            }
        });
    }
    Ok(catalog)
}
