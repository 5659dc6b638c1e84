//! Activity catalog
//!
//! The catalog maps activity names to records and remembers insertion
//! order, which is also the order activities are listed in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::activity::Activity;

/// Ordered mapping from activity name to [`Activity`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_activity(mut self, name: impl Into<String>, activity: Activity) -> Self {
        self.insert(name, activity);
        self
    }

    /// Insert an activity. An existing entry with the same name is replaced
    /// in place and returned; a new name goes to the end.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Option<Activity> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => Some(std::mem::replace(existing, activity)),
            None => {
                self.entries.push((name, activity));
                None
            }
        }
    }

    /// Look up an activity by exact name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    /// Look up an activity by exact name for mutation
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, activity)| activity)
    }

    /// Iterate `(name, activity)` pairs in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no activities
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            catalog.insert(name, activity);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// The built-in catalog every process starts from
pub fn seed_catalog() -> ActivityCatalog {
    ActivityCatalog::new()
        .with_activity(
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        )
        .with_activity(
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        )
        .with_activity(
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        )
        // Sports
        .with_activity(
            "Soccer Team",
            Activity::new(
                "Outdoor soccer training and inter-school matches",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                18,
            )
            .with_participants(["alex@mergington.edu", "nina@mergington.edu"]),
        )
        .with_activity(
            "Swimming Club",
            Activity::new(
                "Lap training, technique improvement, and local meets",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        )
        // Arts
        .with_activity(
            "Art Club",
            Activity::new(
                "Drawing, painting, and mixed-media projects",
                "Mondays, 3:30 PM - 5:00 PM",
                20,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        )
        .with_activity(
            "Drama Club",
            Activity::new(
                "Acting exercises, script work, and school productions",
                "Fridays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(["sarah@mergington.edu", "jack@mergington.edu"]),
        )
        // Academic
        .with_activity(
            "Debate Team",
            Activity::new(
                "Competitive debating, public speaking, and research skills",
                "Thursdays, 4:00 PM - 5:30 PM",
                14,
            )
            .with_participants(["oliver@mergington.edu", "emma.r@mergington.edu"]),
        )
        .with_activity(
            "Math Olympiad",
            Activity::new(
                "Problem-solving sessions and contest preparation",
                "Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["isabella@mergington.edu", "mason@mergington.edu"]),
        )
}
