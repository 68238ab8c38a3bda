//! Wire-protocol DTOs for the signup server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads. The catalog keeps entries
//! in the order the server emits them, which is why it deserializes through
//! a map visitor into a vector instead of a sorted map type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One extracurricular activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description shown on the card.
    pub description: String,
    /// Meeting schedule, free-form text (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Enrollment cap enforced by the server.
    pub max_participants: u32,
    /// Signed-up participant identifiers, in signup order. The server may
    /// omit the field entirely for an empty activity.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Number of spots currently taken.
    pub fn spots_taken(&self) -> usize {
        self.participants.len()
    }

    /// Occupancy fraction shown on the card, e.g. `"1 / 2"`.
    pub fn spots_label(&self) -> String {
        format!("{} / {}", self.spots_taken(), self.max_participants)
    }
}

/// Full activity catalog keyed by activity name.
///
/// Entries preserve the server's JSON document order; the catalog is an
/// immutable snapshot and is never mutated client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in server order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Activity)> {
        self.entries.iter()
    }

    /// Activity names in server order, for the selection control.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, activity)| activity)
    }
}

impl From<Vec<(String, Activity)>> for ActivityCatalog {
    fn from(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity details")
            }

            // MapAccess yields entries in document order, so the vector ends
            // up in the same order the server serialized them.
            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(ActivityCatalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Success body of the signup/removal endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body of the signup/removal endpoints (non-success status).
///
/// The server is not trusted to always include `detail`; a parsed body
/// without it is still a well-formed rejection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}
