use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key addressing one snapshot slot in the store.
///
/// A session uses a single fixed slot; the key exists so multiple
/// deployments (or tests) can share one database without colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    /// Creates a slot key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SlotKey {
    fn default() -> Self {
        Self("cart".to_string())
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlotKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SlotKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A serialized cart state at a point in time.
///
/// The payload is kept as raw JSON so the store stays independent of the
/// cart's concrete item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,

    /// The serialized cart state.
    pub state: serde_json::Value,
}

impl CartSnapshot {
    /// Creates a new snapshot from raw JSON state.
    pub fn new(state: serde_json::Value) -> Self {
        Self {
            saved_at: Utc::now(),
            state,
        }
    }

    /// Creates a snapshot from a serializable state.
    pub fn from_state<T: Serialize>(state: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            saved_at: Utc::now(),
            state: serde_json::to_value(state)?,
        })
    }

    /// Deserializes the snapshot state into a concrete type.
    pub fn into_state<T: for<'de> Deserialize<'de>>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.state)
    }

    /// Gets a reference to the state as JSON.
    pub fn state_ref(&self) -> &serde_json::Value {
        &self.state
    }
}
