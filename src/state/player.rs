//! Players in a session.
//!
//! A player is identified by nothing but their display name. Names are not
//! validated and duplicates are allowed.

use serde::Serialize;

/// A joined player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Display name
    pub name: String,

    /// When the player joined
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            joined_at: chrono::Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "joined_at": self.joined_at.to_rfc3339()
        })
    }
}
