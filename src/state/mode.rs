//! Game mode selection.
//!
//! Modes are labels only. Nothing in the session behaves differently
//! depending on which one is selected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selectable game modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    Fast,
    Custom,
}

impl GameMode {
    /// All modes, in selector order.
    pub const ALL: [GameMode; 3] = [Self::Classic, Self::Fast, Self::Custom];

    /// Display label, also the selector value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fast => "Fast",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a selector value is not one of the known modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode: {0:?}")]
pub struct ModeParseError(pub String);

impl FromStr for GameMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_classic() {
        assert_eq!(GameMode::default(), GameMode::Classic);
    }

    #[test]
    fn test_selector_order() {
        let labels: Vec<&str> = GameMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Classic", "Fast", "Custom"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Fast".parse::<GameMode>(), Ok(GameMode::Fast));
        assert_eq!("Custom".parse::<GameMode>(), Ok(GameMode::Custom));

        // Selector values are exact
        assert_eq!(
            "fast".parse::<GameMode>(),
            Err(ModeParseError("fast".to_string()))
        );
        assert!("Turbo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_value(GameMode::Custom).unwrap();
        assert_eq!(json, serde_json::json!("Custom"));

        let mode: GameMode = serde_json::from_value(serde_json::json!("Fast")).unwrap();
        assert_eq!(mode, GameMode::Fast);
    }
}
