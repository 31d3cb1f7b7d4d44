//! Session status state machine.
//!
//! The status is the single user-facing feedback channel of a session.
//! Every transition is total: a start with too few players is a status,
//! not an error.
//!
//! # State Diagram
//!
//! ```text
//!                  join
//!  ┌─────────┐ ──────────▶ ┌──────────┐ ◀─┐
//!  │ Waiting │             │  Joined  │   │ join
//!  └────┬────┘             └────┬─────┘ ──┘
//!       │ start (< min)         │ start (< min)
//!       ▼                       ▼
//!  ┌────────────────────────────────────┐
//!  │        InsufficientPlayers         │── join ──▶ Joined
//!  └────────────────────────────────────┘
//!
//!  any ── start (>= min) ──▶ Started ── join ──▶ Joined
//! ```

use std::fmt;

/// Shown before anyone has joined.
pub const WAITING_MESSAGE: &str = "Waiting for players...";

/// Shown when a start is attempted with too few players.
pub const INSUFFICIENT_PLAYERS_MESSAGE: &str = "Not enough players to start the game.";

/// Shown once the game has started.
pub const STARTED_MESSAGE: &str = "Game started!";

/// Current session status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Fresh session
    #[default]
    Waiting,

    /// Someone just joined
    Joined { name: String },

    /// Last start attempt was rejected
    InsufficientPlayers,

    /// Game started; no round logic follows
    Started,
}

/// Status transition events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Join { name: String },
    Start { player_count: usize },
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Joined { .. } => "joined",
            Self::InsufficientPlayers => "insufficient_players",
            Self::Started => "started",
        }
    }

    /// The user-facing status line.
    pub fn message(&self) -> String {
        match self {
            Self::Waiting => WAITING_MESSAGE.to_string(),
            Self::Joined { name } => format!("Player {} joined!", name),
            Self::InsufficientPlayers => INSUFFICIENT_PLAYERS_MESSAGE.to_string(),
            Self::Started => STARTED_MESSAGE.to_string(),
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }

    /// Compute the status following `event`.
    pub fn apply(&self, event: &SessionEvent, min_players: usize) -> Self {
        use SessionEvent::*;
        use SessionStatus::*;

        match (self, event) {
            (_, Join { name }) => Joined { name: name.clone() },

            (_, Start { player_count }) if *player_count < min_players => InsufficientPlayers,
            (_, Start { .. }) => Started,
        }
    }

    /// Apply an event in place.
    pub fn apply_mut(&mut self, event: &SessionEvent, min_players: usize) {
        *self = self.apply(event, min_players);
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn join(name: &str) -> SessionEvent {
        SessionEvent::Join {
            name: name.to_string(),
        }
    }

    fn start(player_count: usize) -> SessionEvent {
        SessionEvent::Start { player_count }
    }

    #[test]
    fn test_initial_state() {
        let status = SessionStatus::default();
        assert_eq!(status, SessionStatus::Waiting);
        assert_eq!(status.message(), "Waiting for players...");
    }

    #[test]
    fn test_join_from_any_open_state() {
        for from in [
            SessionStatus::Waiting,
            SessionStatus::Joined {
                name: "Alice".to_string(),
            },
            SessionStatus::InsufficientPlayers,
        ] {
            let next = from.apply(&join("Bob"), 2);
            assert_eq!(next.message(), "Player Bob joined!");
        }
    }

    #[test]
    fn test_start_threshold() {
        let status = SessionStatus::Waiting;

        assert_eq!(status.apply(&start(0), 2), SessionStatus::InsufficientPlayers);
        assert_eq!(status.apply(&start(1), 2), SessionStatus::InsufficientPlayers);
        assert_eq!(status.apply(&start(2), 2), SessionStatus::Started);
        assert_eq!(status.apply(&start(7), 2), SessionStatus::Started);
    }

    #[test]
    fn test_join_after_started_announces_player() {
        let mut status = SessionStatus::Started;
        status.apply_mut(&join("Carol"), 2);
        assert!(!status.is_started());
        assert_eq!(status.message(), "Player Carol joined!");

        // Starting again with enough players returns to started
        status.apply_mut(&start(3), 2);
        assert!(status.is_started());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            SessionStatus::InsufficientPlayers.to_string(),
            "Not enough players to start the game."
        );
        assert_eq!(SessionStatus::Started.to_string(), "Game started!");
        assert_eq!(
            SessionStatus::Joined {
                name: "Alice".to_string()
            }
            .as_str(),
            "joined"
        );
    }
}
