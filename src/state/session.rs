//! Session state management.
//!
//! A session is the state behind one game view: the joined players, the
//! status line and the selected mode. It is created fresh on mount and
//! discarded on unmount.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use super::config::SessionConfig;
use super::mode::GameMode;
use super::player::Player;
use super::status::{SessionEvent, SessionStatus};

/// Session aggregate.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session ID
    pub id: String,

    /// Players in join order (append-only)
    players: Vec<Player>,

    /// Current status
    status: SessionStatus,

    /// Selected mode
    mode: GameMode,

    /// Players required to start
    min_players: usize,

    /// When session was mounted
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the game first started
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Session {
    /// Create a fresh session with default settings.
    pub fn new(id: String) -> Self {
        Self::with_config(id, &SessionConfig::default())
    }

    /// Create a fresh session from config.
    pub fn with_config(id: String, config: &SessionConfig) -> Self {
        Self {
            id,
            players: Vec::new(),
            status: SessionStatus::Waiting,
            mode: config.default_mode,
            min_players: config.min_players,
            created_at: chrono::Utc::now(),
            started_at: None,
        }
    }

    /// Add a player. Always succeeds.
    #[instrument(skip(self, name), fields(session_id = %self.id))]
    pub fn join(&mut self, name: impl Into<String>) {
        let player = Player::new(name);
        let event = SessionEvent::Join {
            name: player.name.clone(),
        };

        self.players.push(player);
        self.status.apply_mut(&event, self.min_players);

        debug!(
            player_count = self.players.len(),
            status = self.status.as_str(),
            "Player joined"
        );
    }

    /// Attempt to start the game. Always succeeds; too few players only
    /// changes the status line.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn start(&mut self) {
        let event = SessionEvent::Start {
            player_count: self.players.len(),
        };
        self.status.apply_mut(&event, self.min_players);

        if self.status.is_started() {
            if self.started_at.is_none() {
                self.started_at = Some(chrono::Utc::now());
            }
            info!(player_count = self.players.len(), mode = %self.mode, "Game started");
        } else {
            debug!(
                player_count = self.players.len(),
                min_players = self.min_players,
                "Not enough players to start"
            );
        }
    }

    /// Replace the selected mode.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
    }

    /// Get all players in join order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player names in join order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Current status line text.
    pub fn status_message(&self) -> String {
        self.status.message()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn min_players(&self) -> usize {
        self.min_players
    }

    pub fn is_started(&self) -> bool {
        self.status.is_started()
    }

    /// Convert to JSON snapshot for clients.
    pub fn to_json(&self) -> serde_json::Value {
        let players: Vec<serde_json::Value> = self.players.iter().map(|p| p.to_json()).collect();

        serde_json::json!({
            "session_id": self.id,
            "status": self.status.as_str(),
            "status_message": self.status.message(),
            "mode": self.mode,
            "players": players,
            "min_players": self.min_players,
            "started_at": self.started_at.map(|t| t.to_rfc3339())
        })
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session {0} is already mounted")]
    AlreadyMounted(String),

    #[error("session {0} is not mounted")]
    NotMounted(String),
}

/// Session manager - tracks all mounted sessions.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<String, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a fresh session.
    #[instrument(skip(self, config))]
    pub fn mount(
        &mut self,
        session_id: &str,
        config: &SessionConfig,
    ) -> Result<&mut Session, SessionError> {
        if self.sessions.contains_key(session_id) {
            return Err(SessionError::AlreadyMounted(session_id.to_string()));
        }

        info!("Mounting session");
        let session = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::with_config(session_id.to_string(), config));
        Ok(session)
    }

    /// Unmount a session, discarding its state.
    #[instrument(skip(self))]
    pub fn unmount(&mut self, session_id: &str) -> Option<Session> {
        let session = self.sessions.remove(session_id)?;
        info!(player_count = session.player_count(), "Unmounted session");
        Some(session)
    }

    /// Get a session.
    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    /// Get a mutable session.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(session_id)
    }

    /// Get a mutable session, or an error if it is not mounted.
    pub fn require_mut(&mut self, session_id: &str) -> Result<&mut Session, SessionError> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotMounted(session_id.to_string()))
    }

    pub fn is_mounted(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Count mounted sessions.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    /// Get all session IDs.
    pub fn session_ids(&self) -> impl Iterator<Item = &String> {
        self.sessions.keys()
    }
}
