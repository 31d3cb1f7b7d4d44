//! State management module for Telephone.
//!
//! This module provides the core state types:
//!
//! - `mode` - Game mode selection (Classic, Fast, Custom)
//! - `status` - Status line state machine
//! - `player` - Joined players
//! - `session` - Session aggregate and mount/unmount tracking
//! - `view` - UI event dispatch and rendering
//! - `config` - TOML session configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         AppState                          │
//! │                                                           │
//! │  ┌───────────────┐      ┌──────────────────────────────┐ │
//! │  │ SessionConfig │─────▶│        SessionManager        │ │
//! │  │               │mount │                              │ │
//! │  │ min_players   │      │ session_id → Session         │ │
//! │  │ default_mode  │      │   players: [Player]          │ │
//! │  └───────────────┘      │   status:  SessionStatus     │ │
//! │                         │   mode:    GameMode          │ │
//! │                         └──────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//!
//!   Waiting ──join──▶ Joined ──start──▶ InsufficientPlayers | Started
//! ```

pub mod config;
pub mod mode;
pub mod player;
pub mod session;
pub mod status;
pub mod view;

// Re-export commonly used types
pub use config::{ConfigError, SessionConfig, DEFAULT_MIN_PLAYERS};
pub use mode::{GameMode, ModeParseError};
pub use player::Player;
pub use session::{Session, SessionError, SessionManager};
pub use status::{
    SessionEvent, SessionStatus, INSUFFICIENT_PLAYERS_MESSAGE, STARTED_MESSAGE, WAITING_MESSAGE,
};
pub use view::{SessionView, ViewError, ViewEvent, ViewModel};

use tracing::instrument;

/// Combined application state.
///
/// Pairs the configuration with the sessions mounted under it.
#[derive(Debug, Default)]
pub struct AppState {
    pub config: SessionConfig,
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            sessions: SessionManager::new(),
        }
    }

    /// Mount a fresh session using the current config.
    #[instrument(skip(self))]
    pub fn mount_session(&mut self, session_id: &str) -> Result<&mut Session, SessionError> {
        self.sessions.mount(session_id, &self.config)
    }

    /// Unmount a session, discarding its state.
    pub fn unmount_session(&mut self, session_id: &str) -> Option<Session> {
        self.sessions.unmount(session_id)
    }

    /// Route a view event to a mounted session.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, session_id: &str, event: ViewEvent) -> Result<(), AppError> {
        let session = self.sessions.require_mut(session_id)?;
        event.apply_to(session)?;
        Ok(())
    }
}

/// Errors from [`AppState::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    View(#[from] ViewError),
}
