//! Telephone State Library
//!
//! This crate provides session state management for the Telephone drawing
//! game lobby.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Session** - The ordered player list, the status line and the selected
//!   game mode, with `join`, `start` and `set_mode` operations that never fail.
//!
//! - **Status State Machine** - Waiting, joined, insufficient players and
//!   started, each with its fixed user-facing message.
//!
//! - **Session View** - Maps UI events (join, mode selection, start) onto a
//!   session and renders what the screen shows.
//!
//! - **Configuration** - Minimum player count and preselected mode, loaded
//!   from TOML.
//!
//! # Design Principles
//!
//! 1. **Too few players is a status, not an error** - `start` always completes.
//!
//! 2. **Modes are labels** - Classic, Fast and Custom change nothing else.
//!
//! 3. **No networking** - This crate is pure state, no WebSocket or HTTP.
//!
//! 4. **Serialization-ready** - Sessions and views can be converted to JSON
//!    for clients.
//!
//! # Example
//!
//! ```rust
//! use telephone_state::state::{AppState, GameMode, ViewEvent};
//!
//! let mut app = AppState::new();
//! app.mount_session("room-1").unwrap();
//!
//! app.dispatch("room-1", ViewEvent::Join("Alice".to_string())).unwrap();
//! app.dispatch("room-1", ViewEvent::StartClicked).unwrap();
//!
//! let session = app.sessions.get("room-1").unwrap();
//! assert_eq!(session.status_message(), "Not enough players to start the game.");
//!
//! app.dispatch("room-1", ViewEvent::Join("Bob".to_string())).unwrap();
//! app.dispatch("room-1", ViewEvent::ModeSelected("Fast".to_string())).unwrap();
//! app.dispatch("room-1", ViewEvent::StartClicked).unwrap();
//!
//! let session = app.sessions.get("room-1").unwrap();
//! assert_eq!(session.status_message(), "Game started!");
//! assert_eq!(session.mode(), GameMode::Fast);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
