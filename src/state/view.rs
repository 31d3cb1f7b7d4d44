//! Session view.
//!
//! Binds UI events to a [`Session`] and produces what the screen shows:
//! a serializable [`ViewModel`] for clients and a plain-text frame.

use serde::Serialize;
use tracing::{instrument, warn};

use super::config::SessionConfig;
use super::mode::{GameMode, ModeParseError};
use super::session::Session;

/// Heading shown at the top of the view.
pub const TITLE: &str = "Gartic Phone";

/// Label of the start control.
pub const START_LABEL: &str = "Start Game";

/// Text shown where the drawing surface will go.
pub const CANVAS_PLACEHOLDER: &str = "[drawing canvas not implemented]";

/// User-triggered events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A player joined under this name
    Join(String),

    /// Raw value picked in the mode selector
    ModeSelected(String),

    /// Start control pressed
    StartClicked,
}

impl ViewEvent {
    /// Apply this event to a session.
    ///
    /// Only a mode value outside the selector options is rejected, and the
    /// session is left untouched when it is.
    pub fn apply_to(self, session: &mut Session) -> Result<(), ViewError> {
        match self {
            Self::Join(name) => session.join(name),
            Self::StartClicked => session.start(),
            Self::ModeSelected(value) => {
                let mode = value.parse::<GameMode>().map_err(|e| {
                    warn!(%value, "Rejected mode selection");
                    e
                })?;
                session.set_mode(mode);
            }
        }
        Ok(())
    }
}

/// View errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("invalid mode selection")]
    InvalidMode(#[from] ModeParseError),
}

/// Snapshot of everything the view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub title: &'static str,
    pub status_line: String,
    pub mode: GameMode,
    pub mode_options: Vec<GameMode>,
    pub players: Vec<String>,
    pub start_label: &'static str,
    /// Reserved for the drawing surface
    pub canvas: Option<()>,
}

/// View over a single session.
#[derive(Debug, Clone)]
pub struct SessionView {
    session: Session,
}

impl SessionView {
    /// Mount a view with fresh session state.
    pub fn mount(session_id: String, config: &SessionConfig) -> Self {
        Self {
            session: Session::with_config(session_id, config),
        }
    }

    /// Wrap an existing session.
    pub fn from_session(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Unmount the view, handing back the discarded state.
    pub fn unmount(self) -> Session {
        self.session
    }

    /// Dispatch a UI event.
    #[instrument(skip(self), fields(session_id = %self.session.id))]
    pub fn handle(&mut self, event: ViewEvent) -> Result<(), ViewError> {
        event.apply_to(&mut self.session)
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel {
            title: TITLE,
            status_line: format!("Status: {}", self.session.status()),
            mode: self.session.mode(),
            mode_options: GameMode::ALL.to_vec(),
            players: self.session.player_names().map(str::to_string).collect(),
            start_label: START_LABEL,
            canvas: None,
        }
    }

    /// Render a plain-text frame.
    pub fn render(&self) -> String {
        let model = self.view_model();

        let options: Vec<String> = model
            .mode_options
            .iter()
            .map(|m| {
                if *m == model.mode {
                    format!("[{}]", m)
                } else {
                    m.to_string()
                }
            })
            .collect();

        let mut lines = vec![
            model.title.to_string(),
            model.status_line.clone(),
            format!("Game Mode: {}", options.join(" ")),
            "Players".to_string(),
        ];
        lines.extend(model.players.iter().map(|name| format!("  - {}", name)));
        lines.push(format!("<{}>", model.start_label));
        lines.push(CANVAS_PLACEHOLDER.to_string());

        let mut frame = lines.join("\n");
        frame.push('\n');
        frame
    }
}
