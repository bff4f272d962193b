//! Status bar — the single bottom line of the screen.
//!
//! Left side: the busy spinner while a fetch is in flight, otherwise the
//! most recent notice (load result, save confirmation, command feedback).
//! Right side: roster summary, time of the last successful load, and key
//! hints.
//!
//! The busy indicator lives here: the Controller flips
//! [`StatusState::busy`] when it spawns the fetch and clears it when the
//! outcome message arrives, success or failure.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A user-facing notice. Replaces the alert-style control flow of blocking
/// dialogs: the Loader returns a structured error and the Controller turns
/// it into one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct StatusState {
    /// True while a fetch is outstanding.
    pub busy: bool,
    spinner_frame: usize,
    pub notice: Option<Notice>,
    /// Wall-clock time of the last successful load.
    pub last_loaded: Option<chrono::DateTime<chrono::Local>>,
}

impl StatusState {
    /// Advance the spinner. Called once per event-loop tick; only animates
    /// while busy.
    pub fn tick(&mut self) {
        if self.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Info(message.into()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct StatusBar<'a> {
    state: &'a StatusState,
    ship_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a StatusState, ship_count: usize, theme: &'a Theme) -> Self {
        Self {
            state,
            ship_count,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.state.busy {
            Line::from(Span::styled(
                format!(" {} loading…", self.state.spinner()),
                self.theme.status_busy,
            ))
        } else {
            match &self.state.notice {
                Some(Notice::Info(msg)) => {
                    Line::from(Span::styled(format!(" {msg}"), self.theme.status_info))
                }
                Some(Notice::Error(msg)) => {
                    Line::from(Span::styled(format!(" E  {msg}"), self.theme.status_error))
                }
                None => Line::default(),
            }
        };
        buf.set_line(area.x, area.y, &line, area.width);

        // Summary and keybinding hints at the right edge
        let loaded = self
            .state
            .last_loaded
            .map(|ts| format!("loaded {}  ", ts.format("%H:%M:%S")))
            .unwrap_or_default();
        let hint = format!(
            "{loaded}{} ships  r:load ?:help ",
            self.ship_count
        );
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        if hint_x > area.x {
            buf.set_string(
                hint_x,
                area.y,
                hint,
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
