//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! The App is the controller: it exclusively owns the [`Roster`], the
//! [`Storage`] handle, and the fetch client — there are no ambient globals.
//! Fetch results arrive over a tokio mpsc channel that the event loop
//! drains between redraws, so the roster is only ever mutated from this one
//! thread.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        roster_table::{RosterTable, RosterTableState},
        status_bar::{StatusBar, StatusState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hangar_api::{Client, FetchError, RawStarship};
use hangar_core::{config::Config, markup, roster::NewShip, FieldKey, Roster, Storage};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDir, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::{io, path::PathBuf, time::Duration};
use tokio::sync::mpsc;

/// What a finished fetch task reports back to the event loop.
type FetchOutcome = Result<Vec<RawStarship>, FetchError>;

/// Default target of `:export` when no path is given.
const EXPORT_PATH: &str = "hangar-export.html";

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub roster: Roster,
    pub storage: Storage,
    pub config: Config,
    pub theme: Theme,
    pub focus: Focus,
    pub table: RosterTableState,
    pub status: StatusState,
    pub command_bar: CommandBarState,
    pub show_help: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    client: Client,
    runtime: tokio::runtime::Runtime,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl App {
    pub fn new(config: Config, theme: Theme, storage: Storage) -> anyhow::Result<Self> {
        let client = Client::from_config(&config.api)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        // Saved state first: restore and render without any network fetch.
        let mut roster = Roster::new();
        let mut status = StatusState::default();
        if let Some(ships) = storage.load() {
            status.info(format!("restored {} starships from disk", ships.len()));
            roster.restore(ships);
        }

        let state = AppState {
            roster,
            storage,
            config,
            theme,
            focus: Focus::Table,
            table: RosterTableState::default(),
            status,
            command_bar: CommandBarState::default(),
            show_help: false,
            quit: false,
        };

        Ok(App {
            state,
            client,
            runtime,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            // Fetch outcomes land here, on the UI thread, between redraws.
            while let Ok(outcome) = self.outcome_rx.try_recv() {
                self.on_fetch_outcome(outcome);
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(100))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when the command bar is focused
                        let app_event = if self.state.focus == Focus::Command {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }

            self.state.status.tick();
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.state.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.state.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.state.command_bar.clear();
                    self.state.focus = Focus::Table;
                }
                AppEvent::Enter => {
                    let input = self.state.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.state.command_bar.clear();
                            self.state.focus = Focus::Table;
                            self.execute_command(cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            self.state.command_bar.clear();
                            self.state.focus = Focus::Table;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.state.command_bar.error = Some(msg);
                        }
                    }
                }
                other => self.state.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.state.show_help = true;
            }

            // Enter command mode with `:`
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                self.state.command_bar.clear();
                self.state.focus = Focus::Command;
            }

            AppEvent::Quit => self.quit_and_save(),
            AppEvent::Load => self.start_load(),
            AppEvent::ClearData => self.clear_data(),
            AppEvent::SaveRoster => self.save_roster(),

            AppEvent::DeleteRow => {
                if let Some(id) =
                    RosterTable::selected_id(self.state.roster.ships(), &self.state.table)
                {
                    self.delete_ship(id);
                }
            }

            AppEvent::SortColumn(n) => {
                if let Some(key) = FieldKey::from_column(n as usize) {
                    self.sort_roster(key);
                }
            }

            // Dismiss the current notice
            AppEvent::Escape => {
                self.state.status.notice = None;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => {
                let total = self.state.roster.len();
                self.state.table.handle(&other, total);
            }
        }
    }

    /// Execute a parsed [`Command`] against the application state.
    fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit_and_save(),
            Command::Help => {
                self.state.show_help = !self.state.show_help;
            }
            Command::Load => self.start_load(),
            Command::Clear => self.clear_data(),
            Command::Save => self.save_roster(),
            Command::Delete(id) => self.delete_ship(id),
            Command::Sort(key) => self.sort_roster(key),
            Command::Export(path) => self.export_html(path),
            Command::Theme(name) => {
                self.state.theme = match name.to_ascii_lowercase().as_str() {
                    "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                    _ => Theme::load_default(),
                };
            }
        }
    }

    // ── Roster actions ─────────────────────────────────────────────────────

    /// Spawn the fetch on the runtime and flip the busy indicator on.
    ///
    /// A load while one is outstanding is ignored rather than raced: the
    /// busy flag doubles as the overlap guard.
    fn start_load(&mut self) {
        if self.state.status.busy {
            tracing::debug!("load ignored, fetch already in flight");
            return;
        }
        self.state.status.busy = true;
        self.state.status.notice = None;

        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = client.fetch_starships().await;
            // A send failure only means the app is already shutting down.
            let _ = tx.send(outcome);
        });
    }

    /// Apply a finished fetch. The busy indicator clears in both outcomes;
    /// on failure the roster is left exactly as it was.
    fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let s = &mut self.state;
        s.status.busy = false;
        match outcome {
            Ok(items) => {
                s.roster.replace_all(items.into_iter().map(NewShip::from));
                s.table.reset();
                s.table.sorted_by = None;
                s.status.last_loaded = Some(chrono::Local::now());
                s.status.info(format!("loaded {} starships", s.roster.len()));
            }
            Err(err) => {
                tracing::warn!(%err, "fetch failed");
                s.status.error(err.to_string());
            }
        }
    }

    /// Erase the persisted roster AND the in-memory one, so the view and
    /// durable state stay consistent; the placeholder renders immediately.
    fn clear_data(&mut self) {
        let s = &mut self.state;
        match s.storage.clear() {
            Ok(()) => {
                s.roster.clear();
                s.table.clamp(0);
                s.table.sorted_by = None;
                s.status.info("cleared saved and displayed data");
            }
            Err(err) => {
                tracing::warn!(%err, "clear failed");
                s.status.error(format!("clear failed: {err}"));
            }
        }
    }

    fn save_roster(&mut self) {
        let s = &mut self.state;
        if s.roster.is_empty() {
            // Saving nothing never clobbers previously persisted state.
            s.status.info("roster empty — nothing saved");
            return;
        }
        match s.storage.save(&s.roster) {
            Ok(()) => s.status.info(format!("saved {} starships", s.roster.len())),
            Err(err) => {
                tracing::warn!(%err, "save failed");
                s.status.error(format!("save failed: {err}"));
            }
        }
    }

    fn delete_ship(&mut self, id: u64) {
        let s = &mut self.state;
        s.roster.remove(id);
        s.table.clamp(s.roster.len());
    }

    fn sort_roster(&mut self, key: FieldKey) {
        let s = &mut self.state;
        s.roster.sort_by(key);
        s.table.sorted_by = Some(key);
    }

    fn export_html(&mut self, path: Option<PathBuf>) {
        let s = &mut self.state;
        let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_PATH));
        let html = if s.roster.is_empty() {
            markup::render_placeholder()
        } else {
            markup::render_table(s.roster.ships())
        };
        match std::fs::write(&path, html) {
            Ok(()) => s.status.info(format!("exported to {}", path.display())),
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "export failed");
                s.status.error(format!("export failed: {err}"));
            }
        }
    }

    /// Quit, persisting a non-empty roster on the way out so it survives
    /// the restart.
    fn quit_and_save(&mut self) {
        if !self.state.roster.is_empty() {
            if let Err(err) = self.state.storage.save(&self.state.roster) {
                tracing::warn!(%err, "save on quit failed");
            }
        }
        tracing::debug!("quit");
        self.state.quit = true;
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: body | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(area);

    // The table renderer is never invoked with zero records — the
    // placeholder takes its place, decided here, not in the renderer.
    if state.roster.is_empty() {
        draw_placeholder(frame, state, vert[0]);
    } else {
        frame.render_widget(
            RosterTable::new(
                state.roster.ships(),
                &state.table,
                state.config.ui.show_row_ids,
                state.focus == Focus::Table,
                &state.theme,
            ),
            vert[0],
        );
    }

    frame.render_widget(
        StatusBar::new(&state.status, state.roster.len(), &state.theme),
        vert[1],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn draw_placeholder(frame: &mut Frame, state: &AppState, area: Rect) {
    let border_style = if state.focus == Focus::Table {
        state.theme.border_focused
    } else {
        state.theme.border_unfocused
    };
    let block = Block::bordered()
        .title(" Starships (0) ")
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centre the two placeholder lines.
    let pad = (inner.height as usize).saturating_sub(2) / 2;
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::styled(
        state.config.ui.placeholder_text.clone(),
        state.theme.placeholder,
    ));
    lines.push(Line::styled("press r to load", state.theme.placeholder));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
