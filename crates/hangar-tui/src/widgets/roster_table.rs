//! Roster table widget — the scrollable starship table filling the screen.
//!
//! # Navigation (normal mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `G` | Jump to the last row |
//!
//! # Scroll semantics
//!
//! `scroll_offset` = number of rows hidden at the bottom (0 = tail).
//! `cursor` = absolute index into the roster (0 = first row). The cursor is
//! always kept within the visible window; moving it past the edge
//! auto-scrolls. Delete targets the cursor row.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use hangar_core::{FieldKey, Starship};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

const PAGE_STEP: usize = 10;

/// Relative column widths for the five data columns, in per-mille of the
/// available width (the remainder is given to the manufacturer column).
const COLUMN_MILLE: [u16; 5] = [200, 260, 0, 120, 140];

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct RosterTableState {
    /// Number of rows hidden at the bottom (0 = tail visible).
    pub scroll_offset: usize,
    /// Absolute index into the roster of the highlighted row.
    pub cursor: usize,
    /// Column of the last applied sort; its header is styled differently.
    pub sorted_by: Option<FieldKey>,
    /// Cached from the last render so `handle()` can do cursor-aware
    /// scrolling.
    last_height: Cell<usize>,
}

impl Default for RosterTableState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            cursor: 0,
            sorted_by: None,
            last_height: Cell::new(40),
        }
    }
}

impl RosterTableState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Returns `(start, end)` — the exclusive range of rows currently
    /// visible out of `total`.
    fn visible_range(&self, total: usize) -> (usize, usize) {
        let end = total.saturating_sub(self.scroll_offset);
        let start = end.saturating_sub(self.height());
        (start, end)
    }

    /// Keep the cursor valid after the roster shrank (delete, clear,
    /// replace). Call with the new row count.
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else if self.cursor >= total {
            self.cursor = total - 1;
        }
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(1));
    }

    /// Reset cursor and scroll to the top, e.g. after a wholesale replace.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent, total: usize) {
        if total == 0 {
            return;
        }

        match event {
            // ── Row-by-row cursor movement ─────────────────────────────────
            AppEvent::Nav(Direction::Up) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                // If the cursor scrolled above the window, pull the window up
                let (start, _) = self.visible_range(total);
                if self.cursor < start {
                    self.scroll_offset = total.saturating_sub(self.cursor + self.height());
                }
                tracing::debug!(cursor = self.cursor, scroll_offset = self.scroll_offset, "table: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                // If the cursor scrolled below the window, push the window down
                let (_, end) = self.visible_range(total);
                if self.cursor >= end {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                }
                tracing::debug!(cursor = self.cursor, scroll_offset = self.scroll_offset, "table: cursor down");
            }

            // ── Page scrolling ─────────────────────────────────────────────
            AppEvent::ScrollUp => {
                self.scroll_offset = (self.scroll_offset + PAGE_STEP).min(total.saturating_sub(1));
                let (start, _) = self.visible_range(total);
                self.cursor = start;
            }
            AppEvent::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
                let (_, end) = self.visible_range(total);
                self.cursor = end.saturating_sub(1);
            }

            // ── Jump to the last row ───────────────────────────────────────
            AppEvent::JumpBottom => {
                self.scroll_offset = 0;
                self.cursor = total.saturating_sub(1);
            }

            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RosterTable<'a> {
    ships: &'a [Starship],
    state: &'a RosterTableState,
    show_ids: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RosterTable<'a> {
    pub fn new(
        ships: &'a [Starship],
        state: &'a RosterTableState,
        show_ids: bool,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            ships,
            state,
            show_ids,
            focused,
            theme,
        }
    }

    /// The id of the record under the cursor, if any.
    pub fn selected_id(ships: &[Starship], state: &RosterTableState) -> Option<u64> {
        ships.get(state.cursor).map(|ship| ship.id)
    }
}

impl Widget for RosterTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title(format!(" Starships ({}) ", self.ships.len()))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // One line is spent on the column header.
        let height = (inner.height as usize).saturating_sub(1);
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        let id_width = if self.show_ids { 6 } else { 0 };
        let widths = column_widths(inner.width.saturating_sub(1 + id_width));

        let total = self.ships.len();
        let (start, end) = {
            let end = total.saturating_sub(self.state.scroll_offset);
            (end.saturating_sub(height), end)
        };

        let cursor_row: Option<usize> =
            if self.focused && self.state.cursor >= start && self.state.cursor < end {
                Some(self.state.cursor - start)
            } else {
                None
            };

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height + 1);
        lines.push(header_line(self.show_ids, self.state.sorted_by, widths, self.theme));
        for (row, ship) in self.ships[start..end].iter().enumerate() {
            let mut line = render_ship(ship, self.show_ids, widths, self.theme);
            if Some(row) == cursor_row {
                line = line.patch_style(self.theme.table_selected);
            }
            lines.push(line);
        }

        // Split inner into text (fill) + 1-column scrollbar strip.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

/// Absolute column widths for the five data columns given the usable width.
/// The manufacturer column absorbs whatever the fixed shares leave over.
fn column_widths(total: u16) -> [u16; 5] {
    let mut widths = [0u16; 5];
    let mut used = 0u16;
    for (i, mille) in COLUMN_MILLE.iter().enumerate() {
        if *mille > 0 {
            widths[i] = (total as u32 * *mille as u32 / 1000) as u16;
            used += widths[i];
        }
    }
    widths[2] = total.saturating_sub(used);
    widths
}

fn header_line(
    show_ids: bool,
    sorted_by: Option<FieldKey>,
    widths: [u16; 5],
    theme: &Theme,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    if show_ids {
        spans.push(Span::styled(fit("Id", 6), theme.table_header));
    }
    for (i, key) in FieldKey::ALL.into_iter().enumerate() {
        let style = if sorted_by == Some(key) {
            theme.table_header_sorted
        } else {
            theme.table_header
        };
        // The numeric prefix doubles as the sort shortcut.
        spans.push(Span::styled(
            fit(&format!("{}:{}", i + 1, key.label()), widths[i] as usize),
            style,
        ));
    }
    Line::from(spans)
}

fn render_ship(ship: &Starship, show_ids: bool, widths: [u16; 5], theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    if show_ids {
        spans.push(Span::styled(fit(&ship.id.to_string(), 6), theme.table_row_id));
    }

    for (i, key) in FieldKey::ALL.into_iter().enumerate() {
        let text = fit(ship.field_text(key), widths[i] as usize);
        let style = match key {
            FieldKey::Manufacturer => theme.manufacturer_style(&ship.manufacturer),
            FieldKey::Passengers | FieldKey::MaxSpeed => {
                Style::default().add_modifier(Modifier::DIM)
            }
            _ => Style::default(),
        };
        spans.push(Span::styled(text, style));
    }

    Line::from(spans)
}

/// Pad or truncate to exactly `width` characters (one trailing space of the
/// width is kept as a column gap; truncation is marked with `…`).
fn fit(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if width == 1 {
        return " ".to_string();
    }
    let body = width - 1;
    let count = text.chars().count();
    if count > body {
        let truncated: String = text.chars().take(body.saturating_sub(1)).collect();
        format!("{truncated}… ")
    } else {
        format!("{text}{} ", " ".repeat(body - count))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
