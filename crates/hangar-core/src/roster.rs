//! Roster — the in-memory ordered collection of [`Starship`] records.
//!
//! The roster is the single source of truth for what the table shows; the
//! UI reads from it, never from the fetch result directly. It owns the
//! monotonic id counter: ids are assigned at construction time, survive a
//! save/load round-trip, and are never reused within a process run, even
//! after deletion or a wholesale replace.

use crate::types::{FieldKey, Starship};

/// One fetched item's data fields, not yet assigned an id.
///
/// The loader produces these from the wire form; [`Roster::replace_all`]
/// turns each into a [`Starship`] with the next id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShip {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: String,
    pub max_speed: String,
}

/// Ordered sequence of starship records plus the id counter.
///
/// Order is insertion order unless a [`sort_by`](Roster::sort_by) has been
/// applied, in which case order is the result of the last sort.
#[derive(Debug, Default)]
pub struct Roster {
    ships: Vec<Starship>,
    /// Next id to assign. Explicit state rather than a hidden static so
    /// tests can seed it deterministically via [`Roster::with_next_id`].
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            ships: Vec::new(),
            next_id: 1,
        }
    }

    /// A roster whose counter starts at `next_id`. Used by tests that need
    /// predictable ids mid-sequence.
    pub fn with_next_id(next_id: u64) -> Self {
        Self {
            ships: Vec::new(),
            next_id,
        }
    }

    /// Discard the current records and construct one [`Starship`] per item,
    /// in input order.
    ///
    /// The id counter continues across calls — it is process-lifetime state,
    /// not reset on replace — so ids from a discarded generation are never
    /// handed out again.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = NewShip>) {
        let mut ships = Vec::new();
        for item in items {
            let id = self.next_id;
            self.next_id += 1;
            ships.push(Starship {
                id,
                name: item.name,
                model: item.model,
                manufacturer: item.manufacturer,
                passengers: item.passengers,
                max_speed: item.max_speed,
            });
        }
        self.ships = ships;
        tracing::debug!(count = self.ships.len(), next_id = self.next_id, "roster replaced");
    }

    /// Adopt previously persisted records, preserving their ids and order.
    ///
    /// The counter advances past the highest restored id so subsequent
    /// [`replace_all`](Roster::replace_all) calls stay collision-free.
    pub fn restore(&mut self, ships: Vec<Starship>) {
        let max_id = ships.iter().map(|s| s.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.ships = ships;
        tracing::debug!(count = self.ships.len(), next_id = self.next_id, "roster restored");
    }

    /// Remove the record with the given id. A no-op, not an error, when no
    /// record matches.
    pub fn remove(&mut self, id: u64) {
        let before = self.ships.len();
        self.ships.retain(|ship| ship.id != id);
        if self.ships.len() < before {
            tracing::debug!(id, remaining = self.ships.len(), "ship removed");
        }
    }

    /// Drop every record. The id counter is untouched.
    pub fn clear(&mut self) {
        self.ships.clear();
    }

    /// Reorder ascending by lexicographic comparison of the field's textual
    /// value. The sort is stable, so records comparing equal keep their
    /// relative order and sorting twice yields the same sequence as once.
    pub fn sort_by(&mut self, key: FieldKey) {
        self.ships
            .sort_by(|a, b| a.field_text(key).cmp(b.field_text(key)));
        tracing::debug!(field = %key, "roster sorted");
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// The records in display order.
    pub fn ships(&self) -> &[Starship] {
        &self.ships
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
