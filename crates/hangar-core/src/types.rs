//! Core types for hangar-core.
//!
//! This module defines the fundamental data structures shared across all
//! architectural layers: the [`Starship`] record held by the roster, and the
//! [`FieldKey`] discriminant used to address its sortable columns.

use serde::{Deserialize, Serialize};

/// One starship record as held by the roster and rendered as a table row.
///
/// All data fields are kept as text, exactly as the remote API provided them.
/// SWAPI serves every value as a JSON string, including numerics and the
/// `"n/a"` / `"unknown"` sentinels, so no numeric conversion is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    /// Roster-assigned identifier. Unique within a process run and never
    /// reused, even after the record is deleted. Persisted alongside the
    /// data fields so a restored roster keeps its ids.
    pub id: u64,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    /// Passenger capacity as reported by the source.
    pub passengers: String,
    /// Maximum atmosphering speed as reported by the source.
    pub max_speed: String,
}

impl Starship {
    /// The textual value of the field addressed by `key`, as used for
    /// lexicographic sorting and table rendering.
    pub fn field_text(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Model => &self.model,
            FieldKey::Manufacturer => &self.manufacturer,
            FieldKey::Passengers => &self.passengers,
            FieldKey::MaxSpeed => &self.max_speed,
        }
    }
}

/// Internal stable name for a sortable column, distinct from the
/// human-readable label shown in the table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Model,
    Manufacturer,
    Passengers,
    MaxSpeed,
}

impl FieldKey {
    /// All keys in column order. The table header, the sort shortcuts
    /// (`1`–`5`), and the markup renderer all iterate this.
    pub const ALL: [FieldKey; 5] = [
        FieldKey::Name,
        FieldKey::Model,
        FieldKey::Manufacturer,
        FieldKey::Passengers,
        FieldKey::MaxSpeed,
    ];

    /// Human-readable column label.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Model => "Model",
            FieldKey::Manufacturer => "Manufacturer",
            FieldKey::Passengers => "Passengers",
            FieldKey::MaxSpeed => "Max speed",
        }
    }

    /// Resolve a column label to its key.
    ///
    /// Matching is case-insensitive and also accepts the stable key form
    /// (`max-speed`) so the command bar can use either. Returns `None` for
    /// anything else; callers treat that as a no-op or a command error,
    /// never a failure.
    pub fn from_label(label: &str) -> Option<FieldKey> {
        match label.trim().to_ascii_lowercase().as_str() {
            "name" => Some(FieldKey::Name),
            "model" => Some(FieldKey::Model),
            "manufacturer" => Some(FieldKey::Manufacturer),
            "passengers" => Some(FieldKey::Passengers),
            "max speed" | "max-speed" | "maxspeed" => Some(FieldKey::MaxSpeed),
            _ => None,
        }
    }

    /// Column position, 1-based, matching the `1`–`5` sort shortcuts.
    pub fn from_column(n: usize) -> Option<FieldKey> {
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKey::Name => write!(f, "name"),
            FieldKey::Model => write!(f, "model"),
            FieldKey::Manufacturer => write!(f, "manufacturer"),
            FieldKey::Passengers => write!(f, "passengers"),
            FieldKey::MaxSpeed => write!(f, "max-speed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
