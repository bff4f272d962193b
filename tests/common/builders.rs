//! Test builders — ergonomic constructors for `Starship`, `NewShip`, and
//! pre-filled rosters.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use hangar_core::roster::NewShip;
use hangar_core::{Roster, Starship};

// ---------------------------------------------------------------------------
// ShipBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NewShip`] test fixtures.
///
/// # Example
///
/// ```rust
/// let item = ShipBuilder::new("X-wing")
///     .manufacturer("Incom Corporation")
///     .passengers("0")
///     .build();
/// ```
pub struct ShipBuilder {
    name: String,
    model: String,
    manufacturer: String,
    passengers: String,
    max_speed: String,
}

impl ShipBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            model: format!("{name} standard model"),
            manufacturer: "test shipyards".to_string(),
            passengers: "0".to_string(),
            max_speed: "900".to_string(),
            name,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn passengers(mut self, passengers: impl Into<String>) -> Self {
        self.passengers = passengers.into();
        self
    }

    pub fn max_speed(mut self, max_speed: impl Into<String>) -> Self {
        self.max_speed = max_speed.into();
        self
    }

    pub fn build(self) -> NewShip {
        NewShip {
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            passengers: self.passengers,
            max_speed: self.max_speed,
        }
    }

    /// Build a full [`Starship`] with an explicit id, bypassing the roster
    /// counter. For storage and markup tests that need fixed ids.
    pub fn build_with_id(self, id: u64) -> Starship {
        Starship {
            id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            passengers: self.passengers,
            max_speed: self.max_speed,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A [`NewShip`] with just a name and a manufacturer.
pub fn ship(name: &str, manufacturer: &str) -> NewShip {
    ShipBuilder::new(name).manufacturer(manufacturer).build()
}

/// A roster pre-filled from `(name, manufacturer)` pairs, ids 1..=n.
pub fn roster_of(entries: &[(&str, &str)]) -> Roster {
    let mut roster = Roster::new();
    roster.replace_all(entries.iter().map(|(n, m)| ship(n, m)));
    roster
}

/// Build a fleet of `n` synthetic ships cycling over three manufacturers.
pub fn build_fleet(n: usize) -> Vec<NewShip> {
    const MAKERS: &[&str] = &[
        "Incom Corporation",
        "Kuat Drive Yards",
        "Sienar Fleet Systems",
    ];
    (0..n)
        .map(|i| {
            ShipBuilder::new(format!("ship-{i:04}"))
                .manufacturer(MAKERS[i % MAKERS.len()])
                .passengers((i % 40).to_string())
                .max_speed(((i * 13) % 1200).to_string())
                .build()
        })
        .collect()
}
