//! hangar-core — core library for hangar.
//!
//! This crate exposes the architectural layers shared by the API client and
//! the TUI shell, plus the record types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Loader (hangar-api) ──► Roster ──► Renderer (markup / TUI)
//!                            │
//!                            └──► Storage
//! ```
//!
//! The roster is the single source of truth; the UI reads from it, never
//! from the fetch result directly. Storage round-trips the roster to a
//! fixed key on disk so it survives restarts.

pub mod config;
pub mod markup;
pub mod roster;
pub mod storage;
pub mod types;

pub use roster::Roster;
pub use storage::Storage;
pub use types::{FieldKey, Starship};
