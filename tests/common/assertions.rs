//! Domain-specific assertion macros for hangar harnesses.
//!
//! These add context-rich failure messages that make it clear *what*
//! roster invariant was violated.

use hangar_core::Starship;

// ---------------------------------------------------------------------------
// Id assertions
// ---------------------------------------------------------------------------

/// Assert that record ids are strictly increasing in sequence order.
///
/// ```rust
/// assert_ids_strictly_increasing!(roster.ships());
/// ```
#[macro_export]
macro_rules! assert_ids_strictly_increasing {
    ($ships:expr) => {{
        let ships: &[hangar_core::Starship] = &$ships;
        for pair in ships.windows(2) {
            if pair[0].id >= pair[1].id {
                panic!(
                    "assert_ids_strictly_increasing! failed:\n  {:?} (id {}) precedes {:?} (id {})",
                    pair[0].name, pair[0].id, pair[1].name, pair[1].id
                );
            }
        }
    }};
}

/// Assert that no two records share an id.
#[macro_export]
macro_rules! assert_ids_unique {
    ($ships:expr) => {{
        let ships: &[hangar_core::Starship] = &$ships;
        let ids: std::collections::HashSet<u64> = ships.iter().map(|s| s.id).collect();
        if ids.len() != ships.len() {
            panic!(
                "assert_ids_unique! failed: {} records but only {} distinct ids",
                ships.len(),
                ids.len()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Order assertions
// ---------------------------------------------------------------------------

/// Assert that records are in ascending lexicographic order of the given
/// field.
///
/// ```rust
/// assert_sorted_by!(roster.ships(), FieldKey::Manufacturer);
/// ```
#[macro_export]
macro_rules! assert_sorted_by {
    ($ships:expr, $key:expr) => {{
        let ships: &[hangar_core::Starship] = &$ships;
        let key: hangar_core::FieldKey = $key;
        for pair in ships.windows(2) {
            if pair[0].field_text(key) > pair[1].field_text(key) {
                panic!(
                    "assert_sorted_by! failed on {key}:\n  {:?} ({:?}) precedes {:?} ({:?})",
                    pair[0].name,
                    pair[0].field_text(key),
                    pair[1].name,
                    pair[1].field_text(key)
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Record comparison helpers
// ---------------------------------------------------------------------------

/// Assert two record sequences are identical: same ids, same field values,
/// same order.
pub fn assert_same_records(actual: &[Starship], expected: &[Starship]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "record count mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a, e, "record {i} differs");
    }
}
