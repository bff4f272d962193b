//! Markup rendering — pure functions mapping roster records to an HTML
//! table string.
//!
//! This is the export surface: `:export` writes the result to disk, and the
//! TUI table widget is the interactive counterpart over the same records.
//! The renderer never decides between table and placeholder — for an empty
//! roster the *caller* uses [`render_placeholder`] instead of invoking the
//! table renderer, so a zero-row `<table>` is never produced.

use crate::types::{FieldKey, Starship};

/// Render one row per record: five data cells plus an action cell whose
/// delete control is addressed by the record's id.
///
/// Column headers carry the stable field key in `data-field` so a host page
/// can wire header clicks to sorting.
pub fn render_table(ships: &[Starship]) -> String {
    let mut rows = String::new();
    for ship in ships {
        rows.push_str(&render_row(ship));
    }

    let mut headers = String::new();
    for key in FieldKey::ALL {
        headers.push_str(&format!(
            "      <th class=\"sortable\" data-field=\"{key}\">{}</th>\n",
            escape(key.label())
        ));
    }

    format!(
        "<table>\n  <thead>\n    <tr>\n{headers}      <th></th>\n    </tr>\n  </thead>\n  <tbody>\n{rows}  </tbody>\n</table>\n"
    )
}

/// The literal "no data" markup shown instead of an empty table.
pub fn render_placeholder() -> String {
    "<div class=\"placeholder\">No data</div>\n".to_string()
}

fn render_row(ship: &Starship) -> String {
    let mut cells = String::new();
    for key in FieldKey::ALL {
        cells.push_str(&format!(
            "      <td>{}</td>\n",
            escape(ship.field_text(key))
        ));
    }
    format!(
        "    <tr>\n{cells}      <td class=\"actions\"><button data-delete=\"{}\">Delete</button></td>\n    </tr>\n",
        ship.id
    )
}

/// Minimal HTML escaping for text content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ship(id: u64, name: &str) -> Starship {
        Starship {
            id,
            name: name.to_string(),
            model: "model".to_string(),
            manufacturer: "maker".to_string(),
            passengers: "4".to_string(),
            max_speed: "800".to_string(),
        }
    }

    #[test]
    fn table_has_one_row_per_record_in_order() {
        let html = render_table(&[ship(1, "X-wing"), ship(2, "Falcon")]);
        let x = html.find("X-wing").unwrap();
        let f = html.find("Falcon").unwrap();
        assert!(x < f, "rows must appear in record order");
        assert_eq!(html.matches("<tr>").count(), 3); // header + 2 rows
    }

    #[test]
    fn delete_control_is_addressed_by_id() {
        let html = render_table(&[ship(42, "X-wing")]);
        assert!(html.contains("data-delete=\"42\""));
    }

    #[test]
    fn headers_carry_labels_and_field_keys() {
        let html = render_table(&[]);
        for key in FieldKey::ALL {
            assert!(html.contains(&format!("data-field=\"{key}\"")));
            assert!(html.contains(key.label()));
        }
        // Six columns: five sortable + the action column.
        assert_eq!(html.matches("<th").count(), 6);
    }

    #[test]
    fn values_are_escaped() {
        let mut s = ship(1, "<script>alert(1)</script>");
        s.manufacturer = "Sienar & Son \"Works\"".to_string();
        let html = render_table(&[s]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Sienar &amp; Son &quot;Works&quot;"));
    }

    #[test]
    fn placeholder_is_not_a_table() {
        let html = render_placeholder();
        assert!(html.contains("No data"));
        assert!(!html.contains("<table"));
    }
}
