//! `itin-export` — JSON export/import of a full itinerary.
//!
//! The interchange format is pretty-printed JSON covering every field of the
//! [`Itinerary`] tree; exporting and re-importing yields a structurally
//! equal record.  This is the only layer of the workspace that performs I/O
//! or returns `Result` — the planning kernel itself is total.
//!
//! Download naming follows the established convention: runs of whitespace
//! in the trip title become single underscores and the fixed suffix
//! `_itinerary.json` is appended, so "Tokyo Adventure" exports as
//! `Tokyo_Adventure_itinerary.json`.

use std::path::Path;

use itin_plan::Itinerary;

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{ExportError, ExportResult};

/// Serialize an itinerary to the pretty-printed interchange form.
pub fn to_json(itinerary: &Itinerary) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(itinerary)?)
}

/// Parse an itinerary back from its interchange form.
///
/// Fields a form may leave blank are optional in the JSON as well, so a
/// record exported by an older or sparser producer still loads.
pub fn from_json(json: &str) -> ExportResult<Itinerary> {
    Ok(serde_json::from_str(json)?)
}

/// Download file name derived from a trip title.
///
/// Every run of whitespace collapses to one `_`; the title is otherwise
/// untouched.
pub fn export_file_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 16);
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }
    name.push_str("_itinerary.json");
    name
}

/// Write the interchange form of `itinerary` to `path`.
pub fn write_file(itinerary: &Itinerary, path: &Path) -> ExportResult<()> {
    std::fs::write(path, to_json(itinerary)?)?;
    Ok(())
}

/// Read an itinerary previously written by [`write_file`].
pub fn read_file(path: &Path) -> ExportResult<Itinerary> {
    let json = std::fs::read_to_string(path)?;
    from_json(&json)
}
