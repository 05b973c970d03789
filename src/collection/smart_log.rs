//! Pulls counters out of the human-readable `nvme smart-log` report.
//!
//! A typical report contains lines such as:
//!
//! ```text
//! data_units_read                         : 2345678 (1.20 TB)
//! data_units_written                      : 12345 (6.32 GB)
//! ```

use crate::{
    collection::error::{CollectionError, CollectionResult},
    constants::{DATA_UNITS_FIELD_INDEX, DATA_UNITS_WRITTEN_LABEL},
};

/// Returns the field at [`DATA_UNITS_FIELD_INDEX`] of the first line that
/// contains `label`.
///
/// Matching lines too short to have that field are skipped, and the search
/// moves on to the next line.
pub fn find_field<'a>(text: &'a str, label: &str) -> Option<&'a str> {
    text.lines()
        .filter(|line| line.contains(label))
        .find_map(|line| {
            let field = line.split_whitespace().nth(DATA_UNITS_FIELD_INDEX);
            if field.is_none() {
                debug!("Skipping short '{label}' line: {line:?}");
            }
            field
        })
}

/// Returns the data units written counter from a smart-log report.
///
/// A counter of zero is reported as [`CollectionError::NotFound`], the same as
/// a report that has no such line at all.
pub fn data_units_written(text: &str) -> CollectionResult<u64> {
    let units = match find_field(text, DATA_UNITS_WRITTEN_LABEL) {
        Some(field) => {
            debug!("Found {DATA_UNITS_WRITTEN_LABEL} field: '{field}'");
            field.parse::<u64>()?
        }
        None => 0,
    };

    if units == 0 {
        Err(CollectionError::NotFound)
    } else {
        Ok(units)
    }
}
