//! Row padding for layer matrices.
//!
//! Rows typed in by the user follow the physical layout, so a thumb cluster
//! row is usually shorter than the alpha rows. PRK expects every row of a
//! layer to have the same width, so short rows are centered by padding both
//! sides with `KC_NO`. When the shortfall is odd the extra pad goes to the
//! back; generated files depend on this tie-break.

use crate::constants::PADDING_TOKEN;
use crate::models::Row;

/// Pads every row in `rows` in place to the width of the widest row.
///
/// Rows already at full width are left untouched. An empty slice is a no-op.
pub fn normalize(rows: &mut [Row]) {
    let Some(width) = rows.iter().map(Vec::len).max() else {
        return;
    };

    for row in rows.iter_mut().filter(|row| row.len() < width) {
        pad_row(row, width);
    }
}

/// Returns a normalized copy of `rows`.
#[must_use]
pub fn normalized(mut rows: Vec<Row>) -> Vec<Row> {
    normalize(&mut rows);
    rows
}

/// Centers `row` within `width` cells.
fn pad_row(row: &mut Row, width: usize) {
    let diff = width - row.len();
    let front = diff / 2;
    let back = diff / 2 + diff % 2;

    let mut padded = Vec::with_capacity(width);
    padded.extend(std::iter::repeat_n(PADDING_TOKEN.to_string(), front));
    padded.append(row);
    padded.extend(std::iter::repeat_n(PADDING_TOKEN.to_string(), back));
    *row = padded;
}
