//! Table normalization: header and body into a rectangular grid.

use crate::settings::Orientation;

/// Assemble a rectangular grid of raw cell values.
///
/// The header fixes the field count. Body rows shorter than the header are
/// padded with empty cells; values beyond the header's width are dropped.
///
/// `Vertical` orientation keeps records as rows: the grid is the header
/// followed by the body. `Horizontal` orientation transposes: one grid row
/// per field, with the field name in column 0 and the field's value for
/// each record after it.
pub fn normalize(header: &[String], body: &[Vec<String>], orientation: Orientation) -> Vec<Vec<String>> {
    match orientation {
        Orientation::Vertical => vertical(header, body),
        Orientation::Horizontal => horizontal(header, body),
    }
}

fn vertical(header: &[String], body: &[Vec<String>]) -> Vec<Vec<String>> {
    let columns = header.len();
    let mut grid = Vec::with_capacity(body.len() + 1);
    grid.push(header.to_vec());
    for record in body {
        grid.push(
            (0..columns)
                .map(|field| record.get(field).cloned().unwrap_or_default())
                .collect(),
        );
    }
    grid
}

fn horizontal(header: &[String], body: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(header.len());
    for (field, name) in header.iter().enumerate() {
        let mut row = Vec::with_capacity(body.len() + 1);
        row.push(name.clone());
        for record in body {
            row.push(record.get(field).cloned().unwrap_or_default());
        }
        grid.push(row);
    }
    grid
}
