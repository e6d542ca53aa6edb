// Merge-by-position for externally stored grids.
//
// A spreadsheet collaborator owns the grid and picks the column position;
// the report only supplies a `DerivedColumn`. Row 0 of the grid is the
// header row, data rows follow in report order.

use crate::report::models::DerivedColumn;

/// Return a copy of `grid` with `column` inserted at `position`.
///
/// Rows shorter than `position` are padded with empty cells first. Grid rows
/// beyond the column's length get an empty cell; extra column values past
/// the end of the grid become new rows.
pub fn merge_column(
    grid: &[Vec<String>],
    column: &DerivedColumn,
    position: usize,
) -> Vec<Vec<String>> {
    let mut cells = std::iter::once(&column.header).chain(column.values.iter());
    let total_rows = grid.len().max(column.values.len() + 1);

    let mut merged: Vec<Vec<String>> = grid.to_vec();
    merged.resize_with(total_rows, Vec::new);

    for row in merged.iter_mut() {
        if row.len() < position {
            row.resize(position, String::new());
        }
        let cell = cells.next().cloned().unwrap_or_default();
        row.insert(position, cell);
    }

    merged
}
