// CSV export for spreadsheet users.
//
// Excel only detects UTF-8 in a CSV when the file starts with a byte-order
// mark; without it Hangul outlet names come out garbled.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::models::{ColumnKind, CoverageReport};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const EXPORT_COLUMNS: [ColumnKind; 5] = [
    ColumnKind::Status,
    ColumnKind::Title,
    ColumnKind::Url,
    ColumnKind::Score,
    ColumnKind::Verdict,
];

/// Write the report rows as CSV (BOM + header + one line per target).
pub fn write_csv<W: Write>(report: &CoverageReport, mut out: W) -> Result<()> {
    out.write_all(UTF8_BOM).context("Failed to write byte-order mark")?;

    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["Outlet"];
    header.extend(EXPORT_COLUMNS.iter().map(|kind| kind.header()));
    writer.write_record(&header).context("Failed to write CSV header")?;

    for row in &report.rows {
        let mut record = vec![row.outlet.clone()];
        record.extend(EXPORT_COLUMNS.iter().map(|kind| kind.cell(row)));
        writer.write_record(&record).context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export the report to a CSV file at `path`.
pub fn export_csv(report: &CoverageReport, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(report, file)
}
