//! CSV export of per-trial interval rows.
//!
//! One line per trial in generation order, ready for an interval plot
//! (effect as a point, bounds as error bars, detected trials highlighted).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::IntervalRow;

/// Header line of the row CSV.
pub const ROW_HEADER: &str = "index,lower_bound,effect,upper_bound,detected";

/// Write rows to any writer.
pub fn write_rows_csv<W: Write>(rows: &[IntervalRow], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", ROW_HEADER)?;
    for row in rows {
        writeln!(
            writer,
            "{},{:.6},{:.6},{:.6},{}",
            row.index, row.lower_bound, row.effect, row.upper_bound, row.detected
        )?;
    }
    Ok(())
}

/// Write rows to a file at `path`.
pub fn write_rows_csv_file(path: &Path, rows: &[IntervalRow]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_rows_csv(rows, &mut writer)?;
    writer.flush()
}
