use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::exchange_rate::ExchangeRecord;

/// Overwrites `path` with one record per line.
pub fn save_to_file(path: &Path, records: &[ExchangeRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for record in records {
        writeln!(writer, "{}", record)?;
    }

    writer.flush()?;
    Ok(())
}
