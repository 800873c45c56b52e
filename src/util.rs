use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Round to two decimal places.
pub fn round2(x: f64) -> f64 {
    // Halfway cases round away from zero.
    (x * 100.0).round() / 100.0
}

/// Create or truncate `destination` and fill it through a buffered writer.
///
/// The file is flushed before returning, so write errors are reported here
/// rather than lost on drop.
pub fn write_file<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(destination).map_err(|e| Error::io(destination, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(destination, e))
}
