//! Loading and saving holiday calendars as date-array files.
//!
//! Each helper opens the file, runs a single read or write pass, and closes
//! it on every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::info;
use wd_core::errors::{Error, Result};
use wd_time::HolidayCalendar;

use crate::reader::StreamDateReader;
use crate::writer::StreamDateWriter;

/// Merge the holidays stored at `path` into `calendar`.
///
/// Returns the number of holidays actually inserted.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be opened or read, and
/// [`Error::Syntax`] if its content is not a date array.
pub fn load_file(calendar: &mut HolidayCalendar, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = StreamDateReader::new(BufReader::new(file));
    let inserted = calendar.load(&mut reader)?;
    info!(path = %path.display(), inserted, "loaded holiday file");
    Ok(inserted)
}

/// Write every holiday of `calendar` to `path`, replacing its content.
///
/// Returns the number of holidays written.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn save_file(calendar: &HolidayCalendar, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = StreamDateWriter::new(BufWriter::new(file));
    let written = calendar.save(&mut writer)?;
    info!(path = %path.display(), written, "saved holiday file");
    Ok(written)
}

fn io_error(path: &Path, e: std::io::Error) -> Error {
    Error::Io(format!("{}: {e}", path.display()))
}
