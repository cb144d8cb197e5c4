//! Forward-only writer of date arrays.

use std::io::Write;

use tracing::trace;
use wd_core::errors::{Error, Result};
use wd_time::{Date, DateSink};

use crate::syntax::{ARRAY_END, ARRAY_START, QUOTE, SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    NotStarted,
    InArray,
    Committed,
}

/// Writes dates as a compact array of quoted `YYYY-MM-DD` literals.
///
/// Dates are emitted in the order given, duplicates included.  Nothing is
/// written before the first [`write`](Self::write) or
/// [`commit`](Self::commit); committing without any date produces `[]`.
///
/// ```
/// use wd_io::StreamDateWriter;
/// use wd_time::Date;
///
/// let mut writer = StreamDateWriter::new(Vec::new());
/// writer.write(Date::from_ymd(2001, 12, 21).unwrap()).unwrap();
/// writer.write(Date::from_ymd(2015, 12, 21).unwrap()).unwrap();
/// writer.commit().unwrap();
/// assert_eq!(writer.into_inner(), br#"["2001-12-21","2015-12-21"]"#);
/// ```
#[derive(Debug)]
pub struct StreamDateWriter<W: Write> {
    inner: W,
    state: WriterState,
}

impl<W: Write> StreamDateWriter<W> {
    /// Wrap a byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: WriterState::NotStarted,
        }
    }

    /// Append one date to the array.
    ///
    /// # Errors
    /// * [`Error::WriteAfterCommit`] if the array was already committed.
    /// * [`Error::Io`] if the underlying sink fails.
    pub fn write(&mut self, date: Date) -> Result<()> {
        match self.state {
            WriterState::Committed => return Err(Error::WriteAfterCommit),
            WriterState::NotStarted => {
                self.inner.write_all(&[ARRAY_START])?;
                self.state = WriterState::InArray;
                trace!("date array started");
            }
            WriterState::InArray => self.inner.write_all(&[SEPARATOR])?,
        }
        let q = char::from(QUOTE);
        write!(self.inner, "{q}{date}{q}")?;
        Ok(())
    }

    /// Close the array and flush the sink.
    ///
    /// # Errors
    /// * [`Error::WriteAfterCommit`] if the array was already committed.
    /// * [`Error::Io`] if the underlying sink fails.
    pub fn commit(&mut self) -> Result<()> {
        match self.state {
            WriterState::Committed => return Err(Error::WriteAfterCommit),
            WriterState::NotStarted => self.inner.write_all(&[ARRAY_START, ARRAY_END])?,
            WriterState::InArray => self.inner.write_all(&[ARRAY_END])?,
        }
        self.state = WriterState::Committed;
        self.inner.flush()?;
        trace!("date array committed");
        Ok(())
    }

    /// Whether [`commit`](Self::commit) has succeeded.
    pub fn is_committed(&self) -> bool {
        self.state == WriterState::Committed
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DateSink for StreamDateWriter<W> {
    fn push(&mut self, date: Date) -> Result<()> {
        self.write(date)
    }

    fn finish(&mut self) -> Result<()> {
        self.commit()
    }
}
