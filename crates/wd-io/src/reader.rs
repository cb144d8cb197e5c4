//! Forward-only reader of date arrays.

use std::io::BufRead;

use tracing::trace;
use wd_core::errors::{Error, Result};
use wd_time::{Date, DateSource};

use crate::syntax::{ends_literal, is_separator, is_whitespace, ARRAY_END, ARRAY_START};

/// Longest literal kept for error messages.
const MAX_LITERAL: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    NotStarted,
    InArray,
    Finished,
    Failed,
}

/// Reads a bracketed, comma-separated array of quoted `YYYY-MM-DD` literals
/// one date at a time.
///
/// The reader never consumes more of the underlying stream than it needs:
/// after the closing `]` has been returned as end-of-sequence, any trailing
/// bytes are left unread.
///
/// An error is terminal: every later [`read`](Self::read) returns the same
/// error again.
///
/// ```
/// use wd_io::StreamDateReader;
/// use wd_time::Date;
///
/// let mut reader = StreamDateReader::new(&b"[\"2001-12-21\", \"2015-12-21\"]"[..]);
/// assert_eq!(reader.read().unwrap(), Some(Date::from_ymd(2001, 12, 21).unwrap()));
/// assert_eq!(reader.read().unwrap(), Some(Date::from_ymd(2015, 12, 21).unwrap()));
/// assert_eq!(reader.read().unwrap(), None);
/// assert!(reader.read().is_err());
/// ```
#[derive(Debug)]
pub struct StreamDateReader<R> {
    inner: R,
    state: ReaderState,
    literal: Vec<u8>,
    failure: Option<Error>,
}

impl<R: BufRead> StreamDateReader<R> {
    /// Wrap a buffered byte stream positioned before the array.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            state: ReaderState::NotStarted,
            literal: Vec::with_capacity(MAX_LITERAL),
            failure: None,
        }
    }

    /// Read the next date.
    ///
    /// Returns `Ok(None)` when the closing `]` is reached.
    ///
    /// # Errors
    /// * [`Error::Syntax`] if the array start is missing, a literal is not a
    ///   valid `YYYY-MM-DD` date, or the stream ends before `]`.
    /// * [`Error::ReadPastEnd`] if called again after `Ok(None)`.
    /// * [`Error::Io`] if the underlying stream fails.
    ///
    /// Once an error other than `ReadPastEnd` has been returned, it is
    /// returned again by every later call.
    pub fn read(&mut self) -> Result<Option<Date>> {
        match self.state {
            ReaderState::Finished => return Err(Error::ReadPastEnd),
            ReaderState::Failed => {
                return Err(self.failure.clone().unwrap_or(Error::ReadPastEnd));
            }
            ReaderState::NotStarted | ReaderState::InArray => {}
        }
        let result = self.read_next();
        if let Err(e) = &result {
            trace!(error = %e, "date array reader failed");
            self.failure = Some(e.clone());
            self.state = ReaderState::Failed;
        }
        result
    }

    /// Whether the closing bracket has been consumed.
    pub fn is_finished(&self) -> bool {
        self.state == ReaderState::Finished
    }

    /// Whether a previous read failed.
    pub fn is_failed(&self) -> bool {
        self.state == ReaderState::Failed
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_next(&mut self) -> Result<Option<Date>> {
        if self.state == ReaderState::NotStarted {
            self.read_array_start()?;
        }

        self.skip_while(is_separator)?;
        match self.peek()? {
            None => Err(Error::Syntax("missing array end".into())),
            Some(ARRAY_END) => {
                self.inner.consume(1);
                self.state = ReaderState::Finished;
                trace!("date array finished");
                Ok(None)
            }
            Some(ARRAY_START) => Err(Error::Syntax("unexpected array start".into())),
            Some(_) => self.read_literal().map(Some),
        }
    }

    fn read_array_start(&mut self) -> Result<()> {
        self.skip_while(is_whitespace)?;
        match self.peek()? {
            Some(ARRAY_START) => {
                self.inner.consume(1);
                self.state = ReaderState::InArray;
                trace!("date array started");
                Ok(())
            }
            _ => Err(Error::Syntax("expected array start".into())),
        }
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        Ok(self.inner.fill_buf()?.first().copied())
    }

    fn skip_while(&mut self, pred: fn(u8) -> bool) -> Result<()> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            let n = buf.iter().take_while(|b| pred(**b)).count();
            let stopped = n < buf.len();
            self.inner.consume(n);
            if stopped {
                return Ok(());
            }
        }
    }

    fn read_literal(&mut self) -> Result<Date> {
        self.literal.clear();
        let mut truncated = false;
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let n = buf.iter().take_while(|b| !ends_literal(**b)).count();
            let room = MAX_LITERAL - self.literal.len();
            truncated |= n > room;
            self.literal.extend_from_slice(&buf[..n.min(room)]);
            let stopped = n < buf.len();
            self.inner.consume(n);
            if stopped {
                break;
            }
        }

        let text = String::from_utf8_lossy(&self.literal);
        match text.parse::<Date>() {
            Ok(date) if !truncated => Ok(date),
            _ => {
                let ellipsis = if truncated { "..." } else { "" };
                Err(Error::Syntax(format!("invalid date literal `{text}{ellipsis}`")))
            }
        }
    }
}

impl<R: BufRead> DateSource for StreamDateReader<R> {
    fn next_date(&mut self) -> Result<Option<Date>> {
        self.read()
    }
}
