use std::io::{self, BufRead};

use tracing::debug;

/// Supplies raw input lines to a session, one at a time.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` when no more
    /// lines can be read.
    fn read_line(&mut self) -> Option<String>;

    /// Takes the error that made the last `read_line` return `None`, if the
    /// input failed rather than ended.
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self) -> Option<String> {
        (**self).read_line()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        (**self).take_error()
    }
}

/// Reads lines from any buffered reader, usually standard input.
///
/// A trailing `\n` or `\r\n` is removed from every line. A read error, such
/// as a line that is not valid UTF-8, stops the input and is kept for
/// [`LineSource::take_error`].
///
/// # Example
/// ```
/// use closedform::session::source::{LineSource, ReaderLines};
///
/// let mut source = ReaderLines::new(&b"ok\r\n\xff\n"[..]);
/// assert_eq!(source.read_line().as_deref(), Some("ok"));
/// assert_eq!(source.read_line(), None);
/// assert!(source.take_error().is_some());
/// ```
pub struct ReaderLines<R> {
    reader: R,
    error:  Option<io::Error>,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader, error: None }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            },
            Err(e) => {
                debug!("failed to read input: {e}");
                self.error = Some(e);
                None
            },
        }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

/// Serves lines from an iterator, such as command-line arguments.
///
/// # Example
/// ```
/// use closedform::session::source::{IterSource, LineSource};
///
/// let mut source = IterSource::new(["1", "2"]);
/// assert_eq!(source.read_line().as_deref(), Some("1"));
/// assert_eq!(source.read_line().as_deref(), Some("2"));
/// assert_eq!(source.read_line(), None);
/// ```
pub struct IterSource<I> {
    lines: I,
}

impl<I> IterSource<I> {
    /// Wraps anything that iterates over lines.
    pub fn new<T>(lines: T) -> Self
        where T: IntoIterator<IntoIter = I>
    {
        Self { lines: lines.into_iter() }
    }
}

impl<I> LineSource for IterSource<I>
    where I: Iterator,
          I::Item: Into<String>
{
    fn read_line(&mut self) -> Option<String> {
        self.lines.next().map(Into::into)
    }
}
