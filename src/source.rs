/*!
Line sources for dictionary ingestion.

A dictionary is read from anything that can hand out text lines one at a time
and be closed afterwards. [`ReaderSource`] covers files and in-memory text;
other storage (flash pages, SD cards, network buffers) can implement
[`LineSource`] directly.
*/

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::errors::{Result, SpellError};

/// A closable sequence of text lines.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at the end.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Releases the underlying resource. Called once after ingestion.
    fn close(&mut self) {}
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// [`LineSource`] over any buffered reader.
///
/// Lines are split on `\n`; a trailing `\r` is removed as well. Bytes that are
/// not valid UTF-8 are replaced with `U+FFFD` rather than rejected.
pub struct ReaderSource<R> {
    reader: Option<R>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    /// True once [`LineSource::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl ReaderSource<BufReader<File>> {
    /// Open a dictionary file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SpellError::InvalidSource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> ReaderSource<&'a [u8]> {
    /// Wrap newline-delimited text held in memory.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let reader = match self.reader.as_mut() {
            Some(r) => r,
            None => return Ok(None),
        };
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn close(&mut self) {
        self.reader = None;
    }
}
