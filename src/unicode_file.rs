//! Character-at-a-time reader over UTF-8 text files.
//!
//! A [`UnicodeFile`] never fails: a file that cannot be opened behaves as a
//! permanently closed stream, and every failed read is reported through
//! [`Decoded`] (or as U+FFFD through [`UnicodeFile::get`]).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::warn;

pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Outcome of a single character read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Char(char),
    /// An invalid or truncated UTF-8 sequence. Reading may continue.
    Malformed,
    /// No handle, end of file, or an unrecoverable read error.
    End,
}

impl Decoded {
    pub fn or_replacement(self) -> char {
        match self {
            Decoded::Char(c) => c,
            Decoded::Malformed | Decoded::End => REPLACEMENT,
        }
    }
}

pub struct UnicodeFile<R = File> {
    reader: Option<BufReader<R>>,
    at_end: bool,
    at_start: bool,
}

impl UnicodeFile<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(e) => {
                warn!("Could not open '{}' for reading: {}", path.display(), e);
                Self::closed()
            }
        }
    }
}

impl<R: Read> UnicodeFile<R> {
    pub fn from_reader(inner: R) -> Self {
        Self {
            reader: Some(BufReader::new(inner)),
            at_end: false,
            at_start: true,
        }
    }

    pub fn closed() -> Self {
        Self {
            reader: None,
            at_end: false,
            at_start: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    /// True iff the handle is valid and no read has hit the end of the stream yet.
    pub fn good(&self) -> bool {
        self.reader.is_some() && !self.at_end
    }

    /// Next character, or U+FFFD when the stream is closed, exhausted or malformed.
    pub fn get(&mut self) -> char {
        self.next_char().or_replacement()
    }

    pub fn next_char(&mut self) -> Decoded {
        if self.reader.is_none() || self.at_end {
            return Decoded::End;
        }
        let decoded = self.decode();
        if std::mem::take(&mut self.at_start) && decoded == Decoded::Char(BYTE_ORDER_MARK) {
            return self.decode();
        }
        decoded
    }

    fn decode(&mut self) -> Decoded {
        let Some(lead) = self.next_byte() else {
            return Decoded::End;
        };
        // Second-byte ranges exclude overlong forms, surrogates and code points past U+10FFFF.
        let (width, second) = match lead {
            0x00..=0x7F => return Decoded::Char(lead as char),
            0xC2..=0xDF => (2, 0x80..=0xBF),
            0xE0 => (3, 0xA0..=0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80..=0xBF),
            0xED => (3, 0x80..=0x9F),
            0xF0 => (4, 0x90..=0xBF),
            0xF1..=0xF3 => (4, 0x80..=0xBF),
            0xF4 => (4, 0x80..=0x8F),
            _ => return Decoded::Malformed,
        };

        let mut buf = [lead, 0, 0, 0];
        for (i, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
            let allowed = if i == 1 { second.clone() } else { 0x80..=0xBF };
            match self.peek_byte() {
                Some(b) if allowed.contains(&b) => {
                    *slot = b;
                    self.consume_byte();
                }
                // Leave the offending byte in place so it starts the next read.
                _ => return Decoded::Malformed,
            }
        }

        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => s.chars().next().map_or(Decoded::Malformed, Decoded::Char),
            Err(_) => Decoded::Malformed,
        }
    }

    fn peek_byte(&mut self) -> Option<u8> {
        let reader = self.reader.as_mut()?;
        loop {
            match reader.fill_buf() {
                Ok([]) => {
                    self.at_end = true;
                    return None;
                }
                Ok(buf) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Read error, treating as end of stream: {}", e);
                    self.at_end = true;
                    return None;
                }
            }
        }
    }

    fn consume_byte(&mut self) {
        if let Some(reader) = self.reader.as_mut() {
            reader.consume(1);
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.consume_byte();
        Some(b)
    }
}
