use std::io::{self, Read};

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

const READ_CHUNK: usize = 8192;

/// Bytes that may be part of a raw token. Apostrophes and hyphens are kept
/// while scanning and only trimmed off the edges by `normalize`.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'\'' || b == b'-'
}

/// Trims non-alphanumeric bytes from both ends and lowercases `A-Z`.
/// Every other byte is kept as is. Returns `None` when nothing
/// alphanumeric is left.
pub fn normalize_bytes(raw: &[u8]) -> Option<Vec<u8>> {
    let start = raw.iter().position(|b| b.is_ascii_alphanumeric())?;
    let end = raw.iter().rposition(|b| b.is_ascii_alphanumeric())? + 1;
    Some(raw[start..end].to_ascii_lowercase())
}

/// `normalize_bytes` as a string. Trimming only cuts at ASCII bytes, so
/// valid UTF-8 stays valid; input that is not UTF-8 yields `None`.
pub fn normalize(raw: &[u8]) -> Option<String> {
    normalize_bytes(raw).and_then(|word| String::from_utf8(word).ok())
}

/// Splits a byte buffer into normalized words.
///
/// Raw tokens that normalize to nothing (`---`, `''`) are skipped silently.
/// A token touching the end of the buffer is left in place until more
/// input arrives or `decode_eof` flushes it.
pub struct WordCodec {
    // bytes of the in-progress token at the buffer head already scanned
    next_index: usize,
}

impl WordCodec {
    pub fn new() -> Self {
        WordCodec { next_index: 0 }
    }
}

impl Default for WordCodec {
    fn default() -> Self {
        WordCodec::new()
    }
}

impl Decoder for WordCodec {
    type Item = String;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<String>, io::Error> {
        loop {
            if self.next_index == 0 {
                match buf.iter().position(|&b| is_word_byte(b)) {
                    Some(start) => buf.advance(start),
                    None => {
                        buf.clear();
                        return Ok(None);
                    }
                }
            }

            let end = match buf[self.next_index..].iter().position(|&b| !is_word_byte(b)) {
                Some(offset) => self.next_index + offset,
                None => {
                    self.next_index = buf.len();
                    return Ok(None);
                }
            };
            self.next_index = 0;
            let raw = buf.split_to(end);
            buf.advance(1);
            if let Some(word) = normalize(&raw) {
                return Ok(Some(word));
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<String>, io::Error> {
        Ok(match self.decode(buf)? {
            Some(word) => Some(word),
            None => {
                // whatever is left is one unterminated raw token
                self.next_index = 0;
                let raw = buf.split();
                normalize(&raw)
            }
        })
    }
}

/// Lazy token stream over a reader. Single pass: once exhausted, a new
/// `Tokenizer` over a rewound reader is needed.
pub struct Tokenizer<R> {
    input: R,
    buffer: BytesMut,
    codec: WordCodec,
    eof: bool,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(input: R) -> Self {
        Tokenizer {
            input,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            codec: WordCodec::new(),
            eof: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match self.input.read(&mut chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(());
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.eof {
                return self.codec.decode_eof(&mut self.buffer).transpose();
            }
            match self.codec.decode(&mut self.buffer) {
                Ok(Some(word)) => return Some(Ok(word)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
            if let Err(e) = self.fill() {
                return Some(Err(e));
            }
        }
    }
}
