// Chunk header decoding.
//
// The first character of every chunk carries a 3-bit header in the low
// bits of its digit value:
//
//   meta       = digit % 8
//   kind       = meta / 3   (0 = positive delta, 1 = negative delta, 2 = range)
//   width code = meta % 3   (0 -> 1 char, 1 -> 2 chars, 2 -> 4 chars)
//
// The whole chunk, header character included, is then read as one base-88
// number and shifted right by 3 to obtain the chunk value.

use std::fmt;

use super::alphabet::Alphabet;
use super::decoder::DecodeError;
use super::digits::read_digits;

/// Number of low bits of a chunk's code reserved for the header.
pub const HEADER_BITS: u32 = 3;

const HEADER_MASK: u32 = (1 << HEADER_BITS) - 1;

/// Chunk width in characters, indexed by width code. There is no 3-wide chunk.
pub const CHUNK_WIDTHS: [usize; 3] = [1, 2, 4];

/// The operation a chunk applies to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Advance the cursor by `value + 1` and emit it.
    PositiveDelta,
    /// Move the cursor back by `value + 1` and emit it.
    NegativeDelta,
    /// Emit the `value + 1` code points following the cursor.
    Range,
}

impl ChunkKind {
    fn from_meta(meta: u32) -> Self {
        match meta / 3 {
            0 => Self::PositiveDelta,
            1 => Self::NegativeDelta,
            _ => Self::Range,
        }
    }

    /// Short lowercase name, used by the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PositiveDelta => "delta+",
            Self::NegativeDelta => "delta-",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One decoded chunk of an encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Byte offset of the header character.
    pub offset: usize,
    pub kind: ChunkKind,
    pub value: u32,
    /// Width in characters (1, 2 or 4).
    pub len: usize,
}

impl Chunk {
    /// Decode the chunk starting at byte offset `offset`.
    ///
    /// `offset` must be less than `input.len()`.
    pub fn read(alphabet: &Alphabet, input: &str, offset: usize) -> Result<Self, DecodeError> {
        let header = read_digits(alphabet, input, offset, 1)?;
        let meta = header & HEADER_MASK;
        let len = CHUNK_WIDTHS[(meta % 3) as usize];
        let code = read_digits(alphabet, input, offset, len)?;
        Ok(Self {
            offset,
            kind: ChunkKind::from_meta(meta),
            value: code >> HEADER_BITS,
            len,
        })
    }

    /// Number of code points this chunk emits.
    #[inline]
    pub fn emitted(&self) -> u64 {
        match self.kind {
            ChunkKind::Range => u64::from(self.value) + 1,
            ChunkKind::PositiveDelta | ChunkKind::NegativeDelta => 1,
        }
    }

    /// Cursor position after applying this chunk to `cursor`.
    ///
    /// A range leaves the cursor on its last emitted code point, which is the
    /// same place a positive delta of equal value lands.
    #[inline]
    pub fn apply(&self, cursor: i64) -> i64 {
        let step = i64::from(self.value) + 1;
        match self.kind {
            ChunkKind::PositiveDelta | ChunkKind::Range => cursor + step,
            ChunkKind::NegativeDelta => cursor - step,
        }
    }
}

/// Iterator over the chunks of an encoded stream.
///
/// Chunk boundaries are self-describing, so no cursor state is needed to
/// walk the stream. Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
    alphabet: &'a Alphabet,
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'a> ChunkIter<'a> {
    pub fn new(alphabet: &'a Alphabet, input: &'a str) -> Self {
        Self {
            alphabet,
            input,
            offset: 0,
            failed: false,
        }
    }

    /// Byte offset of the next chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = Result<Chunk, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }
        match Chunk::read(self.alphabet, self.input, self.offset) {
            Ok(chunk) => {
                self.offset += chunk.len;
                Some(Ok(chunk))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for ChunkIter<'_> {}
