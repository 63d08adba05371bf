// Base88 character-list decoder.
//
// Walks the chunks of an encoded stream, applying each one to a running
// code point cursor that starts at 0:
//
//   positive delta: cursor += value + 1, emit cursor
//   negative delta: cursor -= value + 1, emit cursor
//   range:          repeat value + 1 times { cursor += 1, emit cursor }
//
// Decoding fails fast: on the first malformed chunk or out-of-range code
// point the whole call returns an error and no partial output.

use super::alphabet::{Alphabet, BASE88};
use super::chunk::{Chunk, ChunkIter, ChunkKind};
use super::utf16::{MAX_CODE_POINT, Utf16Char};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character outside the 88-symbol alphabet.
    #[error("invalid character {found:?} at offset {offset}")]
    InvalidCharacter { offset: usize, found: char },
    /// Fewer characters remain than the chunk header declares.
    #[error("truncated chunk at offset {offset}: needs {needed} characters, {available} available")]
    TruncatedChunk {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// The cursor left the Unicode code space, or hit a surrogate where a
    /// `char` was required.
    #[error("invalid code point {code_point} produced by chunk at offset {offset}")]
    InvalidCodePoint { offset: usize, code_point: i64 },
}

impl DecodeError {
    /// `InvalidCharacter` for the character starting at byte `offset`.
    pub(crate) fn invalid_character(input: &str, offset: usize) -> Self {
        let found = input
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self::InvalidCharacter { offset, found }
    }

    /// Byte offset in the encoded input where decoding stopped.
    pub fn offset(&self) -> usize {
        match *self {
            Self::InvalidCharacter { offset, .. }
            | Self::TruncatedChunk { offset, .. }
            | Self::InvalidCodePoint { offset, .. } => offset,
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// The last emitted code point. Local to one decode call.
#[derive(Debug, Default)]
struct Cursor {
    last: i64,
}

impl Cursor {
    /// Move by `delta` and return the new position as a code point.
    #[inline]
    fn step(&mut self, chunk: &Chunk, delta: i64) -> Result<u32, DecodeError> {
        // `last` is always within 0..=MAX_CODE_POINT here and |delta| < 2^23.
        self.last += delta;
        u32::try_from(self.last)
            .ok()
            .filter(|&cp| cp <= MAX_CODE_POINT)
            .ok_or(DecodeError::InvalidCodePoint {
                offset: chunk.offset,
                code_point: self.last,
            })
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Decoder over a fixed alphabet.
///
/// Holds only a shared reference to the alphabet, so it is `Copy` and can
/// be used from any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(&BASE88)
    }
}

impl<'a> Decoder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Iterate over the raw chunks of `input` without applying them.
    pub fn chunks<'s>(&self, input: &'s str) -> ChunkIter<'s>
    where
        'a: 's,
    {
        ChunkIter::new(self.alphabet, input)
    }

    /// Decode into one `String` per emitted character.
    ///
    /// Surrogate code points have no `char` form and are rejected here; use
    /// [`Decoder::decode_utf16`] to receive them as lone code units.
    pub fn decode(&self, input: &str) -> Result<Vec<String>, DecodeError> {
        let mut out = Vec::with_capacity(input.len());
        self.walk(input, |chunk, cp| {
            let ch = char::from_u32(cp).ok_or(DecodeError::InvalidCodePoint {
                offset: chunk.offset,
                code_point: i64::from(cp),
            })?;
            out.push(ch.to_string());
            Ok(())
        })?;
        Ok(out)
    }

    /// Decode into raw code points.
    pub fn decode_code_points(&self, input: &str) -> Result<Vec<u32>, DecodeError> {
        let mut out = Vec::with_capacity(input.len());
        self.walk(input, |_, cp| {
            out.push(cp);
            Ok(())
        })?;
        Ok(out)
    }

    /// Decode into UTF-16, one entry per emitted character.
    pub fn decode_utf16(&self, input: &str) -> Result<Vec<Utf16Char>, DecodeError> {
        let mut out = Vec::with_capacity(input.len());
        self.walk(input, |chunk, cp| {
            let ch = Utf16Char::from_code_point(cp).ok_or(DecodeError::InvalidCodePoint {
                offset: chunk.offset,
                code_point: i64::from(cp),
            })?;
            out.push(ch);
            Ok(())
        })?;
        Ok(out)
    }

    /// Run the cursor state machine, passing every emitted code point to
    /// `emit` along with the chunk that produced it.
    fn walk<F>(&self, input: &str, mut emit: F) -> Result<(), DecodeError>
    where
        F: FnMut(&Chunk, u32) -> Result<(), DecodeError>,
    {
        let mut cursor = Cursor::default();
        let mut chunks = 0usize;
        let mut emitted = 0u64;

        for chunk in self.chunks(input) {
            let chunk = chunk?;
            log::trace!(
                "chunk @{}: {} value={} len={}",
                chunk.offset,
                chunk.kind,
                chunk.value,
                chunk.len
            );
            let step = i64::from(chunk.value) + 1;
            match chunk.kind {
                ChunkKind::PositiveDelta => emit(&chunk, cursor.step(&chunk, step)?)?,
                ChunkKind::NegativeDelta => emit(&chunk, cursor.step(&chunk, -step)?)?,
                ChunkKind::Range => {
                    for _ in 0..step {
                        emit(&chunk, cursor.step(&chunk, 1)?)?;
                    }
                }
            }
            chunks += 1;
            emitted += chunk.emitted();
        }

        log::debug!(
            "decoded {} bytes: {chunks} chunks, {emitted} characters",
            input.len()
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn code_points(input: &str) -> Vec<u32> {
        Decoder::default().decode_code_points(input).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(Decoder::default().decode("").unwrap().is_empty());
        assert!(code_points("").is_empty());
    }

    #[test]
    fn positive_delta_from_zero() {
        // '8' = 8: meta 0, value 1
        assert_eq!(code_points("8"), vec![2]);
        assert_eq!(Decoder::default().decode("8").unwrap(), vec!["\u{2}"]);
    }

    #[test]
    fn negative_delta() {
        // 'W' = 32: +5, then 'B' = 11: meta 3, value 1 -> -2
        assert_eq!(code_points("WB"), vec![5, 3]);
    }

    #[test]
    fn range_emits_separate_entries() {
        // '.' = 72: +10, then 'M' = 22: meta 6, value 2 -> three points
        assert_eq!(code_points(".M"), vec![10, 11, 12, 13]);
        let chars = Decoder::default().decode(".M").unwrap();
        assert_eq!(chars.len(), 4);
        assert_eq!(chars[1..], ["\u{B}", "\u{C}", "\u{D}"]);
    }

    #[test]
    fn range_value_zero_is_plus_one() {
        // '6' = 6: meta 6, value 0
        assert_eq!(code_points("6"), code_points("0"));
        assert_eq!(code_points("66"), vec![1, 2]);
    }

    #[test]
    fn two_char_range() {
        // "70": code 7, meta 7 -> range, len 2, value 0
        // "f0": code 41 = 5*8 + 1 -> +6 (2-char delta)
        assert_eq!(code_points("f070"), vec![6, 7]);
    }

    #[test]
    fn four_char_astral() {
        // ";(i1" = 1_028_090 = 128_511 * 8 + 2 -> +128_512 = U+1F600
        let decoder = Decoder::default();
        assert_eq!(decoder.decode(";(i1").unwrap(), vec!["\u{1F600}"]);
        let utf16 = decoder.decode_utf16(";(i1").unwrap();
        assert_eq!(utf16.len(), 1);
        assert_eq!(utf16[0].as_slice(), &[0xD83D, 0xDE00]);
    }

    #[test]
    fn cursor_carries_across_chunks() {
        // U+1F600, then +2, then -1
        assert_eq!(code_points(";(i18B"), vec![0x1F600, 0x1F602, 0x1F600]);
    }

    #[test]
    fn negative_cursor_is_rejected() {
        assert_eq!(
            Decoder::default().decode_code_points("8B3"),
            Err(DecodeError::InvalidCodePoint {
                offset: 2,
                code_point: -1
            })
        );
    }

    #[test]
    fn beyond_max_code_point_is_rejected() {
        // "2~~~": 4-char delta of 7_496_182, far past U+10FFFF
        let err = Decoder::default().decode_code_points("2~~~").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidCodePoint { offset: 0, .. }));
    }

    #[test]
    fn surrogate_only_rejected_as_char() {
        // 4-char delta to 0xD800: value 0xD7FF -> code 0xD7FF*8 + 2
        let input = encode_delta4(0xD7FF);
        let decoder = Decoder::default();
        assert_eq!(decoder.decode_code_points(&input).unwrap(), vec![0xD800]);
        assert_eq!(decoder.decode_utf16(&input).unwrap()[0].as_slice(), &[0xD800]);
        assert_eq!(
            decoder.decode(&input),
            Err(DecodeError::InvalidCodePoint {
                offset: 0,
                code_point: 0xD800
            })
        );
    }

    #[test]
    fn invalid_character_reports_offset() {
        let err = Decoder::default().decode("88 8").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                offset: 2,
                found: ' '
            }
        );
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn truncated_stream() {
        assert_eq!(
            Decoder::default().decode("8;(i"),
            Err(DecodeError::TruncatedChunk {
                offset: 1,
                needed: 4,
                available: 3
            })
        );
    }

    #[test]
    fn deterministic() {
        let decoder = Decoder::default();
        let input = ".M;(i18B19";
        assert_eq!(decoder.decode(input), decoder.decode(input));
    }

    #[test]
    fn error_display() {
        let err = DecodeError::TruncatedChunk {
            offset: 4,
            needed: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "truncated chunk at offset 4: needs 2 characters, 1 available"
        );
    }

    fn encode_delta4(value: u32) -> String {
        let mut code = value * 8 + 2;
        let mut out = String::new();
        for _ in 0..4 {
            out.push(BASE88.symbol_of((code % 88) as u8).unwrap());
            code /= 88;
        }
        out
    }
}
