// Positional base-88 numbers.
//
// Little-endian: the first character is the least-significant digit.
// A 4-digit number tops out at 88 * (1 + 88 + 88^2 + 88^3) = 60_658_840
// (all `~`), well inside u32.

use super::alphabet::{Alphabet, RADIX};
use super::decoder::DecodeError;

/// Widest number the format ever reads.
pub const MAX_DIGITS: usize = 4;

/// Decode `len` digits of `input` starting at byte offset `start`.
///
/// Returns `TruncatedChunk` if fewer than `len` bytes remain, and
/// `InvalidCharacter` for the first byte outside the alphabet. Digits are
/// validated left to right, so a bad character before the end of input is
/// reported in preference to truncation.
pub fn read_digits(
    alphabet: &Alphabet,
    input: &str,
    start: usize,
    len: usize,
) -> Result<u32, DecodeError> {
    debug_assert!(len <= MAX_DIGITS);
    let bytes = input.as_bytes();
    let mut code: u32 = 0;
    let mut scale: u32 = 1;
    for i in 0..len {
        let offset = start + i;
        let Some(&byte) = bytes.get(offset) else {
            return Err(DecodeError::TruncatedChunk {
                offset: start,
                needed: len,
                available: bytes.len().saturating_sub(start),
            });
        };
        let digit = alphabet
            .value_of(byte)
            .ok_or_else(|| DecodeError::invalid_character(input, offset))?;
        code += u32::from(digit) * scale;
        scale *= RADIX;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base88::alphabet::BASE88;

    #[test]
    fn single_digit() {
        assert_eq!(read_digits(&BASE88, "0", 0, 1).unwrap(), 0);
        assert_eq!(read_digits(&BASE88, "}", 0, 1).unwrap(), 87);
        assert_eq!(read_digits(&BASE88, "~", 0, 1).unwrap(), 88);
    }

    #[test]
    fn first_digit_is_least_significant() {
        // '1' = 1, '0' = 0 -> 1 + 0*88
        assert_eq!(read_digits(&BASE88, "10", 0, 2).unwrap(), 1);
        // '0' = 0, '1' = 1 -> 0 + 1*88
        assert_eq!(read_digits(&BASE88, "01", 0, 2).unwrap(), 88);
    }

    #[test]
    fn four_digit_maximum_fits() {
        assert_eq!(
            read_digits(&BASE88, "}}}}", 0, 4).unwrap(),
            RADIX.pow(4) - 1
        );
        assert_eq!(RADIX.pow(4), 59_969_536);
        assert_eq!(read_digits(&BASE88, "~~~~", 0, 4).unwrap(), 60_658_840);
    }

    #[test]
    fn reads_at_offset() {
        // ";(i1" = 74 + 66*88 + 44*88^2 + 1*88^3
        assert_eq!(read_digits(&BASE88, "xx;(i1", 2, 4).unwrap(), 1_028_090);
    }

    #[test]
    fn truncated_input() {
        assert_eq!(
            read_digits(&BASE88, "ab", 1, 4),
            Err(DecodeError::TruncatedChunk {
                offset: 1,
                needed: 4,
                available: 1
            })
        );
    }

    #[test]
    fn invalid_character_wins_over_truncation() {
        assert_eq!(
            read_digits(&BASE88, "a é", 0, 4),
            Err(DecodeError::InvalidCharacter {
                offset: 1,
                found: ' '
            })
        );
        assert_eq!(
            read_digits(&BASE88, "aé", 0, 4),
            Err(DecodeError::InvalidCharacter {
                offset: 1,
                found: 'é'
            })
        );
    }
}
