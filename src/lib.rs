//! Charpack88: decoder for Base88-packed Unicode character lists.
//!
//! CLDR-derived locale tables store sets of characters (digits, symbols,
//! exemplar sets) as compact Base88 strings. Each string is a sequence of
//! 1, 2 or 4 character chunks that move a code point cursor and emit
//! characters as they go.
//!
//! The crate provides:
//! - The format implementation (`base88`)
//! - Batch decoding of many strings, optionally in parallel (`batch`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! let chars = charpack88::decode(".M").unwrap();
//! assert_eq!(chars, ["\u{A}", "\u{B}", "\u{C}", "\u{D}"]);
//!
//! assert!(charpack88::decode("8 ").is_err());
//! ```

pub mod base88;
pub mod batch;

#[cfg(feature = "cli")]
pub mod cli;

pub use base88::{DecodeError, Decoder, Utf16Char};

/// Decode an encoded string into one `String` per character.
pub fn decode(input: &str) -> Result<Vec<String>, DecodeError> {
    Decoder::default().decode(input)
}

/// Decode an encoded string into raw code points.
pub fn decode_code_points(input: &str) -> Result<Vec<u32>, DecodeError> {
    Decoder::default().decode_code_points(input)
}

/// Decode an encoded string into UTF-16 characters.
pub fn decode_utf16(input: &str) -> Result<Vec<Utf16Char>, DecodeError> {
    Decoder::default().decode_utf16(input)
}
