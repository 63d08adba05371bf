// Base88 packed character-list format.
//
// An encoded stream is a sequence of self-describing chunks, each 1, 2 or 4
// alphabet characters wide. Every chunk moves a running code point cursor
// and emits one or more characters.
//
// # Modules
//
// - `alphabet` — digit table (char <-> value)
// - `digits`   — positional base-88 numbers, least-significant digit first
// - `chunk`    — chunk header decoding and chunk iteration
// - `decoder`  — cursor state machine producing the character list
// - `utf16`    — code point to UTF-16 conversion

pub mod alphabet;
pub mod chunk;
pub mod decoder;
pub mod digits;
pub mod utf16;

// Re-export key types for convenience.
pub use alphabet::{ALPHABET_LEN, Alphabet, BASE88, RADIX};
pub use chunk::{Chunk, ChunkIter, ChunkKind};
pub use decoder::{DecodeError, Decoder};
pub use utf16::{Utf16Char, code_point_from_utf16};
