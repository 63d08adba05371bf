// Base88 digit alphabet.
//
// The canonical ordering is `0-9`, `A-Z`, `a-z`, then ASCII symbols.
// A character's position in that string is its digit value. The reverse
// map is a 128-entry ASCII table built at compile time.
//
// The symbol string is 89 characters long while numbers are read in radix
// 88, so the final `~` is digit 88. Encoders never produce it; it is still
// accepted and weighted by position so that existing data decodes unchanged.

/// Radix of encoded numbers.
pub const RADIX: u32 = 88;

/// Canonical alphabet string; position = digit value.
pub const SYMBOLS: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%()*+,-.:;<=>?@[]^_`{|}~";

/// Number of accepted symbols.
pub const ALPHABET_LEN: usize = SYMBOLS.len();

/// Marker for ASCII bytes that are not digits.
const NO_DIGIT: u8 = 0xFF;

/// The shared Base88 alphabet.
pub static BASE88: Alphabet = Alphabet::new();

/// Map between the alphabet characters and their digit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_LEN],
    values: [u8; 128],
}

impl Alphabet {
    /// Build both directions of the map from [`SYMBOLS`].
    pub const fn new() -> Self {
        let mut symbols = [0u8; ALPHABET_LEN];
        let mut values = [NO_DIGIT; 128];
        let mut i = 0;
        while i < ALPHABET_LEN {
            symbols[i] = SYMBOLS[i];
            values[SYMBOLS[i] as usize] = i as u8;
            i += 1;
        }
        Self { symbols, values }
    }

    /// Digit value of an input byte, or `None` if it is not in the alphabet.
    #[inline]
    pub fn value_of(&self, byte: u8) -> Option<u8> {
        match self.values.get(byte as usize) {
            Some(&v) if v != NO_DIGIT => Some(v),
            _ => None,
        }
    }

    /// Character for a digit value, or `None` past the end of the alphabet.
    #[inline]
    pub fn symbol_of(&self, value: u8) -> Option<char> {
        self.symbols.get(value as usize).map(|&b| b as char)
    }

    /// The alphabet in digit order.
    pub fn symbols(&self) -> &str {
        // SYMBOLS is ASCII.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}
