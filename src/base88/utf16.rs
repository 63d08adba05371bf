// UTF-16 rendering of decoded code points.
//
// Code points above U+FFFF become a surrogate pair; everything else is a
// single code unit, including lone surrogates, which UTF-16 strings can
// carry even though Rust `char` cannot.

use std::fmt;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

const SURROGATE_OFFSET: u32 = 0x1_0000;
const HIGH_SURROGATE: u16 = 0xD800;
const LOW_SURROGATE: u16 = 0xDC00;

/// One emitted character as one or two UTF-16 code units.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf16Char {
    units: [u16; 2],
    len: u8,
}

impl Utf16Char {
    /// Encode a code point. Returns `None` above U+10FFFF.
    pub fn from_code_point(cp: u32) -> Option<Self> {
        if cp > MAX_CODE_POINT {
            return None;
        }
        if cp < SURROGATE_OFFSET {
            return Some(Self {
                units: [cp as u16, 0],
                len: 1,
            });
        }
        let v = cp - SURROGATE_OFFSET;
        Some(Self {
            units: [
                HIGH_SURROGATE | (v >> 10) as u16,
                LOW_SURROGATE | (v & 0x3FF) as u16,
            ],
            len: 2,
        })
    }

    /// The code units, one or two long.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.units[..self.len as usize]
    }

    /// Whether this is a surrogate pair.
    #[inline]
    pub fn is_pair(&self) -> bool {
        self.len == 2
    }

    /// The code point these units encode.
    pub fn code_point(&self) -> u32 {
        // Built by from_code_point, so always well formed.
        code_point_from_utf16(self.as_slice()).unwrap_or(u32::from(self.units[0]))
    }

    /// Convert to a Rust string, replacing a lone surrogate with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_slice())
    }
}

impl fmt::Debug for Utf16Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf16Char(U+{:04X})", self.code_point())
    }
}

/// Recover the code point of a single UTF-16 encoded character.
///
/// Accepts one unit (any value, lone surrogates included) or a well-formed
/// high/low surrogate pair. Returns `None` for anything else.
pub fn code_point_from_utf16(units: &[u16]) -> Option<u32> {
    match *units {
        [u] => Some(u32::from(u)),
        [hi, lo] if is_high_surrogate(hi) && is_low_surrogate(lo) => {
            let hi = u32::from(hi - HIGH_SURROGATE);
            let lo = u32::from(lo - LOW_SURROGATE);
            Some(SURROGATE_OFFSET + ((hi << 10) | lo))
        }
        _ => None,
    }
}

#[inline]
fn is_high_surrogate(u: u16) -> bool {
    (0xD800..=0xDBFF).contains(&u)
}

#[inline]
fn is_low_surrogate(u: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&u)
}
