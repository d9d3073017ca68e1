//! Commonly used symbol sets
//!
//! Each constant is an ordered, duplicate-free symbol string that can be fed
//! straight into [`Alphabet::new`](crate::Alphabet::new). [`Charset`] names
//! them so callers (the CLI in particular) can pick one by name.

use crate::{Alphabet, Error, Result};
use std::fmt;
use std::str::FromStr;

/// English alphabet, a..z
pub const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// 0..9, A..Z
pub const BASE36_UPPER: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 0..9, a..z
pub const BASE36_LOWER: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// 0..9, a..z, A..Z
pub const BASE62_NUMBERS_LOWER_UPPER: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 0..9, A..Z, a..z. The canonical ordering used by [`Alphabet::with_radix`].
pub const BASE62_NUMBERS_UPPER_LOWER: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// a..z, A..Z, 0..9
pub const BASE62_LOWER_UPPER_NUMBERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A..Z, a..z, 0..9
pub const BASE62_UPPER_LOWER_NUMBERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// 0..F
pub const HEXADECIMAL: &str = "0123456789ABCDEF";

/// RFC 3986 unreserved characters without `~`.
///
/// This is the largest base that needs no escaping inside a URL. It contains
/// `-`, so negative values encoded with it cannot be told apart from positive
/// values whose first digit is `-`.
pub const BASE65: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._";

/// RFC 4648 section 5 alphabet ("base64url")
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Base58 as used by Bitcoin
pub const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58 as used by Flickr short URLs
pub const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// RFC 4648 base32 alphabet
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Octal, 0..7
pub const BASE8: &str = "01234567";

/// Printable ASCII without space
pub const BASE94: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Printable ASCII including space
pub const BASE95: &str =
    " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// RFC 1924 ASCII85
pub const ASCII85: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Vigesimal, ending in IJ
pub const BASE20: &str = "0123456789ABCDEFGHIJ";

/// Duodecimal, 0..B
pub const BASE12: &str = "0123456789AB";

/// Duodecimal with the turned two and three (↊ ↋)
pub const BASE12_UNICODE: &str = "0123456789↊↋";

/// Sexagesimal, 0..9, A..Z, a..x
pub const BASE60: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwx";

/// A named, predefined symbol set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    LatinLower,
    Base36Upper,
    Base36Lower,
    Base62,
    Base62NumbersLowerUpper,
    Base62LowerUpperNumbers,
    Base62UpperLowerNumbers,
    Hexadecimal,
    Base65,
    Base64Url,
    Base58Bitcoin,
    Base58Flickr,
    Base32,
    Base8,
    Base94,
    Base95,
    Ascii85,
    Base20,
    Base12,
    Base12Unicode,
    Base60,
}

impl Charset {
    pub const ALL: [Charset; 21] = [
        Charset::LatinLower,
        Charset::Base36Upper,
        Charset::Base36Lower,
        Charset::Base62,
        Charset::Base62NumbersLowerUpper,
        Charset::Base62LowerUpperNumbers,
        Charset::Base62UpperLowerNumbers,
        Charset::Hexadecimal,
        Charset::Base65,
        Charset::Base64Url,
        Charset::Base58Bitcoin,
        Charset::Base58Flickr,
        Charset::Base32,
        Charset::Base8,
        Charset::Base94,
        Charset::Base95,
        Charset::Ascii85,
        Charset::Base20,
        Charset::Base12,
        Charset::Base12Unicode,
        Charset::Base60,
    ];

    /// Name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            Self::LatinLower => "latin-lower",
            Self::Base36Upper => "base36-upper",
            Self::Base36Lower => "base36-lower",
            Self::Base62 => "base62",
            Self::Base62NumbersLowerUpper => "base62-numbers-lower-upper",
            Self::Base62LowerUpperNumbers => "base62-lower-upper-numbers",
            Self::Base62UpperLowerNumbers => "base62-upper-lower-numbers",
            Self::Hexadecimal => "hex",
            Self::Base65 => "base65",
            Self::Base64Url => "base64url",
            Self::Base58Bitcoin => "base58-bitcoin",
            Self::Base58Flickr => "base58-flickr",
            Self::Base32 => "base32",
            Self::Base8 => "base8",
            Self::Base94 => "base94",
            Self::Base95 => "base95",
            Self::Ascii85 => "ascii85",
            Self::Base20 => "base20",
            Self::Base12 => "base12",
            Self::Base12Unicode => "base12-unicode",
            Self::Base60 => "base60",
        }
    }

    pub fn symbols(&self) -> &'static str {
        match self {
            Self::LatinLower => LATIN_LOWER,
            Self::Base36Upper => BASE36_UPPER,
            Self::Base36Lower => BASE36_LOWER,
            Self::Base62 => BASE62_NUMBERS_UPPER_LOWER,
            Self::Base62NumbersLowerUpper => BASE62_NUMBERS_LOWER_UPPER,
            Self::Base62LowerUpperNumbers => BASE62_LOWER_UPPER_NUMBERS,
            Self::Base62UpperLowerNumbers => BASE62_UPPER_LOWER_NUMBERS,
            Self::Hexadecimal => HEXADECIMAL,
            Self::Base65 => BASE65,
            Self::Base64Url => BASE64_URL,
            Self::Base58Bitcoin => BASE58_BITCOIN,
            Self::Base58Flickr => BASE58_FLICKR,
            Self::Base32 => BASE32,
            Self::Base8 => BASE8,
            Self::Base94 => BASE94,
            Self::Base95 => BASE95,
            Self::Ascii85 => ASCII85,
            Self::Base20 => BASE20,
            Self::Base12 => BASE12,
            Self::Base12Unicode => BASE12_UNICODE,
            Self::Base60 => BASE60,
        }
    }

    /// Build the alphabet for this charset
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.symbols())
    }
}

/// Lowercase and drop separators so "Base58_Bitcoin" matches "base58-bitcoin"
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|charset| normalize(charset.name()) == wanted)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "Unknown charset '{}', expected one of: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(Charset::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
