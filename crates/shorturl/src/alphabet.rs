//! Digit alphabets
//!
//! An [`Alphabet`] is the ordered list of symbols that defines a positional
//! numeral system: the symbol at index `i` stands for digit value `i`, and the
//! number of symbols is the radix.

use crate::charset::BASE62_NUMBERS_UPPER_LOWER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Symbols used by [`Alphabet::with_radix`]: `0-9`, `A-Z`, `a-z`
pub const CANONICAL_SYMBOLS: &str = BASE62_NUMBERS_UPPER_LOWER;

/// Largest radix [`Alphabet::with_radix`] can provide
pub const MAX_CANONICAL_RADIX: usize = 62;

/// Smallest number of symbols that can represent more than one value
pub const MIN_RADIX: usize = 2;

/// Ordered, duplicate-free set of digit symbols
///
/// Symbols are compared exactly, so `'A'` and `'a'` are different digits.
/// An alphabet never changes after construction.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    values: HashMap<char, usize>,
}

impl Alphabet {
    /// Create an alphabet from an ordered string of symbols
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars())
    }

    /// Create an alphabet of `radix` symbols taken from [`CANONICAL_SYMBOLS`]
    ///
    /// Radix 2 through 62 is supported. Larger radices need an explicit
    /// symbol set, see [`Alphabet::from_symbols`].
    pub fn with_radix(radix: usize) -> Result<Self> {
        if radix > MAX_CANONICAL_RADIX {
            return Err(Error::Range {
                requested: radix,
                max: MAX_CANONICAL_RADIX,
            });
        }

        Self::from_symbols(CANONICAL_SYMBOLS.chars().take(radix))
    }

    /// Create an alphabet from any sequence of symbols
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.len() < MIN_RADIX {
            return Err(Error::InvalidArgument(format!(
                "An alphabet needs at least {} symbols, got {}",
                MIN_RADIX,
                symbols.len()
            )));
        }

        let mut values = HashMap::with_capacity(symbols.len());
        for (value, &symbol) in symbols.iter().enumerate() {
            if values.insert(symbol, value).is_some() {
                return Err(Error::DuplicateSymbol { symbol });
            }
        }

        debug!(radix = symbols.len(), "Created alphabet");

        Ok(Self { symbols, values })
    }

    /// Number of symbols, which is the base of the numeral system
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Symbol for digit value `index`, or `None` when `index >= radix`
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Digit value of `symbol`
    pub fn value_of(&self, symbol: char) -> Result<usize> {
        self.values
            .get(&symbol)
            .copied()
            .ok_or_else(|| Error::InvalidCharacter {
                characters: symbol.to_string(),
            })
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.values.contains_key(&symbol)
    }

    /// The symbol for digit value zero
    pub fn zero(&self) -> char {
        // Construction guarantees at least MIN_RADIX symbols
        self.symbols[0]
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("radix", &self.radix())
            .field("symbols", &self.to_string())
            .finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn radix_is_symbol_count() {
        assert_eq!(Alphabet::new("0123456789ABCDEF").unwrap().radix(), 16);
        assert_eq!(Alphabet::new("XY").unwrap().radix(), 2);
        assert_eq!(Alphabet::new("☔☕☀☂♣♠☁").unwrap().radix(), 7);
    }

    #[test]
    fn rejects_empty_and_single_symbol() {
        assert!(matches!(Alphabet::new(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(Alphabet::new("1"), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            Alphabet::from_symbols(std::iter::empty()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_duplicates_case_sensitively() {
        assert_eq!(
            Alphabet::new("ABCcC").unwrap_err(),
            Error::DuplicateSymbol { symbol: 'C' }
        );
        assert!(Alphabet::new("Aa").is_ok());
    }

    #[test]
    fn with_radix_uses_canonical_prefix() {
        let hex = Alphabet::with_radix(16).unwrap();
        assert_eq!(hex.to_string(), "0123456789ABCDEF");

        let full = Alphabet::with_radix(62).unwrap();
        assert_eq!(full.to_string(), CANONICAL_SYMBOLS);
    }

    #[test]
    fn with_radix_above_canonical_is_range_error() {
        assert_eq!(
            Alphabet::with_radix(128).unwrap_err(),
            Error::Range {
                requested: 128,
                max: 62
            }
        );
        assert!(matches!(
            Alphabet::with_radix(63),
            Err(Error::Range { .. })
        ));
    }

    #[test]
    fn with_radix_below_two_is_invalid() {
        assert!(matches!(
            Alphabet::with_radix(1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Alphabet::with_radix(0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn lookup_in_both_directions() {
        let alphabet = Alphabet::new("9876543210").unwrap();
        assert_eq!(alphabet.symbol_at(0), Some('9'));
        assert_eq!(alphabet.symbol_at(9), Some('0'));
        assert_eq!(alphabet.symbol_at(10), None);
        assert_eq!(alphabet.value_of('1').unwrap(), 8);
        assert_eq!(alphabet.zero(), '9');
        assert!(alphabet.contains('5'));
        assert!(!alphabet.contains('x'));
        assert_eq!(
            alphabet.value_of('x').unwrap_err(),
            Error::InvalidCharacter {
                characters: "x".into()
            }
        );
    }

    #[test]
    fn from_symbols_accepts_control_characters() {
        let alphabet = Alphabet::from_symbols((0u8..=253).map(char::from)).unwrap();
        assert_eq!(alphabet.radix(), 254);
        assert_eq!(alphabet.value_of(' ').unwrap(), 32);
    }

    #[test]
    fn serde_uses_plain_string() {
        let alphabet = Alphabet::new("abBA").unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"abBA\"");

        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);

        assert!(serde_json::from_str::<Alphabet>("\"aa\"").is_err());
    }
}
