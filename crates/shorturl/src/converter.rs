//! Conversion between decimal integers and an alphabet's numeral system
//!
//! A [`Converter`] pairs an [`Alphabet`] with a position counter. The
//! conversion methods are pure; only the cursor methods ([`Converter::current`],
//! [`Converter::next`], [`Converter::previous`]) touch the counter.

use crate::{Alphabet, Error, Result, Value};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as _;
use num_traits::{ToPrimitive, Zero};
use parking_lot::Mutex;
use tracing::{debug, instrument, trace};

const SIGN: char = '-';

/// Encodes and decodes integers in one alphabet and walks a sequence of values
///
/// All methods take `&self`, so a converter can be shared between threads
/// (for example behind an `Arc`). The counter is guarded by a mutex and each
/// cursor call encodes the exact value it moved the counter to.
#[derive(Debug)]
pub struct Converter {
    alphabet: Alphabet,
    position: Mutex<BigInt>,
}

impl Converter {
    /// Converter for an explicit, ordered string of symbols
    pub fn new(symbols: &str) -> Result<Self> {
        Ok(Self::from_alphabet(Alphabet::new(symbols)?))
    }

    /// Converter for the first `radix` symbols of `0-9A-Za-z`
    pub fn with_radix(radix: usize) -> Result<Self> {
        Ok(Self::from_alphabet(Alphabet::with_radix(radix)?))
    }

    /// Converter for an arbitrary sequence of symbols
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        Ok(Self::from_alphabet(Alphabet::from_symbols(symbols)?))
    }

    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        Self::with_position(alphabet, BigInt::zero())
    }

    /// Converter whose cursor starts at `start`
    pub fn with_position(alphabet: Alphabet, start: impl Into<BigInt>) -> Self {
        let start = start.into();
        debug!(radix = alphabet.radix(), %start, "Created converter");
        Self {
            alphabet,
            position: Mutex::new(start),
        }
    }

    /// Move the cursor start, keeping the alphabet
    pub fn starting_at(self, start: impl Into<BigInt>) -> Self {
        *self.position.lock() = start.into();
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// Encode a decimal value into this converter's alphabet
    ///
    /// Zero becomes the single zero symbol and negative values get a leading
    /// `-`. The result never has leading zero symbols.
    pub fn encode(&self, value: impl Into<BigInt>) -> Value {
        let value = value.into();
        let base = self.render(&value);
        trace!(decimal = %value, %base, "Encoded");
        Value {
            decimal: Some(value),
            base: Some(base),
        }
    }

    /// Decode a string written in this converter's alphabet
    ///
    /// A single leading `-` marks a negative value, even when the alphabet
    /// itself contains `-`. The returned value keeps `input` verbatim.
    pub fn decode(&self, input: &str) -> Result<Value> {
        let (negative, digits) = match input.strip_prefix(SIGN) {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        if digits.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "Base value must contain at least one digit, got '{}'",
                input
            )));
        }

        let magnitude = self.accumulate(digits)?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        let decimal = BigInt::from_biguint(sign, magnitude);

        trace!(base = input, %decimal, "Decoded");

        Ok(Value {
            decimal: Some(decimal),
            base: Some(input.to_string()),
        })
    }

    /// Fill in whichever side of `value` is missing
    ///
    /// * only `decimal` set: encodes it
    /// * only `base` set: decodes it
    /// * both set: returns `value` **unchanged and unchecked**. Nothing
    ///   verifies that the two sides describe the same number, so do not use
    ///   this path to validate a pair.
    /// * neither set: fails with [`Error::InvalidArgument`]
    ///
    /// An empty `base` string counts as unset. The cursor is not affected.
    pub fn convert(&self, value: Value) -> Result<Value> {
        let has_base = value.base.as_deref().is_some_and(|b| !b.is_empty());

        match (value.decimal, has_base) {
            (Some(decimal), false) => Ok(self.encode(decimal)),
            (None, true) => self.decode(value.base.as_deref().unwrap_or_default()),
            (Some(decimal), true) => Ok(Value {
                decimal: Some(decimal),
                base: value.base,
            }),
            (None, false) => Err(Error::InvalidArgument(
                "Value has neither a decimal nor a base representation".to_string(),
            )),
        }
    }

    /// Decode straight to the decimal integer
    pub fn to_decimal(&self, input: &str) -> Result<BigInt> {
        let value = self.decode(input)?;
        Ok(value.decimal.unwrap_or_default())
    }

    /// Encode straight to the base string
    pub fn to_base(&self, value: impl Into<BigInt>) -> String {
        self.render(&value.into())
    }

    /// Decode into an `i64`, failing with [`Error::Overflow`] outside its range
    pub fn decode_i64(&self, input: &str) -> Result<i64> {
        let decimal = self.to_decimal(input)?;
        decimal.to_i64().ok_or_else(|| Error::Overflow {
            value: decimal.to_string(),
            target: "i64",
        })
    }

    /// Current cursor value, without moving the cursor
    #[instrument(level = "trace", skip(self))]
    pub fn current(&self) -> Value {
        let position = self.position.lock();
        self.encode(position.clone())
    }

    /// Advance the cursor by one and return the new value
    #[allow(clippy::should_implement_trait)]
    #[instrument(level = "trace", skip(self))]
    pub fn next(&self) -> Value {
        let mut position = self.position.lock();
        *position += 1u32;
        self.encode(position.clone())
    }

    /// Move the cursor back by one and return the new value
    #[instrument(level = "trace", skip(self))]
    pub fn previous(&self) -> Value {
        let mut position = self.position.lock();
        *position -= 1u32;
        self.encode(position.clone())
    }

    /// Take `count` values from [`Converter::next`]
    ///
    /// Each step is its own critical section, so other threads may claim
    /// values in between. The returned values are strictly increasing.
    pub fn sequence(&self, count: usize) -> Vec<Value> {
        (0..count).map(|_| self.next()).collect()
    }

    /// Snapshot of the cursor's decimal position
    pub fn position(&self) -> BigInt {
        self.position.lock().clone()
    }

    /// Put the cursor at `to`
    pub fn reset(&self, to: impl Into<BigInt>) {
        let to = to.into();
        debug!(position = %to, "Reset cursor");
        *self.position.lock() = to;
    }

    fn render(&self, value: &BigInt) -> String {
        if value.is_zero() {
            return self.alphabet.zero().to_string();
        }

        let digits = digits_le(value.magnitude(), self.alphabet.radix());
        let mut out = String::with_capacity(digits.len() + 1);
        if value.sign() == Sign::Minus {
            out.push(SIGN);
        }
        out.extend(
            digits
                .iter()
                .rev()
                .filter_map(|&digit| self.alphabet.symbol_at(digit)),
        );
        out
    }

    fn accumulate(&self, digits: &str) -> Result<BigUint> {
        let mut invalid = String::new();
        let mut total = BigUint::zero();
        let radix = self.alphabet.radix();

        for symbol in digits.chars() {
            match self.alphabet.value_of(symbol) {
                Ok(digit) if invalid.is_empty() => {
                    total = total * radix + digit;
                }
                Ok(_) => {}
                Err(_) => {
                    if !invalid.contains(symbol) {
                        invalid.push(symbol);
                    }
                }
            }
        }

        if !invalid.is_empty() {
            return Err(Error::InvalidCharacter {
                characters: invalid,
            });
        }

        Ok(total)
    }
}

impl From<Alphabet> for Converter {
    fn from(alphabet: Alphabet) -> Self {
        Self::from_alphabet(alphabet)
    }
}

/// Digit values of `magnitude` in `radix`, least significant first
fn digits_le(magnitude: &BigUint, radix: usize) -> Vec<usize> {
    if let Ok(small) = u32::try_from(radix) {
        if small <= 256 {
            return magnitude
                .to_radix_le(small)
                .into_iter()
                .map(usize::from)
                .collect();
        }
    }

    let divisor = BigUint::from(radix);
    let mut rest = magnitude.clone();
    let mut digits = Vec::new();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&divisor);
        // remainder < radix, which is a usize
        digits.push(remainder.to_usize().unwrap_or_default());
        rest = quotient;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex() -> Converter {
        Converter::new("0123456789ABCDEF").unwrap()
    }

    #[test]
    fn encode_hex() {
        assert_eq!(hex().encode(0x7E), Value::new(126, "7E"));
    }

    #[test]
    fn decode_hex() {
        assert_eq!(hex().decode("7E").unwrap(), Value::new(126, "7E"));
        assert_eq!(hex().decode("-7E").unwrap(), Value::new(-126, "-7E"));
    }

    #[test]
    fn zero_is_single_zero_symbol() {
        let xy = Converter::new("XY").unwrap();
        assert_eq!(xy.encode(0).base(), Some("X"));
        assert_eq!(hex().to_base(0), "0");
    }

    #[test]
    fn negative_binary() {
        let xy = Converter::new("XY").unwrap();
        assert_eq!(xy.encode(-45), Value::new(-45, "-YXYYXY"));
        assert_eq!(Converter::new("01").unwrap().to_base(45), "101101");
    }

    #[test]
    fn decode_reversed_digits() {
        let reversed = Converter::new("9876543210").unwrap();
        assert_eq!(reversed.to_decimal("123").unwrap(), BigInt::from(876));
    }

    #[test]
    fn decode_zero_symbol() {
        let conv = Converter::new("abBA").unwrap();
        assert_eq!(conv.to_decimal("a").unwrap(), BigInt::zero());
        assert_eq!(conv.to_decimal("aaa").unwrap(), BigInt::zero());
        assert_eq!(conv.to_decimal("-a").unwrap(), BigInt::zero());
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        let conv = Converter::with_radix(10).unwrap();
        assert_eq!(
            conv.decode("k11").unwrap_err(),
            Error::InvalidCharacter {
                characters: "k".into()
            }
        );
        assert_eq!(
            conv.decode("x1y2x").unwrap_err(),
            Error::InvalidCharacter {
                characters: "xy".into()
            }
        );
    }

    #[test]
    fn decode_rejects_empty() {
        assert!(matches!(hex().decode(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(hex().decode("-"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn decode_i64_overflow() {
        let conv = Converter::from_symbols((0u8..=253).map(char::from)).unwrap();
        assert_eq!(conv.decode_i64(" ").unwrap(), 32);
        assert!(matches!(
            conv.decode_i64("Lucy in the sky with diamonds"),
            Err(Error::Overflow { target: "i64", .. })
        ));
        // the arbitrary precision path still succeeds
        assert!(conv.decode("Lucy in the sky with diamonds").is_ok());
    }

    #[test]
    fn large_radix_uses_division_path() {
        let conv = Converter::from_symbols((0x100u32..0x500).filter_map(char::from_u32)).unwrap();
        assert_eq!(conv.radix(), 1024);
        for v in [1i64, 999, 1000, 123_456_789, -987_654_321_012, i64::MAX, i64::MIN] {
            let encoded = conv.encode(v);
            let decoded = conv.decode(encoded.base().unwrap()).unwrap();
            assert_eq!(decoded.decimal(), Some(&BigInt::from(v)));
        }
    }

    #[test]
    fn convert_infers_direction() {
        let conv = hex();
        assert_eq!(
            conv.convert(Value::from_decimal(126)).unwrap(),
            Value::new(126, "7E")
        );
        assert_eq!(
            conv.convert(Value::from_base("7E")).unwrap(),
            Value::new(126, "7E")
        );
    }

    #[test]
    fn convert_returns_complete_pairs_unchecked() {
        let mismatched = Value::new(1, "FF");
        assert_eq!(hex().convert(mismatched.clone()).unwrap(), mismatched);
    }

    #[test]
    fn convert_empty_value_is_invalid() {
        assert!(matches!(
            hex().convert(Value::default()),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            hex().convert(Value::from_base("")),
            Err(Error::InvalidArgument(_))
        ));
        // empty base with a decimal encodes
        let value = Value {
            decimal: Some(BigInt::from(15)),
            base: Some(String::new()),
        };
        assert_eq!(hex().convert(value).unwrap(), Value::new(15, "F"));
    }

    #[test]
    fn cursor_moves_both_ways() {
        let conv = hex();
        assert_eq!(conv.current(), Value::new(0, "0"));
        assert_eq!(conv.next(), Value::new(1, "1"));
        assert_eq!(conv.next(), Value::new(2, "2"));
        assert_eq!(conv.previous(), Value::new(1, "1"));
        assert_eq!(conv.previous(), Value::new(0, "0"));
        assert_eq!(conv.previous(), Value::new(-1, "-1"));
        assert_eq!(conv.position(), BigInt::from(-1));
    }

    #[test]
    fn cursor_start_and_reset() {
        let conv = Converter::with_position(Alphabet::with_radix(16).unwrap(), 2143);
        assert_eq!(conv.current().decimal(), Some(&BigInt::from(2143)));

        conv.reset(i64::MIN);
        assert_eq!(conv.current().decimal(), Some(&BigInt::from(i64::MIN)));

        let conv = hex().starting_at(255);
        assert_eq!(conv.next(), Value::new(256, "100"));
    }

    #[test]
    fn sequence_takes_consecutive_values() {
        let conv = hex().starting_at(14);
        let bases: Vec<_> = conv
            .sequence(3)
            .into_iter()
            .map(|v| v.base.unwrap())
            .collect();
        assert_eq!(bases, vec!["F", "10", "11"]);
        assert!(conv.sequence(0).is_empty());
    }
}
