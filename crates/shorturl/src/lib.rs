//! Positional numeral systems over arbitrary digit alphabets
//!
//! This crate converts signed, arbitrary precision integers to and from any
//! positional numeral system whose digits are given as an ordered set of
//! unique symbols. It also keeps a thread-safe cursor for handing out
//! consecutive values, which is what short-URL style identifiers need.
//!
//! ```
//! use shorturl::{charset, BigInt, Converter};
//!
//! let conv = Converter::new(charset::HEXADECIMAL)?;
//! assert_eq!(conv.to_base(126), "7E");
//! assert_eq!(conv.to_decimal("-7E")?, BigInt::from(-126));
//!
//! assert_eq!(conv.next().base(), Some("1"));
//! # Ok::<(), shorturl::Error>(())
//! ```

mod alphabet;
pub mod charset;
mod converter;
mod error;
mod value;

pub use alphabet::{Alphabet, CANONICAL_SYMBOLS, MAX_CANONICAL_RADIX, MIN_RADIX};
pub use charset::Charset;
pub use converter::Converter;
pub use error::{Error, Result};
pub use value::Value;

// Re-export the integer type used throughout the API
pub use num_bigint::BigInt;
