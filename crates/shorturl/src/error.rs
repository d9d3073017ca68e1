use thiserror::Error;

/// Errors raised while building alphabets or converting values.
///
/// Every variant is an input-validation failure: conversions are pure, so
/// repeating a call with the same input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate symbol in alphabet: '{symbol}'")]
    DuplicateSymbol { symbol: char },

    #[error("Invalid characters in input: {characters}")]
    InvalidCharacter { characters: String },

    #[error(
        "Maximum supported radix for the built-in alphabet is {max}, got {requested}. \
         Define the symbols yourself to use a larger radix"
    )]
    Range { requested: usize, max: usize },

    #[error("Value {value} does not fit in {target}")]
    Overflow { value: String, target: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
