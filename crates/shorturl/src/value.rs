use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A number given in decimal, in some base, or both
///
/// Conversions fill in whichever side is missing. Values coming out of a
/// [`Converter`](crate::Converter) always have both sides set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value {
    /// Value in the decimal system
    #[serde(
        default,
        with = "decimal_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decimal: Option<BigInt>,

    /// Value written in the converter's alphabet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl Value {
    pub fn new(decimal: impl Into<BigInt>, base: impl Into<String>) -> Self {
        Self {
            decimal: Some(decimal.into()),
            base: Some(base.into()),
        }
    }

    /// A value known only in decimal, to be encoded
    pub fn from_decimal(decimal: impl Into<BigInt>) -> Self {
        Self {
            decimal: Some(decimal.into()),
            base: None,
        }
    }

    /// A value known only in its base representation, to be decoded
    pub fn from_base(base: impl Into<String>) -> Self {
        Self {
            decimal: None,
            base: Some(base.into()),
        }
    }

    pub fn decimal(&self) -> Option<&BigInt> {
        self.decimal.as_ref()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// True when both sides are populated
    pub fn is_complete(&self) -> bool {
        self.decimal.is_some() && self.base.as_deref().is_some_and(|b| !b.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(decimal) = &self.decimal {
            write!(f, "{}", decimal)?;
        }
        write!(f, ": ")?;
        if let Some(base) = &self.base {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

/// Decimal digits travel as a JSON string so no precision is lost
mod decimal_string {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| BigInt::from_str(&s).map_err(de::Error::custom))
            .transpose()
    }
}
