use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An exact monetary value.
///
/// Wraps `rust_decimal::Decimal` so that amounts never pass through binary
/// floating point while the pipeline runs. On the wire amounts are plain JSON
/// numbers: they are rendered to a fixed-point string before being parsed into
/// a decimal, and written back out as floats derived from the decimal's string
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Something is still owed.
    pub fn is_outstanding(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Fully paid or overpaid.
    pub fn is_settled(&self) -> bool {
        !self.is_outstanding()
    }

    /// `None` when the difference does not fit in a `Decimal`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let float = self
            .0
            .to_string()
            .parse::<f64>()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_f64(float)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Fractional digits a `Decimal` holds; finer amounts are rejected rather
/// than rounded.
const MAX_SCALE: usize = 28;

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric monetary amount")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    // `f64`'s Display is the shortest fixed-point rendering that round-trips,
    // so 123.46 parses as exactly 123.46 rather than its binary expansion.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("non-finite amount {v}")));
        }
        let rendered = v.to_string();
        let scale = rendered.split_once('.').map_or(0, |(_, frac)| frac.len());
        if scale > MAX_SCALE {
            return Err(E::custom(format!(
                "amount {v} has more than {MAX_SCALE} fractional digits"
            )));
        }
        rendered
            .parse()
            .map_err(|e| E::custom(format!("invalid amount {v}: {e}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse()
            .map_err(|e| E::custom(format!("invalid amount {v:?}: {e}")))
    }
}
