use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::taxonomy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

impl TransactionType {
    /// Applies this polarity to a magnitude: negative for expenses,
    /// non-negative for income. Zero stays unsigned either way.
    pub fn apply_sign(self, amount: Decimal) -> Decimal {
        let magnitude = amount.abs();
        match self {
            _ if magnitude.is_zero() => Decimal::ZERO,
            TransactionType::Income => magnitude,
            TransactionType::Expense => -magnitude,
        }
    }
}

/// One imported statement line. `value` always carries the sign of `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "json_number")]
    pub value: Decimal,
}

impl TransactionRecord {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionType,
        amount: Decimal,
    ) -> Self {
        TransactionRecord {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            kind,
            value: kind.apply_sign(amount),
        }
    }
}

/// Shape of a record as previously persisted. Older payloads lack `type`
/// and may carry an unsigned `value`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredRecord {
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionType>,
    #[serde(with = "json_number")]
    pub value: Decimal,
}

impl StoredRecord {
    /// Recovers a missing `type` from the category and re-signs the value.
    pub fn migrate(self) -> TransactionRecord {
        let kind = self
            .kind
            .unwrap_or_else(|| taxonomy::type_for_category(&self.category));
        TransactionRecord::new(self.date, self.description, self.category, kind, self.value)
    }
}

/// Whether `value` can be written as a JSON number and read back.
///
/// Amounts close to `Decimal::MAX` widen past it once they pass through
/// `f64`, and such a record would be dropped on the next load.
pub fn is_persistable(value: Decimal) -> bool {
    json_number::to_f64(value)
        .ok()
        .and_then(|number| json_number::from_f64(number).ok())
        .is_some()
}

/// Persists `value` as a plain JSON number. Conversions go through the
/// decimal text so `12.34` never picks up binary noise.
mod json_number {
    use rust_decimal::Decimal;
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub(super) fn to_f64(value: Decimal) -> Result<f64, std::num::ParseFloatError> {
        f64::from_str(&value.to_string())
    }

    pub(super) fn from_f64(number: f64) -> Result<Decimal, String> {
        if !number.is_finite() {
            return Err("value is not a finite number".to_string());
        }
        Decimal::from_str(&number.to_string()).map_err(|e| e.to_string())
    }

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number = to_f64(*value).map_err(ser::Error::custom)?;
        serializer.serialize_f64(number)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let number = f64::deserialize(deserializer)?;
        from_f64(number).map_err(de::Error::custom)
    }
}
