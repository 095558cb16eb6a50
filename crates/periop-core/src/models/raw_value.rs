use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::FeatureConversionError;

/// A raw field value as received from a request body or tabular row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    /// Explicit null.
    #[default]
    Missing,
    Numeric(f64),
    /// Text that may or may not hold a number.
    Text(String),
}

impl RawValue {
    /// True for values that default to 0.0 instead of being parsed.
    ///
    /// Whitespace-only text counts as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Numeric(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Coerce to a finite `f64`. Empty values become 0.0.
    ///
    /// `feature` and `row` only label the error.
    pub fn coerce(&self, feature: &str, row: Option<usize>) -> Result<f64, FeatureConversionError> {
        let value = match self {
            Self::Missing => return Ok(0.0),
            Self::Numeric(value) => *value,
            Self::Text(text) => {
                // Trimmed before the emptiness check, as uploaded table cells
                // are, so whitespace-only text is empty on every input path.
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(0.0);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| FeatureConversionError::new(feature, row, text.as_str()))?
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FeatureConversionError::new(feature, row, self.to_string()))
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Numeric(f64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Numeric(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Missing,
            Value::Bool(flag) => Self::Numeric(if flag { 1.0 } else { 0.0 }),
            // Numbers outside f64 range fall back to their text form and fail coercion.
            Value::Number(number) => number
                .as_f64()
                .map(Self::Numeric)
                .unwrap_or_else(|| Self::Text(number.to_string())),
            Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Numeric(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
