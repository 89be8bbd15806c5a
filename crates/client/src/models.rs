use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// The two inputs of an arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperandPair {
    pub num1: f64,
    pub num2: f64,
}

impl OperandPair {
    pub fn new(num1: f64, num2: f64) -> Self {
        Self { num1, num2 }
    }
}

impl From<(f64, f64)> for OperandPair {
    fn from((num1, num2): (f64, f64)) -> Self {
        Self::new(num1, num2)
    }
}

/// A calculation as the service records it.
///
/// The client never requires this shape; it is an optional typed view over
/// the raw payload returned by the operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: String,
    pub expression: String,
    pub result: Option<f64>,
    pub error: Option<String>,
    /// Milliseconds since the unix epoch
    pub timestamp: i64,
}

impl Calculation {
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    /// Decodes a history payload, newest first as the server sends it
    pub fn list_from_value(value: &Value) -> Option<Vec<Self>> {
        Vec::<Self>::deserialize(value).ok()
    }

    pub fn recorded_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(self.timestamp as i128 * 1_000_000).ok()
    }

    /// `recorded_at` as RFC 3339, or the raw millisecond count if out of range
    pub fn recorded_at_rfc3339(&self) -> String {
        self.recorded_at()
            .and_then(|at| at.format(&Rfc3339).ok())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.result, &self.error) {
            (Some(result), _) => write!(f, "{} = {}", self.expression, result),
            (None, Some(error)) => write!(f, "{} -> error: {}", self.expression, error),
            (None, None) => write!(f, "{}", self.expression),
        }
    }
}
