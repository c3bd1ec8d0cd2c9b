use serde::{Deserialize, Serialize};

/// Hourly salary as it travels over the wire.
///
/// Clients send either a JSON number or a numeric-looking string ("16.50").
/// Nothing is rejected at deserialization time; callers decide what an
/// unparsable value means (the pipeline treats it as "no valid salary").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryValue {
    Number(f64),
    Text(String),
}

impl SalaryValue {
    /// The numeric value, if it is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SalaryValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            SalaryValue::Text(raw) => parse_number(raw),
        }
    }

    /// A finite, non-negative hourly rate.
    pub fn hourly_rate(&self) -> Option<f64> {
        self.as_number().filter(|n| *n >= 0.0)
    }
}

impl From<f64> for SalaryValue {
    fn from(n: f64) -> Self {
        SalaryValue::Number(n)
    }
}

impl From<&str> for SalaryValue {
    fn from(raw: &str) -> Self {
        SalaryValue::Text(raw.to_string())
    }
}

/// Parse user-entered numeric text. The whole trimmed value must be a
/// number: "15/hr" is rejected, not read as 15. Blank, non-numeric, NaN and
/// infinite inputs all yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
