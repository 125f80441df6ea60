use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{ChartError, Result};

/// A single cell value: a finite number or free text.
///
/// Cells are typed at the front door (a numeric-looking CSV field becomes
/// `Number`), and the distinction is load-bearing: a `Number(2020.0)` and a
/// `Text("2020")` are different axis values even though they display the
/// same, so a column mixing the two produces separate axis slots.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Build a numeric value. Non-finite input falls back to its text form;
    /// negative zero is canonicalized so equality and hashing agree.
    pub fn number(n: f64) -> Value {
        if !n.is_finite() {
            return Value::Text(n.to_string());
        }
        Value::Number(if n == 0.0 { 0.0 } else { n })
    }

    /// Dynamic typing for a raw text field: numeric-looking fields become
    /// `Number`, everything else stays text as-is.
    pub fn parse(raw: &str) -> Value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return Value::number(n);
                }
            }
        }
        Value::Text(raw.to_string())
    }

    /// The numeric payload, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Coerce to a measure: numbers pass through, numeric-looking text
    /// parses, anything else (including empty text) is 0.
    pub fn coerce_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0),
        }
    }

    fn hash_key(&self) -> (u8, u64, &str) {
        match self {
            Value::Number(n) => (0, n.to_bits(), ""),
            Value::Text(s) => (1, 0, s.as_str()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        self.hash_key() == other.hash_key()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_key().hash(state);
    }
}

/// Tabular input: ordered headers plus rows of typed cells, positionally
/// aligned with the headers.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    /// Create a Dataset from a JSON array of objects.
    ///
    /// Headers come from the first object's keys in insertion order; later
    /// objects contribute the fields those headers name, with missing or
    /// null fields becoming empty text.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| ChartError::Data("input must be a JSON array of objects".into()))?;

        if array.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| ChartError::Data("items in array must be objects".into()))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| ChartError::Data("items in array must be objects".into()))?;

            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(JsonValue::String(s)) => Value::Text(s.clone()),
                    Some(JsonValue::Number(n)) => match n.as_f64() {
                        Some(f) => Value::number(f),
                        None => Value::Text(n.to_string()),
                    },
                    Some(JsonValue::Bool(b)) => Value::Text(b.to_string()),
                    Some(JsonValue::Null) | None => Value::Text(String::new()),
                    Some(other) => {
                        return Err(ChartError::Data(format!(
                            "unsupported value type for field '{}': {}",
                            header, other
                        )))
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }
}
