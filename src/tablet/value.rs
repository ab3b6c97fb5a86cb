use serde_json::{Number, Value};

use super::data_type::TSDataType;
use super::errors::TabletError;

/// A single cell value, tagged with its data type.
#[derive(Debug, Clone, PartialEq)]
pub enum TabletValue {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Text(String),
}

impl TabletValue {
    pub fn data_type(&self) -> TSDataType {
        match self {
            TabletValue::Boolean(_) => TSDataType::Boolean,
            TabletValue::Int32(_) => TSDataType::Int32,
            TabletValue::Int64(_) => TSDataType::Int64,
            TabletValue::Float(_) => TSDataType::Float,
            TabletValue::Double(_) => TSDataType::Double,
            TabletValue::Text(_) => TSDataType::Text,
        }
    }

    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            TabletValue::Boolean(b) => Value::Bool(*b),
            TabletValue::Int32(v) => Value::Number(Number::from(*v)),
            TabletValue::Int64(v) => Value::Number(Number::from(*v)),
            TabletValue::Float(f) => float_to_json(f64::from(*f)),
            TabletValue::Double(f) => float_to_json(*f),
            TabletValue::Text(s) => Value::String(s.clone()),
        }
    }

    /// Reads a non-null JSON scalar as `data_type`. Integers are range
    /// checked; nothing is coerced across kinds.
    pub fn from_json(data_type: TSDataType, value: &Value) -> Result<Self, TabletError> {
        let mismatch =
            || TabletError::MalformedPayload(format!("cannot read {} from {}", data_type, value));

        match data_type {
            TSDataType::Boolean => value.as_bool().map(TabletValue::Boolean).ok_or_else(mismatch),
            TSDataType::Int32 => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(TabletValue::Int32)
                .ok_or_else(mismatch),
            TSDataType::Int64 => value.as_i64().map(TabletValue::Int64).ok_or_else(mismatch),
            TSDataType::Float => value
                .as_f64()
                .map(|v| TabletValue::Float(v as f32))
                .ok_or_else(mismatch),
            TSDataType::Double => value.as_f64().map(TabletValue::Double).ok_or_else(mismatch),
            TSDataType::Text => value
                .as_str()
                .map(|s| TabletValue::Text(s.to_string()))
                .ok_or_else(mismatch),
        }
    }

    /// Parses the textual rendering the server uses in last-value results.
    pub fn parse(data_type: TSDataType, raw: &str) -> Result<Self, TabletError> {
        let invalid = |e: String| {
            TabletError::MalformedPayload(format!("cannot parse '{}' as {}: {}", raw, data_type, e))
        };

        match data_type {
            TSDataType::Boolean => raw
                .trim()
                .to_ascii_lowercase()
                .parse::<bool>()
                .map(TabletValue::Boolean)
                .map_err(|e| invalid(e.to_string())),
            TSDataType::Int32 => raw
                .trim()
                .parse::<i32>()
                .map(TabletValue::Int32)
                .map_err(|e| invalid(e.to_string())),
            TSDataType::Int64 => raw
                .trim()
                .parse::<i64>()
                .map(TabletValue::Int64)
                .map_err(|e| invalid(e.to_string())),
            TSDataType::Float => raw
                .trim()
                .parse::<f32>()
                .map(TabletValue::Float)
                .map_err(|e| invalid(e.to_string())),
            TSDataType::Double => raw
                .trim()
                .parse::<f64>()
                .map(TabletValue::Double)
                .map_err(|e| invalid(e.to_string())),
            TSDataType::Text => Ok(TabletValue::Text(raw.to_string())),
        }
    }
}

fn float_to_json(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

impl From<bool> for TabletValue {
    fn from(value: bool) -> Self {
        TabletValue::Boolean(value)
    }
}

impl From<i32> for TabletValue {
    fn from(value: i32) -> Self {
        TabletValue::Int32(value)
    }
}

impl From<i64> for TabletValue {
    fn from(value: i64) -> Self {
        TabletValue::Int64(value)
    }
}

impl From<f32> for TabletValue {
    fn from(value: f32) -> Self {
        TabletValue::Float(value)
    }
}

impl From<f64> for TabletValue {
    fn from(value: f64) -> Self {
        TabletValue::Double(value)
    }
}

impl From<String> for TabletValue {
    fn from(value: String) -> Self {
        TabletValue::Text(value)
    }
}

impl From<&str> for TabletValue {
    fn from(value: &str) -> Self {
        TabletValue::Text(value.to_string())
    }
}
