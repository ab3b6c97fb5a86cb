use serde_json::{Number, Value};

use super::data_type::TSDataType;
use super::value::TabletValue;

/// Typed storage for one measurement, sized to the tablet capacity.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Boolean(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn with_capacity(data_type: TSDataType, capacity: usize) -> Self {
        match data_type {
            TSDataType::Boolean => Column::Boolean(vec![false; capacity]),
            TSDataType::Int32 => Column::Int32(vec![0; capacity]),
            TSDataType::Int64 => Column::Int64(vec![0; capacity]),
            TSDataType::Float => Column::Float(vec![0.0; capacity]),
            TSDataType::Double => Column::Double(vec![0.0; capacity]),
            TSDataType::Text => Column::Text(vec![String::new(); capacity]),
        }
    }

    pub fn data_type(&self) -> TSDataType {
        match self {
            Column::Boolean(_) => TSDataType::Boolean,
            Column::Int32(_) => TSDataType::Int32,
            Column::Int64(_) => TSDataType::Int64,
            Column::Float(_) => TSDataType::Float,
            Column::Double(_) => TSDataType::Double,
            Column::Text(_) => TSDataType::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Boolean(v) => v.len(),
            Column::Int32(v) => v.len(),
            Column::Int64(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Double(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes `value` into slot `row`. On a type mismatch nothing is written
    /// and the offending type is returned.
    pub(crate) fn set(&mut self, row: usize, value: TabletValue) -> Result<(), TSDataType> {
        match (self, value) {
            (Column::Boolean(v), TabletValue::Boolean(x)) => v[row] = x,
            (Column::Int32(v), TabletValue::Int32(x)) => v[row] = x,
            (Column::Int64(v), TabletValue::Int64(x)) => v[row] = x,
            (Column::Float(v), TabletValue::Float(x)) => v[row] = x,
            (Column::Double(v), TabletValue::Double(x)) => v[row] = x,
            (Column::Text(v), TabletValue::Text(x)) => v[row] = x,
            (_, other) => return Err(other.data_type()),
        }
        Ok(())
    }

    /// Raw slot contents, regardless of presence.
    pub fn get(&self, row: usize) -> Option<TabletValue> {
        match self {
            Column::Boolean(v) => v.get(row).copied().map(TabletValue::Boolean),
            Column::Int32(v) => v.get(row).copied().map(TabletValue::Int32),
            Column::Int64(v) => v.get(row).copied().map(TabletValue::Int64),
            Column::Float(v) => v.get(row).copied().map(TabletValue::Float),
            Column::Double(v) => v.get(row).copied().map(TabletValue::Double),
            Column::Text(v) => v.get(row).cloned().map(TabletValue::Text),
        }
    }

    pub(crate) fn json_at(&self, row: usize) -> Value {
        match self {
            Column::Boolean(v) => Value::Bool(v[row]),
            Column::Int32(v) => Value::Number(Number::from(v[row])),
            Column::Int64(v) => Value::Number(Number::from(v[row])),
            Column::Float(v) => Number::from_f64(f64::from(v[row]))
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Column::Double(v) => Number::from_f64(v[row])
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Column::Text(v) => Value::String(v[row].clone()),
        }
    }

    /// Estimated wire footprint of the first `rows` slots.
    pub fn byte_size(&self, rows: usize) -> usize {
        match self {
            Column::Text(v) => rows * 4 + v.iter().take(rows).map(String::len).sum::<usize>(),
            other => other.data_type().byte_width().unwrap_or(0) * rows,
        }
    }
}
