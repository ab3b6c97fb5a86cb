use serde_json::{Value, json};

use super::batch::{MeasurementSchema, Tablet};
use super::errors::TabletError;
use super::value::TabletValue;

impl Tablet {
    /// Column-oriented insert payload. Unmarked cells are emitted as `null`
    /// without reading their storage.
    pub fn to_json(&self) -> Value {
        let values: Vec<Value> = self
            .columns
            .iter()
            .zip(&self.bitmaps)
            .map(|(column, bitmap)| {
                Value::Array(
                    (0..self.row_size)
                        .map(|row| {
                            if bitmap.is_marked(row) {
                                column.json_at(row)
                            } else {
                                Value::Null
                            }
                        })
                        .collect(),
                )
            })
            .collect();

        let measurements: Vec<&str> = self.schemas.iter().map(|s| s.name.as_str()).collect();
        let data_types: Vec<&str> = self.schemas.iter().map(|s| s.data_type.as_str()).collect();

        json!({
            "device": self.device_id,
            "is_aligned": self.is_aligned,
            "timestamps": self.timestamps(),
            "values": values,
            "measurements": measurements,
            "data_types": data_types,
        })
    }

    /// Appends the rows of a query response.
    ///
    /// `values` must hold one array per column, in schema order, each as long
    /// as `timestamps`. Non-null entries are written and marked; nulls stay
    /// unmarked. The whole payload is decoded before the tablet is touched.
    /// Returns the number of rows appended.
    pub fn fill_from_json(&mut self, payload: &Value) -> Result<usize, TabletError> {
        let timestamps = array_field(payload, "timestamps")?;
        let values = array_field(payload, "values")?;

        if timestamps.is_empty() && values.is_empty() {
            return Ok(0);
        }

        if values.len() != self.schemas.len() {
            return Err(TabletError::MalformedPayload(format!(
                "expected {} value arrays, got {}",
                self.schemas.len(),
                values.len()
            )));
        }

        if self.row_size + timestamps.len() > self.capacity {
            return Err(TabletError::CapacityExceeded(self.capacity));
        }

        let decoded_ts = timestamps
            .iter()
            .map(|ts| {
                ts.as_i64().ok_or_else(|| {
                    TabletError::MalformedPayload(format!("timestamp {} is not an integer", ts))
                })
            })
            .collect::<Result<Vec<i64>, TabletError>>()?;

        let mut decoded = Vec::with_capacity(values.len());
        for (column, (entries, schema)) in values.iter().zip(&self.schemas).enumerate() {
            let entries = entries.as_array().ok_or_else(|| {
                TabletError::MalformedPayload(format!("values[{}] is not an array", column))
            })?;
            if entries.len() != decoded_ts.len() {
                return Err(TabletError::MalformedPayload(format!(
                    "values[{}] has {} entries for {} timestamps",
                    column,
                    entries.len(),
                    decoded_ts.len()
                )));
            }

            let cells = entries
                .iter()
                .map(|entry| match entry {
                    Value::Null => Ok(None),
                    other => TabletValue::from_json(schema.data_type, other).map(Some),
                })
                .collect::<Result<Vec<_>, TabletError>>()?;
            decoded.push(cells);
        }

        let first = self.row_size;
        for ts in &decoded_ts {
            self.append_row(*ts)?;
        }
        for (column, cells) in decoded.into_iter().enumerate() {
            for (offset, cell) in cells.into_iter().enumerate() {
                if let Some(value) = cell {
                    let row = first + offset;
                    self.set_value(column, row, value)?;
                    self.bitmaps[column].mark(row);
                }
            }
        }

        Ok(decoded_ts.len())
    }

    /// Builds a tablet sized to exactly the rows of a query response.
    pub fn from_query_response(
        device_id: impl Into<String>,
        schemas: Vec<MeasurementSchema>,
        payload: &Value,
    ) -> Result<Self, TabletError> {
        let rows = array_field(payload, "timestamps")?.len();
        let mut tablet = Tablet::with_capacity(device_id, schemas, rows, false)?;
        tablet.fill_from_json(payload)?;
        Ok(tablet)
    }
}

fn array_field<'a>(payload: &'a Value, field: &str) -> Result<&'a Vec<Value>, TabletError> {
    payload
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| TabletError::MalformedPayload(format!("missing '{}' array", field)))
}
