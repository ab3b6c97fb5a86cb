use std::collections::HashSet;

use super::bitmap::BitMap;
use super::column::Column;
use super::data_type::TSDataType;
use super::errors::TabletError;
use super::value::TabletValue;

pub const DEFAULT_MAX_ROWS: usize = 1024;

/// Name and type of one measurement column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementSchema {
    pub name: String,
    pub data_type: TSDataType,
}

impl MeasurementSchema {
    pub fn new(name: impl Into<String>, data_type: TSDataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl<S: Into<String>> From<(S, TSDataType)> for MeasurementSchema {
    fn from((name, data_type): (S, TSDataType)) -> Self {
        MeasurementSchema::new(name, data_type)
    }
}

/// A fixed-capacity columnar batch of rows for a single device.
///
/// All storage is allocated up front: the time column, every value column and
/// every bitmap hold exactly `capacity()` slots for the tablet's whole life.
/// Rows become addressable through [`Tablet::append_row`]; values are written
/// with [`Tablet::set_value`] and only count as present once marked.
#[derive(Debug, Clone)]
pub struct Tablet {
    pub(super) device_id: String,
    pub(super) schemas: Vec<MeasurementSchema>,
    pub(super) timestamps: Vec<i64>,
    pub(super) columns: Vec<Column>,
    pub(super) bitmaps: Vec<BitMap>,
    pub(super) row_size: usize,
    pub(super) capacity: usize,
    pub(super) is_aligned: bool,
}

impl Tablet {
    pub fn new(
        device_id: impl Into<String>,
        schemas: Vec<MeasurementSchema>,
    ) -> Result<Self, TabletError> {
        Self::with_capacity(device_id, schemas, DEFAULT_MAX_ROWS, false)
    }

    pub fn with_capacity(
        device_id: impl Into<String>,
        schemas: Vec<MeasurementSchema>,
        capacity: usize,
        is_aligned: bool,
    ) -> Result<Self, TabletError> {
        let mut seen = HashSet::with_capacity(schemas.len());
        for schema in &schemas {
            if !seen.insert(schema.name.as_str()) {
                return Err(TabletError::InvalidSchema(format!(
                    "duplicate measurement '{}'",
                    schema.name
                )));
            }
        }

        let columns = schemas
            .iter()
            .map(|s| Column::with_capacity(s.data_type, capacity))
            .collect();
        let bitmaps = schemas.iter().map(|_| BitMap::new(capacity)).collect();

        Ok(Self {
            device_id: device_id.into(),
            schemas,
            timestamps: vec![0; capacity],
            columns,
            bitmaps,
            row_size: 0,
            capacity,
            is_aligned,
        })
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn schemas(&self) -> &[MeasurementSchema] {
        &self.schemas
    }

    pub fn column_count(&self) -> usize {
        self.schemas.len()
    }

    pub fn row_size(&self) -> usize {
        self.row_size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.row_size == 0
    }

    pub fn is_full(&self) -> bool {
        self.row_size >= self.capacity
    }

    pub fn is_aligned(&self) -> bool {
        self.is_aligned
    }

    pub fn set_aligned(&mut self, is_aligned: bool) {
        self.is_aligned = is_aligned;
    }

    /// Timestamps of the populated rows.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps[..self.row_size]
    }

    /// The whole time column, including slots past `row_size()`.
    pub fn time_column(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn column(&self, index: usize) -> Result<&Column, TabletError> {
        self.columns
            .get(index)
            .ok_or_else(|| TabletError::column_out_of_range(index, self.columns.len()))
    }

    pub fn bitmap(&self, index: usize) -> Result<&BitMap, TabletError> {
        self.bitmaps
            .get(index)
            .ok_or_else(|| TabletError::column_out_of_range(index, self.bitmaps.len()))
    }

    fn check_cell(&self, column: usize, row: usize) -> Result<(), TabletError> {
        if column >= self.schemas.len() {
            return Err(TabletError::column_out_of_range(column, self.schemas.len()));
        }
        if row >= self.row_size {
            return Err(TabletError::row_out_of_range(row, self.row_size));
        }
        Ok(())
    }

    /// Claims the next row slot and stamps it with `timestamp`.
    pub fn append_row(&mut self, timestamp: i64) -> Result<usize, TabletError> {
        if self.row_size >= self.capacity {
            return Err(TabletError::CapacityExceeded(self.capacity));
        }

        let row = self.row_size;
        self.timestamps[row] = timestamp;
        self.row_size += 1;
        Ok(row)
    }

    /// Writes a value without marking it present.
    ///
    /// `row` must already have been appended; writing past `row_size()` is an
    /// error even when capacity remains.
    pub fn set_value(
        &mut self,
        column: usize,
        row: usize,
        value: impl Into<TabletValue>,
    ) -> Result<(), TabletError> {
        self.check_cell(column, row)?;

        let expected = self.schemas[column].data_type;
        self.columns[column]
            .set(row, value.into())
            .map_err(|got| TabletError::TypeMismatch {
                column,
                expected,
                got,
            })
    }

    pub fn mark_present(&mut self, column: usize, row: usize) -> Result<(), TabletError> {
        self.check_cell(column, row)?;
        self.bitmaps[column].mark(row);
        Ok(())
    }

    pub fn mark_null(&mut self, column: usize, row: usize) -> Result<(), TabletError> {
        self.check_cell(column, row)?;
        self.bitmaps[column].unmark(row);
        Ok(())
    }

    pub fn is_present(&self, column: usize, row: usize) -> Result<bool, TabletError> {
        self.check_cell(column, row)?;
        Ok(self.bitmaps[column].is_marked(row))
    }

    /// The value at `(column, row)`, or `None` when the cell is null.
    pub fn value(&self, column: usize, row: usize) -> Result<Option<TabletValue>, TabletError> {
        if !self.is_present(column, row)? {
            return Ok(None);
        }
        Ok(self.columns[column].get(row))
    }

    pub fn row(&self, index: usize) -> Result<Vec<Option<TabletValue>>, TabletError> {
        if index >= self.row_size {
            return Err(TabletError::row_out_of_range(index, self.row_size));
        }

        (0..self.columns.len())
            .map(|column| self.value(column, index))
            .collect()
    }

    /// Appends a full row at once, marking every `Some` cell present.
    ///
    /// The row is validated before anything is written, so a rejected row
    /// leaves the tablet untouched.
    pub fn add_row(
        &mut self,
        timestamp: i64,
        values: &[Option<TabletValue>],
    ) -> Result<usize, TabletError> {
        if values.len() != self.schemas.len() {
            return Err(TabletError::ArityMismatch {
                expected: self.schemas.len(),
                got: values.len(),
            });
        }

        for (column, (value, schema)) in values.iter().zip(&self.schemas).enumerate() {
            if let Some(value) = value {
                if value.data_type() != schema.data_type {
                    return Err(TabletError::TypeMismatch {
                        column,
                        expected: schema.data_type,
                        got: value.data_type(),
                    });
                }
            }
        }

        let row = self.append_row(timestamp)?;
        for (column, value) in values.iter().enumerate() {
            if let Some(value) = value {
                self.set_value(column, row, value.clone())?;
                self.bitmaps[column].mark(row);
            }
        }
        Ok(row)
    }

    /// Forgets every row and clears all bitmaps. Storage is kept for reuse.
    pub fn reset(&mut self) {
        self.row_size = 0;
        for bitmap in &mut self.bitmaps {
            bitmap.reset();
        }
    }

    pub fn time_byte_size(&self) -> usize {
        self.row_size * 8
    }

    pub fn value_byte_size(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.byte_size(self.row_size))
            .sum()
    }

    pub fn total_byte_size(&self) -> usize {
        self.time_byte_size() + self.value_byte_size()
    }
}
