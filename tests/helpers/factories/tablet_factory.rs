use crate::tablet::{MeasurementSchema, TSDataType, Tablet, TabletValue};

pub struct TabletFactory {
    device_id: String,
    schemas: Vec<MeasurementSchema>,
    capacity: usize,
    is_aligned: bool,
}

impl TabletFactory {
    pub fn new() -> Self {
        Self {
            device_id: "root.sg1.d1".to_string(),
            schemas: Vec::new(),
            capacity: 16,
            is_aligned: false,
        }
    }

    pub fn with_device(mut self, device_id: &str) -> Self {
        self.device_id = device_id.to_string();
        self
    }

    pub fn with_measurement(mut self, name: &str, data_type: TSDataType) -> Self {
        self.schemas.push(MeasurementSchema::new(name, data_type));
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn aligned(mut self) -> Self {
        self.is_aligned = true;
        self
    }

    pub fn create(self) -> Tablet {
        Tablet::with_capacity(self.device_id, self.schemas, self.capacity, self.is_aligned)
            .expect("factory schema should be valid")
    }

    /// Tablet with `rows` appended rows at timestamps `0, 10, 20, ...`, every
    /// cell present and holding a value derived from its row index.
    pub fn create_filled(self, rows: usize) -> Tablet {
        let mut tablet = self.create();
        for row in 0..rows {
            let values: Vec<Option<TabletValue>> = tablet
                .schemas()
                .iter()
                .map(|schema| Some(sample_value(schema.data_type, row)))
                .collect();
            tablet
                .add_row(row as i64 * 10, &values)
                .expect("factory row should fit");
        }
        tablet
    }
}

pub fn sample_value(data_type: TSDataType, row: usize) -> TabletValue {
    match data_type {
        TSDataType::Boolean => TabletValue::Boolean(row % 2 == 0),
        TSDataType::Int32 => TabletValue::Int32(row as i32),
        TSDataType::Int64 => TabletValue::Int64(row as i64 * 1_000),
        TSDataType::Float => TabletValue::Float(row as f32 + 0.5),
        TSDataType::Double => TabletValue::Double(row as f64 + 0.25),
        TSDataType::Text => TabletValue::Text(format!("v{}", row)),
    }
}
