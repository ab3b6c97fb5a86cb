mod batch;
mod bitmap;
mod column;
mod data_type;
mod errors;
mod value;
mod wire;

pub use batch::{DEFAULT_MAX_ROWS, MeasurementSchema, Tablet};
pub use bitmap::BitMap;
pub use column::Column;
pub use data_type::{CompressionType, TSDataType, TSEncoding};
pub use errors::{Axis, TabletError};
pub use value::TabletValue;

#[cfg(test)]
mod bitmap_test;
#[cfg(test)]
mod column_test;
