pub mod client;
pub mod logging;
pub mod shared;
pub mod tablet;

pub use client::{ClientError, Record, RestClient};
pub use tablet::{MeasurementSchema, TSDataType, Tablet, TabletValue};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
