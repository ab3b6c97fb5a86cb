use std::fmt;

use thiserror::Error;

use super::data_type::TSDataType;

/// Which dimension of a tablet an index addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
        }
    }
}

/// Errors raised by tablet construction, mutation and wire conversion.
///
/// Every variant is a precondition violation; a failed call leaves the
/// tablet exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabletError {
    #[error("{axis} index {index} out of range (bound={bound})")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    #[error("tablet capacity {0} reached")]
    CapacityExceeded(usize),

    #[error("column {column} expects {expected}, got {got}")]
    TypeMismatch {
        column: usize,
        expected: TSDataType,
        got: TSDataType,
    },

    #[error("row has {got} values but the tablet has {expected} columns")]
    ArityMismatch { expected: usize, got: usize },

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("unsupported data type: {0}")]
    UnsupportedDataType(String),

    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("unsupported compression: {0}")]
    UnsupportedCompression(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl TabletError {
    pub(crate) fn column_out_of_range(index: usize, bound: usize) -> Self {
        TabletError::IndexOutOfRange {
            axis: Axis::Column,
            index,
            bound,
        }
    }

    pub(crate) fn row_out_of_range(index: usize, bound: usize) -> Self {
        TabletError::IndexOutOfRange {
            axis: Axis::Row,
            index,
            bound,
        }
    }
}
