//! SQL text for the statements the client issues.

use super::errors::ClientError;
use crate::tablet::{CompressionType, TSDataType, TSEncoding};

pub const ROOT: &str = "root";

/// Every database, device and timeseries path hangs off `root`.
pub fn validate_path(path: &str) -> Result<(), ClientError> {
    if path == ROOT || path.starts_with("root.") {
        Ok(())
    } else {
        Err(ClientError::InvalidPath(path.to_string()))
    }
}

pub(crate) fn check_arity(expected: usize, got: usize) -> Result<(), ClientError> {
    if expected != got {
        return Err(ClientError::ParameterMismatch { expected, got });
    }
    Ok(())
}

pub fn create_database(path: &str) -> Result<String, ClientError> {
    validate_path(path)?;
    Ok(format!("CREATE DATABASE {}", path))
}

pub fn create_timeseries(
    path: &str,
    data_type: TSDataType,
    encoding: TSEncoding,
    compression: CompressionType,
) -> Result<String, ClientError> {
    validate_path(path)?;
    Ok(format!(
        "CREATE TIMESERIES {} WITH DATATYPE={}, ENCODING={}, COMPRESSOR={}",
        path, data_type, encoding, compression
    ))
}

pub fn create_aligned_timeseries<S: AsRef<str>>(
    device: &str,
    measurements: &[S],
    data_types: &[TSDataType],
    encodings: &[TSEncoding],
    compressions: &[CompressionType],
) -> Result<String, ClientError> {
    validate_path(device)?;
    check_arity(measurements.len(), data_types.len())?;
    check_arity(measurements.len(), encodings.len())?;
    check_arity(measurements.len(), compressions.len())?;
    if measurements.is_empty() {
        return Err(ClientError::InvalidArgument(
            "aligned timeseries need at least one measurement".into(),
        ));
    }

    let columns: Vec<String> = measurements
        .iter()
        .zip(data_types)
        .zip(encodings)
        .zip(compressions)
        .map(|(((name, data_type), encoding), compression)| {
            format!(
                "{} {} ENCODING={} COMPRESSOR={}",
                name.as_ref(),
                data_type,
                encoding,
                compression
            )
        })
        .collect();

    Ok(format!(
        "CREATE ALIGNED TIMESERIES {}({})",
        device,
        columns.join(", ")
    ))
}

/// Projects `measurements` of `device` over the closed range `[begin, end]`.
pub fn select_by_time<S: AsRef<str>>(
    device: &str,
    measurements: &[S],
    begin: i64,
    end: i64,
) -> Result<String, ClientError> {
    validate_path(device)?;
    if measurements.is_empty() {
        return Err(ClientError::InvalidArgument(
            "select needs at least one measurement".into(),
        ));
    }
    if begin > end {
        return Err(ClientError::InvalidArgument(format!(
            "time range is empty: {} > {}",
            begin, end
        )));
    }

    let projection: Vec<&str> = measurements.iter().map(|m| m.as_ref()).collect();
    Ok(format!(
        "SELECT {} FROM {} WHERE time >= {} AND time <= {}",
        projection.join(", "),
        device,
        begin,
        end
    ))
}

pub fn select_last(device: &str, measurement: &str) -> Result<String, ClientError> {
    validate_path(device)?;
    Ok(format!("SELECT LAST {} FROM {}", measurement, device))
}
