use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::errors::ClientError;
use super::response::{ExecutionStatus, check_query, check_status};
use super::statement::{self, check_arity, validate_path};
use super::transport::{HttpTransport, Transport};
use crate::shared::config::ClientConfig;
use crate::tablet::{
    CompressionType, MeasurementSchema, TSDataType, TSEncoding, Tablet, TabletValue,
};

pub const PING: &str = "/ping";
pub const NON_QUERY: &str = "/rest/v2/nonQuery";
pub const QUERY: &str = "/rest/v2/query";
pub const INSERT_TABLET: &str = "/rest/v2/insertTablet";
pub const INSERT_RECORDS: &str = "/rest/v2/insertRecords";

/// One timestamped row of a device, written through `insertRecords`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub device: String,
    pub timestamp: i64,
    pub measurements: Vec<(String, TabletValue)>,
}

impl Record {
    pub fn new(device: impl Into<String>, timestamp: i64) -> Self {
        Self {
            device: device.into(),
            timestamp,
            measurements: Vec::new(),
        }
    }

    pub fn with(mut self, measurement: impl Into<String>, value: impl Into<TabletValue>) -> Self {
        self.measurements.push((measurement.into(), value.into()));
        self
    }
}

/// Client for the v2 REST interface.
pub struct RestClient<T: Transport = HttpTransport> {
    transport: T,
}

impl RestClient<HttpTransport> {
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config)?;
        info!(target: "iotdb_rest::client", url = transport.base_url(), user = config.username.as_str(), "Client ready");
        Ok(Self { transport })
    }
}

impl<T: Transport> RestClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ping(&self) -> Result<ExecutionStatus, ClientError> {
        let response = self.transport.perform(PING, None)?;
        check_status(&response)
    }

    pub fn run_non_query(&self, sql: &str) -> Result<ExecutionStatus, ClientError> {
        debug!(target: "iotdb_rest::client", sql, "Executing statement");
        let response = self
            .transport
            .perform(NON_QUERY, Some(&json!({ "sql": sql })))?;
        check_status(&response)
    }

    pub fn run_query(&self, sql: &str) -> Result<Value, ClientError> {
        debug!(target: "iotdb_rest::client", sql, "Executing query");
        let response = self
            .transport
            .perform(QUERY, Some(&json!({ "sql": sql })))?;
        check_query(&response)?;
        Ok(response)
    }

    pub fn create_database(&self, path: &str) -> Result<ExecutionStatus, ClientError> {
        let sql = statement::create_database(path)?;
        let status = self.run_non_query(&sql)?;
        info!(target: "iotdb_rest::client", path, "Database created");
        Ok(status)
    }

    pub fn create_timeseries(
        &self,
        path: &str,
        data_type: TSDataType,
        encoding: TSEncoding,
        compression: CompressionType,
    ) -> Result<ExecutionStatus, ClientError> {
        let sql = statement::create_timeseries(path, data_type, encoding, compression)?;
        let status = self.run_non_query(&sql)?;
        info!(target: "iotdb_rest::client", path, %data_type, "Timeseries created");
        Ok(status)
    }

    /// Creates each path with its own statement, in order. Every argument is
    /// validated before anything is sent; the first rejected statement stops
    /// the run and its error is returned.
    pub fn create_multi_timeseries<S: AsRef<str>>(
        &self,
        paths: &[S],
        data_types: &[TSDataType],
        encodings: &[TSEncoding],
        compressions: &[CompressionType],
    ) -> Result<(), ClientError> {
        check_arity(paths.len(), data_types.len())?;
        check_arity(paths.len(), encodings.len())?;
        check_arity(paths.len(), compressions.len())?;

        let statements = paths
            .iter()
            .zip(data_types)
            .zip(encodings)
            .zip(compressions)
            .map(|(((path, data_type), encoding), compression)| {
                statement::create_timeseries(path.as_ref(), *data_type, *encoding, *compression)
            })
            .collect::<Result<Vec<String>, ClientError>>()?;

        for (index, sql) in statements.iter().enumerate() {
            if let Err(e) = self.run_non_query(sql) {
                e.log_error();
                warn!(
                    target: "iotdb_rest::client",
                    created = index,
                    total = statements.len(),
                    "Stopping multi-timeseries creation"
                );
                return Err(e);
            }
        }

        info!(target: "iotdb_rest::client", count = statements.len(), "Timeseries created");
        Ok(())
    }

    pub fn create_aligned_timeseries<S: AsRef<str>>(
        &self,
        device: &str,
        measurements: &[S],
        data_types: &[TSDataType],
        encodings: &[TSEncoding],
        compressions: &[CompressionType],
    ) -> Result<ExecutionStatus, ClientError> {
        let sql = statement::create_aligned_timeseries(
            device,
            measurements,
            data_types,
            encodings,
            compressions,
        )?;
        let status = self.run_non_query(&sql)?;
        info!(target: "iotdb_rest::client", device, count = measurements.len(), "Aligned timeseries created");
        Ok(status)
    }

    /// Sends the populated rows of `tablet`. An empty tablet is not sent.
    pub fn insert_tablet(&self, tablet: &Tablet) -> Result<(), ClientError> {
        validate_path(tablet.device_id())?;
        if tablet.is_empty() {
            debug!(target: "iotdb_rest::client", device = tablet.device_id(), "Skipping empty tablet");
            return Ok(());
        }

        let response = self
            .transport
            .perform(INSERT_TABLET, Some(&tablet.to_json()))?;
        check_status(&response)?;

        debug!(
            target: "iotdb_rest::client",
            device = tablet.device_id(),
            rows = tablet.row_size(),
            bytes = tablet.total_byte_size(),
            "Tablet inserted"
        );
        Ok(())
    }

    /// Writes every record in one `insertRecords` request. An empty slice is
    /// not sent.
    pub fn insert_records(&self, records: &[Record]) -> Result<(), ClientError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut devices = Vec::with_capacity(records.len());
        let mut timestamps = Vec::with_capacity(records.len());
        let mut measurements_list = Vec::with_capacity(records.len());
        let mut data_types_list = Vec::with_capacity(records.len());
        let mut values_list = Vec::with_capacity(records.len());

        for record in records {
            validate_path(&record.device)?;
            if record.measurements.is_empty() {
                return Err(ClientError::InvalidArgument(format!(
                    "record for {} at {} has no measurements",
                    record.device, record.timestamp
                )));
            }

            devices.push(Value::from(record.device.as_str()));
            timestamps.push(Value::from(record.timestamp));
            measurements_list.push(Value::Array(
                record
                    .measurements
                    .iter()
                    .map(|(name, _)| Value::from(name.as_str()))
                    .collect(),
            ));
            data_types_list.push(Value::Array(
                record
                    .measurements
                    .iter()
                    .map(|(_, value)| Value::from(value.data_type().as_str()))
                    .collect(),
            ));
            values_list.push(Value::Array(
                record
                    .measurements
                    .iter()
                    .map(|(_, value)| value.to_json())
                    .collect(),
            ));
        }

        let body = json!({
            "is_aligned": false,
            "devices": devices,
            "timestamps": timestamps,
            "measurements_list": measurements_list,
            "data_types_list": data_types_list,
            "values_list": values_list,
        });

        let response = self.transport.perform(INSERT_RECORDS, Some(&body))?;
        check_status(&response)?;
        debug!(target: "iotdb_rest::client", count = records.len(), "Records inserted");
        Ok(())
    }

    pub fn insert_record(
        &self,
        device: &str,
        measurement: &str,
        timestamp: i64,
        value: impl Into<TabletValue>,
    ) -> Result<(), ClientError> {
        let record = Record::new(device, timestamp).with(measurement, value);
        self.insert_records(std::slice::from_ref(&record))
    }

    /// Reads `schemas` of `device` over `[begin, end]` into a tablet sized to
    /// the result. Response columns map to `schemas` by position.
    pub fn query_timeseries_by_time(
        &self,
        device: &str,
        schemas: Vec<MeasurementSchema>,
        begin: i64,
        end: i64,
    ) -> Result<Tablet, ClientError> {
        let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
        let sql = statement::select_by_time(device, &names, begin, end)?;
        let response = self.run_query(&sql)?;

        let tablet = Tablet::from_query_response(device, schemas, &response)?;
        debug!(target: "iotdb_rest::client", device, rows = tablet.row_size(), "Query returned");
        Ok(tablet)
    }

    /// Appends the rows of `[begin, end]` to an existing tablet, projecting
    /// its schema. Returns the number of rows appended.
    pub fn query_timeseries_by_time_into(
        &self,
        tablet: &mut Tablet,
        begin: i64,
        end: i64,
    ) -> Result<usize, ClientError> {
        let names: Vec<&str> = tablet.schemas().iter().map(|s| s.name.as_str()).collect();
        let sql = statement::select_by_time(tablet.device_id(), &names, begin, end)?;
        let response = self.run_query(&sql)?;
        Ok(tablet.fill_from_json(&response)?)
    }

    /// Latest `(timestamp, value)` of one timeseries, or `None` when it holds
    /// no data.
    pub fn query_latest_value(
        &self,
        device: &str,
        measurement: &str,
        data_type: TSDataType,
    ) -> Result<Option<(i64, TabletValue)>, ClientError> {
        let sql = statement::select_last(device, measurement)?;
        let response = self.run_query(&sql)?;
        parse_last_value(&response, data_type)
    }
}

/// `SELECT LAST` answers with one row per series and the columns
/// `[timeseries, value, data type]`, values usually rendered as strings.
fn parse_last_value(
    response: &Value,
    data_type: TSDataType,
) -> Result<Option<(i64, TabletValue)>, ClientError> {
    let timestamps = response
        .get("timestamps")
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::MalformedResponse("missing 'timestamps' array".into()))?;

    let Some(first) = timestamps.first() else {
        return Ok(None);
    };
    let timestamp = first.as_i64().ok_or_else(|| {
        ClientError::MalformedResponse(format!("timestamp {} is not an integer", first))
    })?;

    let raw = response
        .get("values")
        .and_then(Value::as_array)
        .and_then(|columns| columns.get(1))
        .and_then(Value::as_array)
        .and_then(|column| column.first())
        .ok_or_else(|| ClientError::MalformedResponse("missing value column".into()))?;

    let value = match raw {
        Value::Null => return Ok(None),
        Value::String(text) => TabletValue::parse(data_type, text)?,
        other => TabletValue::from_json(data_type, other)?,
    };

    Ok(Some((timestamp, value)))
}
