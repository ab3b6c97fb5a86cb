use serde::Deserialize;
use serde_json::Value;

use super::errors::ClientError;

pub const SUCCESS_CODE: i64 = 200;

/// The `{code, message}` envelope the server wraps around command results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionStatus {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

impl ExecutionStatus {
    pub fn from_json(value: &Value) -> Result<Self, ClientError> {
        ExecutionStatus::deserialize(value)
            .map_err(|e| ClientError::MalformedResponse(format!("missing status: {}", e)))
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Fails with `RemoteError` unless the response carries a success code.
pub fn check_status(value: &Value) -> Result<ExecutionStatus, ClientError> {
    let status = ExecutionStatus::from_json(value)?;
    if !status.is_success() {
        return Err(ClientError::RemoteError {
            code: status.code,
            message: status.message().to_string(),
        });
    }
    Ok(status)
}

/// Query results carry data instead of a status; only an explicit `code`
/// marks a failure.
pub fn check_query(value: &Value) -> Result<(), ClientError> {
    if !value.is_object() {
        return Err(ClientError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            value
        )));
    }
    if value.get("code").is_some() {
        check_status(value)?;
    }
    Ok(())
}
