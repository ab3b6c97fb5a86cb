use std::io;

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::tablet::TabletError;

/// Errors surfaced by the REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Server returned {code}: {message}")]
    RemoteError { code: i64, message: String },

    #[error("Invalid path '{0}': paths must start with root")]
    InvalidPath(String),

    #[error("Parameter count mismatch: expected {expected}, got {got}")]
    ParameterMismatch { expected: usize, got: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Tablet error: {0}")]
    Tablet(#[from] TabletError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    pub fn log_error(&self) {
        match self {
            ClientError::ConnectionFailed(e) => {
                error!("Connection failed: {}", e);
            }
            ClientError::MalformedResponse(e) => {
                error!("Malformed response: {}", e);
            }
            ClientError::RemoteError { code, message } => {
                warn!(code = *code, "Server rejected request: {}", message);
            }
            ClientError::Tablet(e) => {
                error!("Tablet error: {}", e);
                debug!("Tablet error details: {:?}", e);
            }
            ClientError::Io(e) => {
                error!("I/O error: {}", e);
                debug!("I/O error details: {:?}", e);
            }
            other => {
                warn!("Request rejected before sending: {}", other);
            }
        }
    }
}
