pub mod auth;
pub mod errors;
pub mod response;
pub mod rest_client;
pub mod statement;
pub mod transport;

pub use auth::basic_auth_header;
pub use errors::ClientError;
pub use response::{ExecutionStatus, check_status};
pub use rest_client::{Record, RestClient};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
mod response_test;
#[cfg(test)]
mod statement_test;
