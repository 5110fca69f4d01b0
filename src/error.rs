//! Error type shared by the handlers.
//!
//! Nothing is masked: the response body carries the underlying error text.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Query failed or the pool is unavailable.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Spawning the shell or reading its output failed.
    #[error("Command execution failed: {0}")]
    Command(#[from] std::io::Error),

    #[error("Command timed out after {limit:?}")]
    CommandTimeout { limit: Duration },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Command(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CommandTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, %status, "Request failed");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_is_internal() {
        let err = AppError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Database error"));
    }

    #[test]
    fn test_command_error_keeps_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AppError::from(io_err);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_timeout_is_gateway_timeout() {
        let err = AppError::CommandTimeout {
            limit: Duration::from_secs(2),
        };
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(err.to_string(), "Command timed out after 2s");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
