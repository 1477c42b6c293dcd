use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors surfaced to API clients. Storage causes are never exposed.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Failed to submit order.")]
    OrderSubmissionFailed,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::OrderSubmissionFailed => "ORDER_SUBMISSION_FAILED",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::StorageUnavailable(_) | DomainError::WriteFailed(_) => {
                AppError::OrderSubmissionFailed
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_failed_display() {
        assert_eq!(
            AppError::OrderSubmissionFailed.to_string(),
            "Failed to submit order."
        );
    }

    #[test]
    fn storage_unavailable_maps_to_submission_failed() {
        let app_err: AppError = DomainError::StorageUnavailable("no server".to_string()).into();
        assert_eq!(app_err, AppError::OrderSubmissionFailed);
    }

    #[test]
    fn write_failed_maps_to_submission_failed() {
        let app_err: AppError = DomainError::WriteFailed("E11000".to_string()).into();
        assert_eq!(app_err, AppError::OrderSubmissionFailed);
    }

    #[test]
    fn extended_error_carries_code_but_not_cause() {
        let app_err: AppError = DomainError::WriteFailed("E11000 duplicate key".to_string()).into();
        let gql = app_err.extend();

        assert_eq!(gql.message, "Failed to submit order.");
        assert!(!gql.message.contains("E11000"));
        let extensions = gql.extensions.expect("extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("ORDER_SUBMISSION_FAILED"))
        );
    }
}
