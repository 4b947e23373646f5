// SPDX-License-Identifier: Apache-2.0

use crate::dto::FieldPresence;
use folio_model::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    MissingFields,
    InvalidEmail,
    #[serde(rename = "length")]
    Length,
    StorageUnavailable,
    NotFound,
    Timeout,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn missing_fields(received: FieldPresence) -> Self {
        Self::new(
            ApiErrorCode::MissingFields,
            "All fields are required (name, email, message)",
            json!({ "received": received }),
        )
    }

    #[must_use]
    pub fn invalid_email() -> Self {
        Self::new(
            ApiErrorCode::InvalidEmail,
            "Please provide a valid email address",
            json!({}),
        )
    }

    #[must_use]
    pub fn storage_unavailable(message: &str) -> Self {
        Self::new(ApiErrorCode::StorageUnavailable, message, json!({}))
    }

    #[must_use]
    pub fn not_found(path: &str) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            format!("Route {path} not found"),
            json!({ "path": path }),
        )
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self::new(ApiErrorCode::Timeout, "Request timeout", json!({}))
    }

    #[must_use]
    pub fn internal(message: &str, detail: Option<&str>) -> Self {
        let details = match detail {
            Some(cause) => json!({ "cause": cause }),
            None => json!({}),
        };
        Self::new(ApiErrorCode::Internal, message, details)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(field) => Self::new(
                ApiErrorCode::MissingFields,
                "All fields are required (name, email, message)",
                json!({ "field": field }),
            ),
            ValidationError::InvalidEmail => Self::invalid_email(),
            ValidationError::LengthOutOfRange { .. } => {
                Self::new(ApiErrorCode::Length, err.to_string(), json!({}))
            }
        }
    }
}
