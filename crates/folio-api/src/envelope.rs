// SPDX-License-Identifier: Apache-2.0

use crate::dto::FieldPresence;
use crate::errors::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform response body every endpoint produces:
/// `{success, message?, data?, ...}` plus the optional extras individual
/// endpoints attach (timestamp, provenance, presence flags, counts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<FieldPresence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Success with no message, for endpoints whose payload is the data.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Failure envelope for an [`ApiError`]. Presence flags and cause
    /// details recorded on the error are lifted into the body, so callers
    /// see which fields arrived and (outside production) what went wrong.
    #[must_use]
    pub fn from_error(error: &ApiError) -> Self {
        let mut envelope = Self::failure(error.message.clone());
        if let Some(received) = error.details.get("received") {
            if let Ok(flags) = serde_json::from_value::<FieldPresence>(received.clone()) {
                envelope.received = Some(flags);
            }
        }
        if let Some(cause) = error.details.get("cause").and_then(Value::as_str) {
            envelope.error = Some(cause.to_string());
        }
        envelope
    }

    #[must_use]
    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn received(mut self, received: FieldPresence) -> Self {
        self.received = Some(received);
        self
    }

    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn available_endpoints(mut self, endpoints: &[&str]) -> Self {
        self.available_endpoints = Some(endpoints.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    #[must_use]
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}
