// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_api::{ApiError, ApiErrorCode, Envelope};

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::MissingFields | ApiErrorCode::InvalidEmail | ApiErrorCode::Length => {
            StatusCode::BAD_REQUEST
        }
        ApiErrorCode::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Timeout => StatusCode::REQUEST_TIMEOUT,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn envelope_response(status: StatusCode, envelope: Envelope) -> Response {
    (status, Json(envelope)).into_response()
}

#[must_use]
pub(crate) fn api_error_response(error: &ApiError) -> Response {
    envelope_response(api_error_status(error.code), Envelope::from_error(error))
}

#[must_use]
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
