use crate::http::response_contract::{api_error_response, envelope_response, now_rfc3339};
use crate::store::StoreError;
use crate::{AppState, KNOWN_API_ENDPOINTS};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::Response;
use axum::Json;
use folio_api::{ApiError, ContactSubmission, Envelope};
use folio_model::{PortfolioProfile, ProfileSource};
use std::sync::atomic::Ordering;
use tracing::{error, info, warn};

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

/// Cause detail is only exposed outside production.
fn internal_error(state: &AppState, message: &str, cause: &dyn std::fmt::Display) -> ApiError {
    let cause = (!state.api.is_production()).then(|| cause.to_string());
    ApiError::internal(message, cause.as_deref())
}

async fn load_profile(state: &AppState) -> Result<ProfileSource, StoreError> {
    let Some(store) = state.live_store().await else {
        return Ok(ProfileSource::Fallback(PortfolioProfile::fallback()));
    };
    match store.latest_profile().await? {
        Some(profile) => Ok(ProfileSource::Found(profile)),
        None => Ok(ProfileSource::Fallback(PortfolioProfile::fallback())),
    }
}

pub(crate) async fn root_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let envelope = Envelope::success("Portfolio API is running!")
        .timestamp(now_rfc3339())
        .environment(state.api.environment.clone())
        .database(state.database_status().await);
    with_request_id(envelope_response(StatusCode::OK, envelope), &request_id)
}

pub(crate) async fn health_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let envelope = Envelope::success("API is working correctly!")
        .timestamp(now_rfc3339())
        .environment(state.api.environment.clone())
        .database(state.database_status().await);
    with_request_id(envelope_response(StatusCode::OK, envelope), &request_id)
}

pub(crate) async fn portfolio_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/api/portfolio", "request start");
    let resp = match load_profile(&state).await {
        Ok(source) => {
            let provenance = source.provenance();
            match serde_json::to_value(source.profile()) {
                Ok(data) => {
                    info!(request_id = %request_id, source = provenance, "profile served");
                    envelope_response(
                        StatusCode::OK,
                        Envelope::ok()
                            .data(data)
                            .source(provenance)
                            .timestamp(now_rfc3339()),
                    )
                }
                Err(err) => {
                    error!(request_id = %request_id, "profile serialization failed: {err}");
                    let api_err = internal_error(&state, "Failed to fetch portfolio data", &err);
                    envelope_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Envelope::from_error(&api_err).timestamp(now_rfc3339()),
                    )
                }
            }
        }
        Err(err) => {
            error!(request_id = %request_id, "profile query failed: {err}");
            let api_err = internal_error(&state, "Failed to fetch portfolio data", &err);
            envelope_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::from_error(&api_err).timestamp(now_rfc3339()),
            )
        }
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn submit_contact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<ContactSubmission>>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let submission = body.map(|Json(b)| b).unwrap_or_default();
    let contact = match submission.validate() {
        Ok(contact) => contact,
        Err(err) => {
            info!(request_id = %request_id, code = ?err.code, "contact submission rejected");
            return with_request_id(api_error_response(&err), &request_id);
        }
    };

    // The acknowledgment to the visitor does not depend on storage being
    // reachable; an unreachable store skips persistence silently.
    if let Some(store) = state.live_store().await {
        if let Err(err) = store.insert_contact(&contact).await {
            error!(request_id = %request_id, "contact persist failed: {err}");
            let api_err = internal_error(
                &state,
                "Failed to send message. Please try again later.",
                &err,
            );
            return with_request_id(api_error_response(&api_err), &request_id);
        }
        info!(
            request_id = %request_id,
            backend = store.backend_tag(),
            "contact message persisted"
        );
    } else {
        warn!(request_id = %request_id, "store not live; contact acknowledged without persistence");
    }

    let envelope = Envelope::success("Thank you for your message! I will get back to you soon.")
        .timestamp(now_rfc3339());
    with_request_id(envelope_response(StatusCode::OK, envelope), &request_id)
}

pub(crate) async fn contact_info_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match serde_json::to_value(&state.api.contact) {
        Ok(data) => envelope_response(
            StatusCode::OK,
            Envelope::ok().data(data).timestamp(now_rfc3339()),
        ),
        Err(err) => {
            error!(request_id = %request_id, "contact info serialization failed: {err}");
            api_error_response(&internal_error(&state, "Internal server error", &err))
        }
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn admin_contacts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let Some(store) = state.live_store().await else {
        info!(request_id = %request_id, "admin listing refused: store not live");
        let err = ApiError::storage_unavailable("Database not connected");
        return with_request_id(api_error_response(&err), &request_id);
    };
    let resp = match store.recent_contacts(state.api.admin_recent_limit).await {
        Ok(contacts) => {
            let count = contacts.len();
            match serde_json::to_value(&contacts) {
                Ok(data) => {
                    envelope_response(StatusCode::OK, Envelope::ok().data(data).count(count))
                }
                Err(err) => {
                    error!(request_id = %request_id, "contact listing serialization failed: {err}");
                    api_error_response(&internal_error(&state, "Failed to fetch contacts", &err))
                }
            }
        }
        Err(err) => {
            error!(request_id = %request_id, "contact listing failed: {err}");
            api_error_response(&internal_error(&state, "Failed to fetch contacts", &err))
        }
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let request_id = make_request_id(&state);
    let path = uri.path();
    let envelope = if path == "/api" || path.starts_with("/api/") {
        Envelope::failure(format!("API endpoint {path} not found"))
            .available_endpoints(&KNOWN_API_ENDPOINTS)
    } else {
        Envelope::from_error(&ApiError::not_found(path))
    };
    info!(request_id = %request_id, path = %path, "unmatched route");
    with_request_id(
        envelope_response(StatusCode::NOT_FOUND, envelope),
        &request_id,
    )
}
