use crate::config::{Config, WritePolicy};
use crate::models::{EventLeadRow, LeadSubmission};
use crate::supabase::SupabaseClient;
use crate::timezone;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the Supabase REST endpoint.
    pub supabase: SupabaseClient,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "event-leads-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Lead capture endpoint, mounted with `routing::any` on /api/event-lead.
///
/// Method dispatch happens inside the handler so that every method gets the
/// same CORS treatment. Flow:
/// 1. Echo the Origin header back as Access-Control-Allow-Origin when it
///    exactly matches the allow-list; otherwise omit the header. The request
///    is processed server-side either way.
/// 2. OPTIONS preflight: advertise POST/OPTIONS and Content-Type, 204.
/// 3. Any method other than POST: 405, empty body.
/// 4. Extract fields leniently; absent or unparsable fields become null.
/// 5. Derive the ICT `created_at` timestamp when configured.
/// 6. Insert one row via the Supabase client.
/// 7. Acknowledge per the configured write policy.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `method` - The request method, dispatched on in-handler.
/// * `headers` - Request headers (Origin drives the CORS echo).
/// * `body` - Raw request body bytes.
pub async fn capture_lead(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut cors_headers = HeaderMap::new();

    if state.config.cors_enabled() {
        if let Some(origin) = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok()) {
            if state.config.origin_allowed(origin) {
                if let Ok(value) = HeaderValue::from_str(origin) {
                    cors_headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                }
            }
        }

        if method == Method::OPTIONS {
            cors_headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            );
            cors_headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            );
            return (StatusCode::NO_CONTENT, cors_headers).into_response();
        }
    }

    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, cors_headers).into_response();
    }

    // Presence is contract, not enforcement: a malformed or partial body
    // degrades to null fields instead of rejecting the submission.
    let submission: LeadSubmission = serde_json::from_slice(&body).unwrap_or_default();

    tracing::info!(
        "Received event lead: participation_type={:?}",
        submission.participation_type
    );

    let created_at = state.config.generate_timestamp.then(timezone::now_ict);
    let row = EventLeadRow::from_submission(submission, created_at);

    if let Err(e) = state.supabase.insert_event_lead(&row).await {
        match state.config.write_policy {
            WritePolicy::BestEffort => {
                tracing::error!("Event lead insert failed (best-effort write): {}", e);
            }
            WritePolicy::Confirmed => {
                let mut response = e.into_response();
                response.headers_mut().extend(cors_headers);
                return response;
            }
        }
    }

    (StatusCode::OK, cors_headers, Json(json!({ "ok": true }))).into_response()
}
