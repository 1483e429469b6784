//! Health endpoint handler
//!
//! Implements the HTTP surface of the health endpoint: `GET` and `HEAD`
//! run the full aggregation, `OPTIONS` answers the allowed methods from a
//! cacheable response without probing anything, and every other method is
//! rejected with 405.

use crate::core::status::Status;
use crate::server::state::AppState;
use actix_web::http::{header, Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, error};

/// Media type of the health-check response format
pub const APPLICATION_HEALTH_JSON: &str = "application/health+json";

/// OPTIONS responses may be cached for a week
const OPTIONS_CACHE_CONTROL: &str = "max-age=604800";

/// The health endpoint
///
/// Registered for all methods; method dispatch is handled here so that
/// unsupported methods are answered with 405 instead of being served a
/// health document.
pub async fn health_endpoint(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok()
            .content_type(APPLICATION_HEALTH_JSON)
            .insert_header((header::ALLOW, "OPTIONS, GET, HEAD"))
            .insert_header((header::CACHE_CONTROL, OPTIONS_CACHE_CONTROL))
            .finish();
    }

    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed()
            .content_type(APPLICATION_HEALTH_JSON)
            .finish();
    }

    debug!(method = %req.method(), "Health check requested");

    let document = state.service.gather(&req).await;

    let status_code = if document.status == Status::Fail {
        // Validated at configuration load time.
        StatusCode::from_u16(state.policy.fail_status).unwrap_or(StatusCode::OK)
    } else {
        StatusCode::OK
    };

    match serde_json::to_string(&document) {
        Ok(body) => HttpResponse::build(status_code)
            .content_type(APPLICATION_HEALTH_JSON)
            .body(body),
        Err(e) => {
            // Should not occur for well-formed documents; best effort.
            error!("Failed to serialize health document: {}", e);
            HttpResponse::InternalServerError()
                .content_type(APPLICATION_HEALTH_JSON)
                .finish()
        }
    }
}
