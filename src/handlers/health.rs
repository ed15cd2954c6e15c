use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};
use std::time::SystemTime;
use tracing::info;

use crate::error::AppResult;
use crate::services::PdfExtractor;

/// Health check endpoint
pub async fn health_handler() -> AppResult<Json<Value>> {
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let extractor_available = PdfExtractor::default().is_available();

    let status = if extractor_available { "healthy" } else { "degraded" };

    let response = json!({
        "status": status,
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "pdf_extractor": extractor_available
        }
    });

    info!(
        status = status,
        extractor_available = extractor_available,
        "Health check completed"
    );

    Ok(Json(response))
}

/// Readiness check endpoint (for Kubernetes and friends)
pub async fn ready_handler() -> Result<StatusCode, StatusCode> {
    if PdfExtractor::default().is_available() {
        Ok(StatusCode::OK)
    } else {
        info!("Readiness check failed - PDF extractor unavailable");
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}
