//! Evidence file handlers
//!
//! Streams evidence files from the configured evidence root.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
};
use garnet_service::EvidenceService;
use tokio_util::io::ReaderStream;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Download an evidence file as an attachment
///
/// GET /evidence/{*path}
pub async fn get_evidence(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let service = EvidenceService::new(state.service_context());
    let full_path = service.resolve_file(&path).await?;

    let file = tokio::fs::File::open(&full_path)
        .await
        .map_err(ApiError::internal)?;
    let stream = ReaderStream::new(file);

    let file_name = full_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("evidence")
        .to_string();
    let disposition = format!("attachment; filename=\"{file_name}\"");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );

    Ok((headers, Body::from_stream(stream)))
}
