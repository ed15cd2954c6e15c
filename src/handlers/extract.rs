use axum::{
    extract::Multipart,
    http::header,
    response::{IntoResponse, Json, Response},
};
use std::time::Instant;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ExtractResponse, FileDetails, UploadedDocument};
use crate::services::{PdfExtractor, TextExtractor};

/// One upload -> extract -> respond cycle. Re-posting the same file runs
/// extraction again; nothing is cached between requests.
pub async fn extract_handler(mut multipart: Multipart) -> AppResult<Json<ExtractResponse>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

    info!(request_id = %request_id, "Starting PDF extraction request");

    let document = read_document_from_multipart(&mut multipart).await?;

    info!(
        request_id = %request_id,
        file_name = %document.name,
        file_size = document.size,
        "File received"
    );

    check_size_limit(&document)?;

    let extractor = PdfExtractor::new();
    let result = match extractor.extract(&document.content) {
        Ok(result) => result,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "PDF extraction failed");
            return Err(e.into());
        }
    };

    let total_time = start.elapsed().as_millis() as u64;

    info!(
        request_id = %request_id,
        text_length = result.text.len(),
        pages = result.pages,
        total_time_ms = total_time,
        "Request completed successfully"
    );

    Ok(Json(ExtractResponse::new(
        result.text,
        result.pages,
        FileDetails::from_document(&document),
        total_time,
    )))
}

/// Same cycle as [`extract_handler`], but the extracted text comes back as
/// a plain-text attachment named `{original_basename}_extracted.txt`.
pub async fn download_handler(mut multipart: Multipart) -> AppResult<Response> {
    let start = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

    info!(request_id = %request_id, "Starting PDF extraction download request");

    let document = read_document_from_multipart(&mut multipart).await?;
    check_size_limit(&document)?;

    let result = match PdfExtractor::new().extract(&document.content) {
        Ok(result) => result,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "PDF extraction failed");
            return Err(e.into());
        }
    };

    let filename = document.download_filename();

    info!(
        request_id = %request_id,
        filename = %filename,
        text_length = result.text.len(),
        total_time_ms = start.elapsed().as_millis() as u64,
        "Download request completed"
    );

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, result.text).into_response())
}

async fn read_document_from_multipart(multipart: &mut Multipart) -> AppResult<UploadedDocument> {
    while let Some(field) = multipart.next_field().await.map_err(|e| AppError::InvalidFile {
        message: format!("Failed to read multipart field: {}", e),
    })? {
        let field_name = field.name().unwrap_or("");

        if field_name == "file" {
            let file_name = field.file_name().unwrap_or("unknown.pdf").to_string();

            let content_type = field.content_type().map(|ct| ct.to_string());

            let data = field.bytes().await.map_err(|e| AppError::InvalidFile {
                message: format!("Failed to read file data: {}", e),
            })?;

            if data.is_empty() {
                return Err(AppError::invalid_file("File is empty"));
            }

            let mut document = UploadedDocument::new(file_name, data.to_vec());

            if let Some(mime_type) = content_type {
                document = document.with_mime_type(mime_type);
            }

            if !document.is_pdf() {
                return Err(AppError::invalid_file("File is not a PDF document"));
            }

            debug!(
                "Received file: {} ({} bytes, type: {:?})",
                document.name, document.size, document.mime_type
            );

            return Ok(document);
        }
    }

    Err(AppError::MissingFile)
}

fn check_size_limit(document: &UploadedDocument) -> AppResult<()> {
    let config = Config::from_env().map_err(|e| AppError::config(format!("Failed to load config: {}", e)))?;
    let max_size_bytes = config.max_file_size_mb * 1024 * 1024;

    if document.size > max_size_bytes {
        return Err(AppError::FileTooLarge {
            size: document.size / (1024 * 1024),
            limit: config.max_file_size_mb,
        });
    }

    Ok(())
}
