use serde::{Deserialize, Serialize};

use crate::models::UploadedDocument;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: ExtractData,
    pub processing_time_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractData {
    pub text: String,
    pub pages: usize,
    pub file: FileDetails,
}

/// What the original upload looked like, echoed back for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileDetails {
    pub name: String,
    pub size: String,
}

impl ExtractResponse {
    pub fn new(text: String, pages: usize, file: FileDetails, processing_time_ms: u64) -> Self {
        Self {
            success: true,
            data: ExtractData { text, pages, file },
            processing_time_ms,
        }
    }
}

impl FileDetails {
    pub fn from_document(document: &UploadedDocument) -> Self {
        Self {
            name: document.name.clone(),
            size: document.size_display(),
        }
    }
}
