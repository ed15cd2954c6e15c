/// One uploaded file: display name, byte length and content. Lives for a
/// single request; never persisted, never mutated.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub size: usize,
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
}

impl UploadedDocument {
    pub fn new(name: String, content: Vec<u8>) -> Self {
        let size = content.len();
        Self {
            name,
            size,
            content,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: String) -> Self {
        self.mime_type = Some(mime_type);
        self
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type
            .as_ref()
            .map(|mt| mt == "application/pdf")
            .unwrap_or_else(|| {
                self.name.to_lowercase().ends_with(".pdf")
                    || self.content.starts_with(b"%PDF")
            })
    }

    /// File size in kilobytes, two decimal places.
    pub fn size_display(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }

    /// Suggested filename for the extracted-text download: the original
    /// name with its final `.`-delimited extension stripped and
    /// `_extracted.txt` appended. A name with no `.` is used as-is.
    pub fn download_filename(&self) -> String {
        let stem = self
            .name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.name);
        format!("{}_extracted.txt", stem)
    }
}
