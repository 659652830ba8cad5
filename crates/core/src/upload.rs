//! File upload descriptors and pre-upload checks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largest file the upload endpoint accepts.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

pub const DOCUMENT_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// What the backend returns for a stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    pub web_content_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Can be shown inline as a thumbnail.
    Image,
    Document,
}

/// Local description of a picked file, shown before it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub kind: PreviewKind,
}

impl FilePreview {
    pub fn size_label(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Check a picked file against the size limit and `allowed` mime types.
pub fn check_upload(
    name: &str,
    mime_type: &str,
    size_bytes: u64,
    allowed: &[&str],
) -> Result<FilePreview, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Nama file kosong".to_string()));
    }
    if size_bytes == 0 {
        return Err(CoreError::Validation("File kosong".to_string()));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "Ukuran file melebihi batas {}",
            format_file_size(MAX_UPLOAD_BYTES)
        )));
    }
    if !allowed.contains(&mime_type) {
        return Err(CoreError::Validation(format!(
            "Tipe file {mime_type} tidak didukung"
        )));
    }
    let kind = if IMAGE_MIME_TYPES.contains(&mime_type) {
        PreviewKind::Image
    } else {
        PreviewKind::Document
    };
    Ok(FilePreview {
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size_bytes,
        kind,
    })
}

/// `512 B`, `1.5 KB`, `5.0 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let size = bytes as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{bytes} B")
    }
}
