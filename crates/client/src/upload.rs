//! Single-file upload to the backend's file store.

use masjid_core::upload::{check_upload, FileDescriptor, FilePreview};

use crate::context::ClientContext;
use crate::envelope;
use crate::error::ClientResult;
use crate::transport::UploadRequest;

pub const UPLOAD_PATH: &str = "/api/files/upload";

#[derive(Debug, Clone)]
pub struct Uploader {
    ctx: ClientContext,
    allowed: &'static [&'static str],
}

impl Uploader {
    /// * `allowed` - Accepted mime types, e.g.
    ///   [`masjid_core::upload::IMAGE_MIME_TYPES`].
    pub fn new(ctx: ClientContext, allowed: &'static [&'static str]) -> Self {
        Self { ctx, allowed }
    }

    /// Check a picked file without sending it.
    pub fn preview(
        &self,
        name: &str,
        mime_type: &str,
        size_bytes: u64,
    ) -> ClientResult<FilePreview> {
        Ok(check_upload(name, mime_type, size_bytes, self.allowed)?)
    }

    /// Check and upload a file, returning the stored descriptor.
    pub async fn upload(
        &self,
        name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<FileDescriptor> {
        let result = self.try_upload(name, mime_type, bytes).await;
        match &result {
            Ok(file) => {
                tracing::info!(file_id = %file.id, name = %file.name, "File uploaded");
                self.ctx.notify_success("File berhasil diunggah");
            }
            Err(err) => {
                tracing::warn!(name, error = %err, "Upload failed");
                self.ctx.notify_error(err);
            }
        }
        result
    }

    async fn try_upload(
        &self,
        name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<FileDescriptor> {
        self.preview(name, mime_type, bytes.len() as u64)?;
        let token = self.ctx.token()?;
        let request = UploadRequest {
            path: UPLOAD_PATH.to_string(),
            bearer: Some(token),
            file_name: name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
        };
        let body = self.ctx.transport.upload(request).await?;
        Ok(serde_json::from_value(envelope::entity_value(body)?)?)
    }
}
