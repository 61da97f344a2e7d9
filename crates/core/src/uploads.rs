//! Image attachments for multipart create/update calls.

use crate::errors::FieldError;

/// Maximum accepted image size, matching the admin UI's 5 MB cap.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image file selected for upload alongside a category or product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        ImageUpload {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Client-side checks applied before the upload is attempted.
    pub fn validate(&self, field: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !self.content_type.starts_with("image/") {
            errors.push(FieldError::new(field, "only image files are accepted"));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            errors.push(FieldError::new(field, "image must be smaller than 5MB"));
        }
        errors
    }
}
