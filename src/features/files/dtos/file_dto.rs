use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Upload request DTO for OpenAPI documentation.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for a completed upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponseDto {
    /// Publicly retrievable URL of the stored image
    pub url: String,
}

/// Request DTO for deleting an uploaded image by URL
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteImageDto {
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteImageResponseDto {
    pub deleted: bool,
}

/// Image MIME types accepted for report photos and avatars
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Maximum upload size in bytes (5 MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

pub fn is_image_type_allowed(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// File extension for a known image content type
pub fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_image_types() {
        assert!(is_image_type_allowed("image/jpeg"));
        assert!(is_image_type_allowed("image/webp"));
        assert!(!is_image_type_allowed("application/pdf"));
        assert!(!is_image_type_allowed("text/html"));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_content_type("image/png"), Some("png"));
        assert_eq!(extension_for_content_type("video/mp4"), None);
    }
}
