use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{extension_for_content_type, is_image_type_allowed};
use crate::modules::storage::ObjectStorage;

/// Service for report image and avatar uploads.
///
/// Images live in object storage only; no database metadata. The URL the
/// upload returns is what ends up in `problem_images.image_url` or
/// `profiles.avatar_url`.
pub struct ImageService {
    storage: Arc<ObjectStorage>,
}

impl ImageService {
    pub fn new(storage: Arc<ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Upload an image on behalf of a user, returning its public URL.
    ///
    /// Keys are scoped per user (`images/{user_id}/...`) so deletion can be
    /// restricted to the uploader.
    pub async fn upload_image(
        &self,
        user_id: Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        if !is_image_type_allowed(content_type) {
            return Err(AppError::BadRequest(format!(
                "Content type '{}' is not an accepted image type",
                content_type
            )));
        }

        let extension = extension_for_content_type(content_type)
            .ok_or_else(|| AppError::BadRequest("Unknown image content type".to_string()))?;

        let key = format!("images/{}/{}.{}", user_id, Uuid::new_v4(), extension);

        let url = self.storage.upload(&key, data, content_type).await?;

        debug!("Image uploaded for user {}: {}", user_id, key);
        Ok(url)
    }

    /// Delete an uploaded image by its URL.
    ///
    /// Only keys under the caller's own prefix are deletable.
    pub async fn delete_by_url(&self, user_id: Uuid, url: &str) -> Result<()> {
        let key = self
            .storage
            .key_from_url(url)
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        let own_prefix = format!("images/{}/", user_id);
        if !key.starts_with(&own_prefix) {
            return Err(AppError::Forbidden(
                "You do not have permission to delete this image".to_string(),
            ));
        }

        self.storage.delete(&key).await?;

        info!("Image deleted for user {}: {}", user_id, key);
        Ok(())
    }
}
