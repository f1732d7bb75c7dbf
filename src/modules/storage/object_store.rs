//! MinIO/S3-compatible object storage for report images.
//!
//! Uses rust-s3 for lightweight S3 operations. All uploads are publicly
//! readable; the bucket's anonymous-read policy is expected to be
//! provisioned alongside the bucket (e.g. `mc anonymous set download`).

use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::StorageConfig;
use crate::core::error::AppError;

pub struct ObjectStorage {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    public_endpoint: String,
}

impl ObjectStorage {
    /// Create a storage client from configuration. No network calls happen
    /// here; call `ensure_bucket_exists` at startup.
    pub fn new(config: &StorageConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create storage credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create storage bucket: {}", e)))?;

        // Path-style URLs for MinIO (http://endpoint/bucket, not http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Ensure the bucket exists, creating it when missing.
    ///
    /// "Already exists" answers are tolerated so several instances can
    /// start concurrently.
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        match Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await
        {
            Ok(_) => {
                info!("Bucket '{}' created", self.bucket.name());
                Ok(())
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                    Ok(())
                } else {
                    warn!(
                        "Could not create bucket '{}': {}. Assuming it exists.",
                        self.bucket.name(),
                        e
                    );
                    Ok(())
                }
            }
        }
    }

    /// Upload an object and return its public URL
    pub async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload '{}': {}", key, e)))?;

        debug!("Uploaded '{}' to bucket '{}'", key, self.bucket.name());
        Ok(self.public_url(key))
    }

    /// Delete an object by key
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.bucket
            .delete_object(key)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete '{}': {}", key, e)))?;

        debug!("Deleted '{}' from bucket '{}'", key, self.bucket.name());
        Ok(())
    }

    /// Public URL for an object key
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    /// Extract the object key from a URL previously returned by
    /// `public_url`; None for URLs outside this bucket.
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        let prefix = format!("{}/{}/", self.public_endpoint, self.bucket.name());
        url.strip_prefix(&prefix)
            .filter(|key| !key.is_empty())
            .map(|key| key.to_string())
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage() -> ObjectStorage {
        ObjectStorage::new(&StorageConfig {
            endpoint: "http://localhost:9000".to_string(),
            public_endpoint: "https://cdn.example.com".to_string(),
            access_key: "test".to_string(),
            secret_key: "test".to_string(),
            bucket: "vozurbana-images".to_string(),
            region: "us-east-1".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_public_url_uses_public_endpoint() {
        let storage = test_storage();
        assert_eq!(
            storage.public_url("images/u1/a.jpg"),
            "https://cdn.example.com/vozurbana-images/images/u1/a.jpg"
        );
    }

    #[test]
    fn test_key_from_url_round_trips() {
        let storage = test_storage();
        let url = storage.public_url("images/u1/a.jpg");
        assert_eq!(storage.key_from_url(&url).as_deref(), Some("images/u1/a.jpg"));
    }

    #[test]
    fn test_key_from_url_rejects_foreign_urls() {
        let storage = test_storage();
        assert_eq!(storage.key_from_url("https://elsewhere.example.com/x.jpg"), None);
        assert_eq!(
            storage.key_from_url("https://cdn.example.com/other-bucket/x.jpg"),
            None
        );
    }
}
