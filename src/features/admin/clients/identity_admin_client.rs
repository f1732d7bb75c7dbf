use serde::Deserialize;
use uuid::Uuid;

use crate::core::config::IdentityAdminConfig;
use crate::core::error::{AppError, Result};

/// Error payload shape most identity providers return
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(alias = "message", alias = "error", alias = "msg")]
    message: Option<String>,
}

/// Client for the identity provider's management API.
///
/// Authenticates with a service-level key that must never be exposed to
/// browsers; account deletion cascades on the provider side, local rows
/// are the caller's responsibility.
pub struct IdentityAdminClient {
    client: reqwest::Client,
    config: IdentityAdminConfig,
}

impl IdentityAdminClient {
    pub fn new(config: IdentityAdminConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Delete an account on the identity provider.
    ///
    /// A 404 from the provider counts as success so a retried deletion
    /// converges instead of erroring.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        let url = format!(
            "{}/admin/users/{}",
            self.config.api_base_url.trim_end_matches('/'),
            user_id
        );

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.config.service_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity provider request failed: {:?}", e);
                AppError::ExternalServiceError(format!(
                    "Identity provider request failed: {}",
                    e
                ))
            })?;

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            tracing::info!("Identity provider deleted account {}", user_id);
            return Ok(());
        }

        let detail = response
            .json::<ProviderError>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| "no error detail".to_string());

        tracing::error!(
            "Identity provider rejected account deletion for {}: {} ({})",
            user_id,
            status,
            detail
        );
        Err(AppError::ExternalServiceError(format!(
            "Account deletion failed: {} ({})",
            status, detail
        )))
    }
}
