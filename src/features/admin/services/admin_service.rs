use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::admin::clients::IdentityAdminClient;
use crate::features::admin::stats::{self, ProblemStats};
use crate::features::problems::models::{Problem, ProblemStatus};
use crate::features::problems::services::ProblemService;
use crate::features::problems::snapshot::ProblemView;
use crate::features::profiles::models::Profile;
use crate::features::profiles::services::ProfileService;
use crate::shared::constants::ROLE_ADMIN;

/// Service for administrator operations.
///
/// Privilege is a `user_roles` row, checked against the database on every
/// call; nothing here trusts token claims for elevation.
pub struct AdminService {
    pool: PgPool,
    problem_service: Arc<ProblemService>,
    profile_service: Arc<ProfileService>,
    identity_admin: Arc<IdentityAdminClient>,
}

impl AdminService {
    pub fn new(
        pool: PgPool,
        problem_service: Arc<ProblemService>,
        profile_service: Arc<ProfileService>,
        identity_admin: Arc<IdentityAdminClient>,
    ) -> Self {
        Self {
            pool,
            problem_service,
            profile_service,
            identity_admin,
        }
    }

    /// Whether the identity holds the admin role
    pub async fn is_admin(&self, user_id: Uuid) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = $2)",
        )
        .bind(user_id)
        .bind(ROLE_ADMIN)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check admin role: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Reject non-admin callers before any privileged mutation
    pub async fn ensure_admin(&self, user_id: Uuid) -> Result<()> {
        if self.is_admin(user_id).await? {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Administrator access required".to_string(),
            ))
        }
    }

    /// Summary counts derived from a fresh full fetch
    pub async fn problem_stats(&self) -> Result<ProblemStats> {
        let problems: Vec<Problem> = self.problem_service.list_rows().await?;
        Ok(stats::compute(&problems, Utc::now()))
    }

    /// Triage a problem's lifecycle status, returning the hydrated result
    pub async fn update_problem_status(
        &self,
        id: Uuid,
        status: ProblemStatus,
    ) -> Result<ProblemView> {
        self.problem_service.update_status(id, status).await?;
        self.problem_service.get(id, None).await
    }

    /// Delete a problem and its attached rows
    pub async fn delete_problem(&self, id: Uuid) -> Result<()> {
        self.problem_service.delete(id).await
    }

    /// List all user profiles, newest first
    pub async fn list_users(&self) -> Result<Vec<Profile>> {
        self.profile_service.list().await
    }

    /// Delete a user account entirely.
    ///
    /// The identity provider confirms first; only then are the local rows
    /// removed (problems, likes and roles cascade from the profile).
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        self.identity_admin.delete_user(user_id).await?;

        // A missing local profile is fine: the account may never have
        // touched this service, or a previous deletion got halfway
        match self.profile_service.delete(user_id).await {
            Ok(()) | Err(AppError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
