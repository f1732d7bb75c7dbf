use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::UpdateProfileDto;
use crate::features::profiles::models::Profile;

const PROFILE_COLUMNS: &str = "id, email, full_name, avatar_url, created_at, updated_at";

/// Service for profile operations
pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the caller's profile, creating it from token claims on first
    /// access. The stored email follows the token; a name set through the
    /// profile page is never overwritten by claims.
    pub async fn get_or_create(&self, user: &AuthenticatedUser) -> Result<Profile> {
        let sql = format!(
            "INSERT INTO profiles (id, email, full_name) VALUES ($1, $2, $3) \
             ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email, updated_at = NOW() \
             RETURNING {}",
            PROFILE_COLUMNS
        );
        sqlx::query_as::<_, Profile>(&sql)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get or create profile: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Update the caller's own display fields
    pub async fn update(&self, user_id: Uuid, dto: UpdateProfileDto) -> Result<Profile> {
        let sql = format!(
            "UPDATE profiles \
             SET full_name = COALESCE($2, full_name), \
                 avatar_url = COALESCE($3, avatar_url), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {}",
            PROFILE_COLUMNS
        );
        let profile = sqlx::query_as::<_, Profile>(&sql)
            .bind(user_id)
            .bind(dto.full_name)
            .bind(dto.avatar_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update profile: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", user_id)))?;

        tracing::info!("Profile {} updated", user_id);
        Ok(profile)
    }

    /// List all profiles, newest first (admin user management)
    pub async fn list(&self) -> Result<Vec<Profile>> {
        let sql = format!(
            "SELECT {} FROM profiles ORDER BY created_at DESC",
            PROFILE_COLUMNS
        );
        sqlx::query_as::<_, Profile>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list profiles: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Delete a profile row; problems, likes and roles cascade with it
    pub async fn delete(&self, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete profile: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Profile {} not found", user_id)));
        }

        tracing::info!("Deleted profile {} and its owned rows", user_id);
        Ok(())
    }
}
