use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::profiles::models::Profile;

/// Response DTO for a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponseDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            full_name: p.full_name,
            avatar_url: p.avatar_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Request DTO for updating the caller's own profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 120, message = "full_name must be 1-120 characters"))]
    pub full_name: Option<String>,

    #[validate(url(message = "avatar_url must be a valid URL"))]
    pub avatar_url: Option<String>,
}
