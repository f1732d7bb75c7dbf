use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::admin::stats::{CategoryCount, ProblemStats, StatusCount};
use crate::features::problems::models::{ProblemCategory, ProblemStatus};
use crate::features::profiles::models::Profile;

/// One status bucket of the admin aggregation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCountDto {
    pub status: ProblemStatus,
    pub count: i64,
}

/// One category bucket of the admin aggregation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCountDto {
    pub category: ProblemCategory,
    pub count: i64,
}

/// Response DTO for the admin dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemStatsDto {
    pub total_problems: i64,
    pub problems_by_status: Vec<StatusCountDto>,
    pub problems_by_category: Vec<CategoryCountDto>,
    /// Problems created within the last 7 days
    pub recent_problems: i64,
}

impl From<ProblemStats> for ProblemStatsDto {
    fn from(stats: ProblemStats) -> Self {
        Self {
            total_problems: stats.total_problems,
            problems_by_status: stats
                .problems_by_status
                .into_iter()
                .map(|StatusCount { status, count }| StatusCountDto { status, count })
                .collect(),
            problems_by_category: stats
                .problems_by_category
                .into_iter()
                .map(|CategoryCount { category, count }| CategoryCountDto { category, count })
                .collect(),
            recent_problems: stats.recent_problems,
        }
    }
}

/// Request DTO for triaging a problem's status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProblemStatusDto {
    pub status: ProblemStatus,
}

/// Response DTO for a managed user account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: Uuid,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for AdminUserDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            full_name: p.full_name,
            created_at: p.created_at,
        }
    }
}

/// Response DTO for admin delete operations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponseDto {
    pub deleted: bool,
}
