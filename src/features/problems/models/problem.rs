use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report lifecycle status matching the database enum.
///
/// The only transitions offered by the triage UI are
/// pending -> in_progress -> resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "problem_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProblemStatus {
    Pending,
    InProgress,
    Resolved,
}

impl std::fmt::Display for ProblemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemStatus::Pending => write!(f, "pending"),
            ProblemStatus::InProgress => write!(f, "in_progress"),
            ProblemStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Problem category matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "problem_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProblemCategory {
    Pothole,
    AccumulatedTrash,
    Vandalism,
    PublicLighting,
    DamagedSignage,
    DamagedSidewalk,
    Other,
}

impl std::fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemCategory::Pothole => write!(f, "pothole"),
            ProblemCategory::AccumulatedTrash => write!(f, "accumulated_trash"),
            ProblemCategory::Vandalism => write!(f, "vandalism"),
            ProblemCategory::PublicLighting => write!(f, "public_lighting"),
            ProblemCategory::DamagedSignage => write!(f, "damaged_signage"),
            ProblemCategory::DamagedSidewalk => write!(f, "damaged_sidewalk"),
            ProblemCategory::Other => write!(f, "other"),
        }
    }
}

/// Database model for a reported urban problem
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Problem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub category: ProblemCategory,
    pub title: String,
    pub description: String,
    pub location_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: ProblemStatus,
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for an image attached to a problem
#[derive(Debug, Clone, FromRow)]
pub struct ProblemImage {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new problem
#[derive(Debug)]
pub struct CreateProblem {
    pub category: ProblemCategory,
    pub title: String,
    pub description: String,
    pub location_address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_urls: Vec<String>,
}
