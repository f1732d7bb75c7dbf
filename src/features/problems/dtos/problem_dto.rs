use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::problems::filter::ProblemFilter;
use crate::features::problems::models::{
    CreateProblem, ProblemCategory, ProblemStatus,
};
use crate::features::problems::snapshot::ProblemView;

/// Response DTO for a hydrated problem
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemResponseDto {
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
    pub user_has_liked: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProblemView> for ProblemResponseDto {
    fn from(view: ProblemView) -> Self {
        let p = view.problem;
        Self {
            id: p.id,
            owner_id: p.owner_id,
            category: p.category,
            title: p.title,
            description: p.description,
            location_address: p.location_address,
            latitude: p.latitude,
            longitude: p.longitude,
            status: p.status,
            likes_count: p.likes_count,
            user_has_liked: view.user_has_liked,
            images: view.images,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Request DTO for creating a problem.
///
/// Required text fields are validated before anything touches the
/// database; the category cannot be empty by construction (typed enum).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProblemDto {
    pub category: ProblemCategory,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "location_address is required"))]
    pub location_address: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// URLs previously returned by the image upload endpoint
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl From<CreateProblemDto> for CreateProblem {
    fn from(dto: CreateProblemDto) -> Self {
        Self {
            category: dto.category,
            title: dto.title,
            description: dto.description,
            location_address: dto.location_address,
            latitude: dto.latitude,
            longitude: dto.longitude,
            image_urls: dto.image_urls,
        }
    }
}

/// Query parameters for the problem listing.
///
/// All of them are optional and combine with logical AND; they are applied
/// in memory over the full hydrated list, never in SQL.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProblemListQuery {
    /// Free text matched against title, description or address
    pub search: Option<String>,
    pub category: Option<ProblemCategory>,
    pub status: Option<ProblemStatus>,
    /// Substring of the address (advanced filter)
    pub location: Option<String>,
    /// Inclusive lower bound, YYYY-MM-DD
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound (end of day), YYYY-MM-DD
    pub date_to: Option<NaiveDate>,
}

impl From<ProblemListQuery> for ProblemFilter {
    fn from(query: ProblemListQuery) -> Self {
        Self {
            search: query.search.filter(|s| !s.trim().is_empty()),
            category: query.category,
            status: query.status,
            location: query.location.filter(|s| !s.trim().is_empty()),
            date_from: query.date_from,
            date_to: query.date_to,
        }
    }
}

/// Response DTO for a like toggle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeResponseDto {
    /// Whether the caller likes the problem after the toggle
    pub liked: bool,
    pub likes_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(title: &str, description: &str, location: &str) -> CreateProblemDto {
        CreateProblemDto {
            category: ProblemCategory::Pothole,
            title: title.to_string(),
            description: description.to_string(),
            location_address: location.to_string(),
            latitude: None,
            longitude: None,
            image_urls: Vec::new(),
        }
    }

    #[test]
    fn test_create_dto_rejects_empty_required_fields() {
        assert!(dto("", "d", "l").validate().is_err());
        assert!(dto("t", "", "l").validate().is_err());
        assert!(dto("t", "d", "").validate().is_err());
    }

    #[test]
    fn test_create_dto_accepts_complete_input() {
        assert!(dto("Buraco na Rua X", "Buraco grande", "Rua X, Centro")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_list_query_blank_strings_become_unset_filters() {
        let query = ProblemListQuery {
            search: Some("   ".to_string()),
            location: Some(String::new()),
            ..Default::default()
        };

        let filter: ProblemFilter = query.into();

        assert!(filter.is_empty());
    }
}
