use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::features::problems::{
    dtos as problems_dtos, handlers as problems_handlers, models as problems_models,
};
use crate::features::profiles::{dtos as profiles_dtos, handlers as profiles_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Problems
        problems_handlers::problem_handler::list_problems,
        problems_handlers::problem_handler::get_problem,
        problems_handlers::problem_handler::create_problem,
        problems_handlers::problem_handler::toggle_like,
        // Geocoding
        problems_handlers::geocoding_handler::reverse_geocode,
        // Images
        files_handlers::file_handler::upload_image,
        files_handlers::file_handler::delete_image,
        // Profiles
        profiles_handlers::profile_handler::get_me,
        profiles_handlers::profile_handler::update_me,
        // Admin
        admin_handlers::get_stats,
        admin_handlers::update_problem_status,
        admin_handlers::delete_problem,
        admin_handlers::list_users,
        admin_handlers::delete_user,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Problems
            problems_models::ProblemStatus,
            problems_models::ProblemCategory,
            problems_dtos::ProblemResponseDto,
            problems_dtos::CreateProblemDto,
            problems_dtos::LikeResponseDto,
            problems_dtos::AddressResponseDto,
            ApiResponse<Vec<problems_dtos::ProblemResponseDto>>,
            ApiResponse<problems_dtos::ProblemResponseDto>,
            ApiResponse<problems_dtos::LikeResponseDto>,
            ApiResponse<problems_dtos::AddressResponseDto>,
            // Images
            files_dtos::UploadImageDto,
            files_dtos::ImageResponseDto,
            files_dtos::DeleteImageDto,
            files_dtos::DeleteImageResponseDto,
            ApiResponse<files_dtos::ImageResponseDto>,
            ApiResponse<files_dtos::DeleteImageResponseDto>,
            // Profiles
            profiles_dtos::ProfileResponseDto,
            profiles_dtos::UpdateProfileDto,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            // Admin
            admin_dtos::StatusCountDto,
            admin_dtos::CategoryCountDto,
            admin_dtos::ProblemStatsDto,
            admin_dtos::UpdateProblemStatusDto,
            admin_dtos::AdminUserDto,
            admin_dtos::DeleteResponseDto,
            ApiResponse<admin_dtos::ProblemStatsDto>,
            ApiResponse<Vec<admin_dtos::AdminUserDto>>,
            ApiResponse<admin_dtos::DeleteResponseDto>,
        )
    ),
    tags(
        (name = "problems", description = "Urban problem reports and likes"),
        (name = "geocoding", description = "Reverse geocoding for the location picker"),
        (name = "images", description = "Report image uploads"),
        (name = "profiles", description = "Own profile management"),
        (name = "admin", description = "Triage and user management (admin role)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Voz Urbana API",
        version = "0.1.0",
        description = "API documentation for Voz Urbana",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
