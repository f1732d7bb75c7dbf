use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity established from a validated access token.
///
/// Roles are intentionally absent: admin privilege is a `user_roles` row,
/// checked against the database per request, not a token claim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Identity provider subject
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
}
