#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::from_u128(0xA11CE),
        email: Some("cidada@example.com".to_string()),
        name: Some("Cidadã de Teste".to_string()),
    }
}

#[cfg(test)]
async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated test identity,
/// bypassing JWT validation.
#[cfg(test)]
pub fn with_test_user(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}
