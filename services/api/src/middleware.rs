//! Authentication middleware for JWT session token validation

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::error;

use crate::{error::ApiError, jwt::JwtService, models::UserRole, state::AppState};

/// Authenticated user information extracted from a session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
}

/// Middleware guarding admin-only routes
///
/// Expects an `Authorization: Bearer <token>` header; the token must be
/// valid, unexpired, and carry the admin role.
pub async fn require_admin(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::Unauthorized)?;

    let user = authorize_admin(&state.jwt_service, bearer.token())?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Resolve a bearer token into an admin user
fn authorize_admin(jwt_service: &JwtService, token: &str) -> Result<AuthUser, ApiError> {
    let claims = jwt_service.validate_token(token).map_err(|e| {
        error!("Failed to validate session token: {}", e);
        ApiError::Unauthorized
    })?;

    if claims.role != UserRole::Admin {
        return Err(ApiError::Forbidden);
    }

    Ok(AuthUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
