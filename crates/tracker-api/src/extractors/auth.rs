//! Authentication extractors
//!
//! Extract and verify bearer tokens from the Authorization header. Role
//! checks happen here, against the decoded claim, never in domain code.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracker_common::AppError;
use tracker_core::Role;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated customer extracted from a verified access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Customer id from the token subject
    pub customer_id: i64,
    /// Role claim carried by the token
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Verification failures keep their kind: an expired token renders
        // the TokenExpired row, not a generic 401
        let claims = app_state
            .jwt_service()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Access token rejected");
                ApiError::App(e)
            })?;

        let customer_id = claims.customer_id().map_err(ApiError::App)?;

        Ok(AuthUser {
            customer_id,
            role: claims.role,
        })
    }
}

/// Authenticated customer that must carry the ADMIN role
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !user.role.is_admin() {
            tracing::warn!(customer_id = user.customer_id, "Admin-only endpoint refused");
            return Err(ApiError::App(AppError::InsufficientRole));
        }

        Ok(AdminUser(user))
    }
}
