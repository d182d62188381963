// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::{AuthenticatedUser, RequestOrigin},
        error::ApplicationError,
    },
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts, Extension};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use std::convert::Infallible;

use super::error::HttpError;

#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::Unauthorized(
                    "missing Authorization header".into(),
                ))
            })?;

        let authenticator = app_state.services.authenticator();
        let user = authenticator
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(user))
    }
}

/// Caller address and agent for the audit trail. Both default to the empty
/// string when the headers are absent, so extraction never fails.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta(pub RequestOrigin);

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .unwrap_or_default();

        Ok(Self(RequestOrigin { ip, user_agent }))
    }
}
