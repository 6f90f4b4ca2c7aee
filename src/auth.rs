use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::AppError;

const SCHEME_PREFIX: &[u8] = b"Bearer ";

/// A request carrying `Authorization: Bearer <token>`.
///
/// Only the shape is checked: the token must be non-empty and may hold any
/// bytes a header value can carry. As a parts extractor it runs before the
/// body is read, so a missing credential is reported even when the body is
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_bearer_token(&parts.headers)
            .map(|token| BearerToken(String::from_utf8_lossy(token).into_owned()))
            .ok_or(AppError::Unauthorized)
    }
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&[u8]> {
    let value = headers.get(header::AUTHORIZATION)?.as_bytes();
    let token = value.strip_prefix(SCHEME_PREFIX)?.trim_ascii();

    if token.is_empty() {
        return None;
    }

    Some(token)
}
