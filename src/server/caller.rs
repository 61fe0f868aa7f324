//! Builds the explicit [`CallerContext`] for each HTTP request.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::error::AppError;
use crate::localization::negotiate_culture;
use crate::notification::CallerContext;

use super::AppState;

/// Authenticated caller, extracted from the bearer token and
/// `Accept-Language` header.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerContext);

/// Extract bearer token from Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Preferred culture of the request, else the configured default
pub fn request_culture(headers: &HeaderMap, default_culture: &str) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(negotiate_culture)
        .unwrap_or_else(|| default_culture.to_string())
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing bearer token");
            AppError::Auth("Missing bearer token".to_string())
        })?;

        let claims = state.jwt_validator.validate(token)?;
        let culture = request_culture(&parts.headers, &state.settings.localization.default_culture);

        let ctx = CallerContext::new(culture)
            .with_user(claims.name.clone(), claims.preferred_username.clone())
            .with_tenant(claims.tenant_id);

        tracing::debug!(
            user_id = %claims.user_id(),
            tenant = ?ctx.tenant_id,
            culture = %ctx.culture,
            "Caller resolved"
        );

        Ok(Caller(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_request_culture() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_culture(&headers, "en"), "en");

        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("zh-Hans;q=0.9, en;q=0.5"),
        );
        assert_eq!(request_culture(&headers, "en"), "zh-Hans");
    }
}
