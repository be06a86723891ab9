//! Bearer-token gate for protected routes.
//!
//! Adding `AuthUser` to a handler's arguments is what protects it: axum runs
//! the extractor before the handler body, so a rejected token means the
//! handler never executes. Verification is self-contained — no store access.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::JwtKeys;
use crate::error::ApiError;

/// The authenticated principal: the user id signed into the token.
#[derive(Debug)]
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingAuth)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or(ApiError::MalformedAuth)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            // expiry stays distinguishable in the logs; the client sees a
            // uniform 401 either way
            warn!(error = %e, "rejected bearer token");
            ApiError::from(e)
        })?;

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::TokenError;
    use axum::http::Request;
    use jsonwebtoken::{DecodingKey, EncodingKey};
    use std::time::Duration;

    fn make_keys() -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(b"test-secret"),
            decoding: DecodingKey::from_secret(b"test-secret"),
            ttl: Duration::from_secs(3600),
        }
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/articles");
        if let Some(v) = value {
            builder = builder.header(axum::http::header::AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).expect("request").into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let keys = make_keys();
        let mut parts = parts_with_header(None);
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingAuth));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let keys = make_keys();
        let mut parts = parts_with_header(Some("Token abcdef"));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedAuth));
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let keys = make_keys();
        let mut parts = parts_with_header(Some("Bearer not-a-jwt"));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidToken(TokenError::Malformed)
        ));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_expired() {
        let keys = make_keys();
        let token = keys.sign_with_ttl(9, Duration::ZERO).expect("sign");
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken(TokenError::Expired)));
    }

    #[tokio::test]
    async fn valid_token_yields_the_signed_subject() {
        let keys = make_keys();
        let token = keys.sign(42).expect("sign");
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));
        let AuthUser(user_id) = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .expect("extract");
        assert_eq!(user_id, 42);
    }
}
