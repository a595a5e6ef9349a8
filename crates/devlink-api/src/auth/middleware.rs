//! Axum용 요청 인증 추출기.
//!
//! 보호된 라우트 앞에서 베어러 토큰을 추출하고 검증합니다. 검증에
//! 성공하면 사용자 식별자가 핸들러 인자로 전달되고, 실패하면 핸들러에
//! 도달하기 전에 401로 거부됩니다.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use super::TokenKeys;
use crate::error::ErrorBody;

/// 인증된 사용자 추출기.
///
/// # 사용 예시
///
/// ```rust,ignore
/// async fn protected_handler(
///     AuthUser(user_id): AuthUser,
/// ) -> impl IntoResponse {
///     format!("Authenticated user: {}", user_id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

/// 요청 인증 거부 사유.
///
/// 두 가지뿐입니다. 토큰이 제시된 경우의 모든 내부 원인(서명 불일치,
/// 페이로드 손상, 시크릿 불일치)은 `InvalidToken` 하나로 수렴합니다.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("베어러 토큰 없음")]
    MissingToken,
    #[error("유효하지 않은 토큰")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let msg = match self {
            AuthError::MissingToken => "No token, authorization denied",
            AuthError::InvalidToken => "Token is not valid",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorBody::single(msg))).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    TokenKeys: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Authorization 헤더에서 베어러 토큰 추출. 헤더가 없거나
        // 베어러 형식이 아니면 토큰이 제시되지 않은 것으로 본다.
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let keys = TokenKeys::from_ref(state);
        let claims = keys.decode(token).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser(claims.user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    const TEST_SECRET: &str = "test-secret-key-for-middleware-testing-32-chars";

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/post");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_missing_header_rejected_as_no_token() {
        let keys = TokenKeys::new(TEST_SECRET);
        let mut parts = parts_with_header(None);

        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_rejected_as_no_token() {
        let keys = TokenKeys::new(TEST_SECRET);
        let mut parts = parts_with_header(Some("Basic dXNlcjpwdw=="));

        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user_id() {
        let keys = TokenKeys::new(TEST_SECRET);
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

        let AuthUser(resolved) = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap();
        assert_eq!(resolved, user_id);
    }

    #[tokio::test]
    async fn test_garbage_token_rejected_as_invalid() {
        let keys = TokenKeys::new(TEST_SECRET);
        let mut parts = parts_with_header(Some("Bearer not.a.token"));

        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_wrong_secret_token_rejected_as_invalid() {
        let keys = TokenKeys::new(TEST_SECRET);
        let other_keys = TokenKeys::new("another-secret-key-for-testing-32-chars!!");
        let token = other_keys.issue(Uuid::new_v4()).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {}", token)));

        let result = AuthUser::from_request_parts(&mut parts, &keys).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_rejection_bodies() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.errors[0].msg, "No token, authorization denied");

        let response = AuthError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.errors[0].msg, "Token is not valid");
    }
}
