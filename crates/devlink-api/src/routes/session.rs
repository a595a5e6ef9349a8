//! 세션 endpoint.
//!
//! 로그인과 현재 사용자 조회를 제공합니다. 로그인 실패는 미등록 이메일이든
//! 비밀번호 불일치든 같은 거부로 수렴해 계정 존재 여부를 노출하지 않습니다.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::ToSchema;
use validator::Validate;

use devlink_core::PublicUser;

use crate::auth::{verify_password_async, AuthUser};
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::routes::users::TokenResponse;
use crate::state::AppState;

/// 로그인 요청 본문.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// 로그인 이메일
    #[validate(
        required(message = "Please include a valid email"),
        email(message = "Please include a valid email")
    )]
    pub email: Option<String>,

    /// 비밀번호. 존재만 검사하며 일치 여부는 해시 검증이 판단합니다.
    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// 현재 사용자 조회.
///
/// 토큰이 가리키는 사용자 레코드를 비밀번호를 제외하고 반환합니다.
/// 토큰은 유효하지만 레코드가 사라진 경우 거부됩니다.
///
/// GET /api/auth
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "session",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "현재 사용자", body = PublicUser),
        (status = 400, description = "사용자 레코드 없음", body = ErrorBody),
        (status = 401, description = "토큰 없음 또는 무효", body = ErrorBody)
    )
)]
pub async fn current_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<PublicUser>> {
    let user = state
        .users()?
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invalid Authentication"))?;

    Ok(Json(user.to_public()))
}

/// 로그인.
///
/// POST /api/auth
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "로그인 성공, 토큰 발급", body = TokenResponse),
        (status = 400, description = "검증 실패 또는 자격 증명 불일치", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()?;

    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    debug!("Login attempt");

    // 두 실패 원인이 바이트 단위로 같은 응답으로 수렴한다
    let Some(user) = state.users()?.find_by_email(&email).await? else {
        return Err(ApiError::validation("Invalid Credentials"));
    };

    if !verify_password_async(password, user.password.clone()).await {
        return Err(ApiError::validation("Invalid Credentials"));
    }

    let token = state.token_keys.issue(user.id)?;
    info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse { token }))
}

/// 세션 라우터 생성.
pub fn session_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(current_user).post(login))
}
