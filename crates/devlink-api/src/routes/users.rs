//! 사용자 등록 endpoint.
//!
//! 신규 계정 생성 흐름을 제공합니다: 입력 검증, 이메일 중복 검사,
//! 비밀번호 해싱, 토큰 발급.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::ToSchema;
use validator::Validate;

use devlink_core::User;

use crate::auth::hash_password_async;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::state::AppState;

/// 등록 요청 본문.
///
/// 누락된 필드는 역직렬화를 통과시킨 뒤 검증 단계에서 클라이언트 문구로
/// 거부합니다. 누락과 형식 위반이 같은 문구로 수렴합니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// 표시 이름
    #[validate(
        required(message = "Please check your name"),
        length(min = 1, message = "Please check your name")
    )]
    pub name: Option<String>,

    /// 로그인 이메일
    #[validate(
        required(message = "Check your email"),
        email(message = "Check your email")
    )]
    pub email: Option<String>,

    /// 비밀번호 (6자 이상)
    #[validate(
        required(message = "Check your password"),
        length(min = 6, message = "Check your password")
    )]
    pub password: Option<String>,
}

/// 토큰 발급 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// 서명된 베어러 토큰
    pub token: String,
}

/// 사용자 등록.
///
/// 이메일 유일성은 사전 조회로 빠르게 거부하되, 동시 등록은 저장소의
/// 유일 제약이 최종적으로 방어합니다. 두 경로 모두 같은 문구로 거부됩니다.
///
/// POST /api/user
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "등록 성공, 토큰 발급", body = TokenResponse),
        (status = 400, description = "검증 실패 또는 이메일 중복", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    req.validate()?;

    let name = req.name.unwrap_or_default();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    debug!("Registering new user");

    let users = state.users()?;
    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let hash = hash_password_async(password).await?;
    let user = User::new(name, email, hash);

    let user = match users.insert(user).await {
        Ok(user) => user,
        // 조회와 삽입 사이에 끼어든 동시 등록
        Err(e) if e.is_duplicate_key() => {
            return Err(ApiError::conflict("User already exists"));
        }
        Err(e) => return Err(e.into()),
    };

    let token = state.token_keys.issue(user.id)?;
    info!(user_id = %user.id, "User registered");

    Ok(Json(TokenResponse { token }))
}

/// 사용자 라우터 생성.
pub fn users_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(register))
}
