//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/user` - 사용자 등록
//! - `/api/auth` - 로그인, 현재 사용자 조회
//! - `/api/post` - 게시글, 좋아요, 댓글
//! - `/api/profile` - 프로필, 경력, 학력

pub mod health;
pub mod posts;
pub mod profiles;
pub mod session;
pub mod users;

pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use posts::{posts_router, TextRequest};
pub use profiles::{
    profiles_router, AddEducationRequest, AddExperienceRequest, UpsertProfileRequest,
};
pub use session::{session_router, LoginRequest};
pub use users::{users_router, RegisterRequest, TokenResponse};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // API 엔드포인트
        .nest("/api/user", users_router())
        .nest("/api/auth", session_router())
        .nest("/api/post", posts_router())
        .nest("/api/profile", profiles_router())
}
