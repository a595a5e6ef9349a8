//! REST API 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 REST API
//! - 베어러 토큰 인증 (등록, 로그인, 요청 검증)
//! - 프로필 및 게시글 엔드포인트
//! - 헬스 체크 엔드포인트
//! - OpenAPI 문서 및 Swagger UI
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`auth`]: 토큰 발급/검증 및 비밀번호 해싱
//! - [`repository`]: PostgreSQL 및 인메모리 저장소 구현
//! - [`error`]: 통합 에러 응답
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod auth;
pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

pub use auth::{
    hash_password, verify_password, AuthError, AuthUser, Claims, TokenError, TokenKeys,
};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorMessage};
pub use routes::*;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use state::create_test_state;
