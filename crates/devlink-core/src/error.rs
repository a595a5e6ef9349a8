//! 백엔드 전반의 에러 타입.
//!
//! 이 모듈은 핸들러 경계에서 HTTP 응답으로 변환되는 에러 분류 체계를 정의합니다.
//! 분류 체계 밖의 모든 실패는 `Unexpected`로 수렴하며, 내부 원인은 로그에만
//! 남기고 클라이언트에는 노출하지 않습니다.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 입력 검증 실패
    #[error("입력 검증 실패: {0}")]
    ValidationFailed(String),

    /// 인증 실패 (토큰 없음/무효, 자격증명 불일치)
    #[error("인증 실패: {0}")]
    Unauthorized(String),

    /// 중복 충돌 (이미 존재하는 이메일 등)
    #[error("중복 충돌: {0}")]
    Conflict(String),

    /// 리소스 없음
    #[error("리소스 없음: {0}")]
    NotFound(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 예기치 않은 내부 에러
    #[error("내부 에러: {0}")]
    Unexpected(String),
}

/// 도메인 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// 클라이언트에 구조화된 본문으로 전달되는 에러인지 확인합니다.
    ///
    /// `Unexpected`와 `Config`는 일반 텍스트 서버 에러로 수렴합니다.
    pub fn is_client_visible(&self) -> bool {
        !matches!(self, CoreError::Unexpected(_) | CoreError::Config(_))
    }

    /// 인증 거부인지 확인합니다.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CoreError::Unauthorized(_))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Unexpected(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
