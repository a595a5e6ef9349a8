//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.
//!
//! 클라이언트에 보이는 실패는 `{"errors":[{"msg":"..."}]}` JSON 본문으로
//! 직렬화되고, 예기치 못한 실패는 상세를 감춘 500 평문 `Server error`로
//! 직렬화됩니다. 내부 원인은 로그에만 남습니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use devlink_core::StoreError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// 클라이언트에 직렬화되는 에러 본문.
///
/// # 예시
///
/// ```json
/// {
///   "errors": [
///     { "msg": "Invalid Credentials" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// 실패 메시지 목록
    pub errors: Vec<ErrorMessage>,
}

/// 에러 본문의 개별 항목.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    /// 사람이 읽을 수 있는 실패 사유
    pub msg: String,
}

impl ErrorBody {
    /// 단일 메시지 본문을 생성합니다.
    pub fn single(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorMessage { msg: msg.into() }],
        }
    }

    /// 여러 메시지를 담은 본문을 생성합니다.
    pub fn from_messages(msgs: Vec<String>) -> Self {
        Self {
            errors: msgs.into_iter().map(|msg| ErrorMessage { msg }).collect(),
        }
    }
}

/// API 경계의 실패 분류.
///
/// 내부 원인별이 아니라 클라이언트에 보이는 결과별 변형입니다.
/// 한 경계에서 여러 내부 원인이 하나의 변형으로 수렴할 수 있으며,
/// 수렴 전 원인은 로그로만 남깁니다.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 요청 본문 검증 실패 (400)
    #[error("요청 검증 실패")]
    ValidationFailed(Vec<String>),
    /// 인증 실패 (401)
    #[error("인증 실패: {0}")]
    Unauthorized(String),
    /// 리소스 충돌 (400)
    #[error("리소스 충돌: {0}")]
    Conflict(String),
    /// 리소스 없음 (400)
    #[error("리소스 없음: {0}")]
    NotFound(String),
    /// 예기치 못한 내부 실패 (500)
    #[error("내부 오류: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// 단일 메시지 검증 실패를 생성합니다.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationFailed(vec![msg.into()])
    }

    /// 인증 실패를 생성합니다.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// 리소스 충돌을 생성합니다.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// 리소스 없음을 생성합니다.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 내부 실패를 생성합니다. 메시지는 클라이언트에 노출되지 않습니다.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// 응답 상태 코드.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) | Self::Conflict(_) | Self::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::ValidationFailed(msgs) => {
                (status, Json(ErrorBody::from_messages(msgs))).into_response()
            }
            Self::Unauthorized(msg) | Self::Conflict(msg) | Self::NotFound(msg) => {
                (status, Json(ErrorBody::single(msg))).into_response()
            }
            Self::Unexpected(detail) => {
                // 내부 상세는 로그로만 남기고 본문에는 싣지 않는다
                tracing::error!(error = %detail, "Unhandled server error");
                (status, "Server error").into_response()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        // HashMap 순회 순서가 고정이 아니므로 필드명으로 정렬해 결정적으로 만든다
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let msgs = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        Self::ValidationFailed(msgs)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        // 경계별 의미가 있는 중복 키(등록의 이메일 충돌)는 핸들러가
        // 변환 전에 직접 처리한다. 여기까지 내려온 스토어 실패는 모두
        // 예기치 못한 실패다.
        Self::Unexpected(e.to_string())
    }
}

impl From<crate::auth::PasswordError> for ApiError {
    fn from(e: crate::auth::PasswordError) -> Self {
        Self::Unexpected(e.to_string())
    }
}

impl From<crate::auth::TokenError> for ApiError {
    fn from(e: crate::auth::TokenError) -> Self {
        // 토큰 검증 거부는 인증 추출기가 처리하므로 여기 도달하는
        // 토큰 실패는 발급 실패뿐이다
        Self::Unexpected(e.to_string())
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, ApiError>;
