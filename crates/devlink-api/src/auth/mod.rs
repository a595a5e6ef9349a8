//! 인증 및 자격 증명 처리.
//!
//! 비밀번호 해싱, 베어러 토큰 발급/검증, 요청 인증 추출기를 제공합니다.
//!
//! # 구성 요소
//!
//! - [`TokenKeys`]: 토큰 서명/검증 키 쌍
//! - [`Claims`]: 토큰 페이로드 구조체
//! - [`AuthUser`]: Axum 핸들러용 인증 추출기
//! - 비밀번호 해싱/검증 함수
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! // 보호된 라우트에서 AuthUser 추출기 사용
//! async fn protected_handler(
//!     AuthUser(user_id): AuthUser,
//! ) -> impl IntoResponse {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

mod middleware;
mod password;
mod token;

pub use middleware::{AuthError, AuthUser};
pub use password::{
    hash_password, hash_password_async, verify_password, verify_password_async, PasswordError,
};
pub use token::{Claims, TokenError, TokenKeys, UserClaim};
