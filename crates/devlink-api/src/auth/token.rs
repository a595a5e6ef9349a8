//! 베어러 토큰 발급 및 검증.
//!
//! 토큰 페이로드는 사용자 식별자만 담습니다. 만료 클레임은 설정하지
//! 않으며, 시크릿이 교체되지 않는 한 토큰은 무기한 유효합니다.
//! 서명 키는 프로세스 시작 시 한 번 생성되어 발급자와 검증자가
//! 공유합니다.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 토큰 페이로드.
///
/// 사용자 식별자 외의 클레임은 넣지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 클레임
    pub user: UserClaim,
}

/// 페이로드에 내장되는 사용자 식별자.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserClaim {
    /// 사용자 ID
    pub id: Uuid,
}

impl Claims {
    /// 사용자 ID로 페이로드를 생성합니다.
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user: UserClaim { id: user_id },
        }
    }
}

/// 토큰 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("토큰 인코딩 실패: {0}")]
    EncodingFailed(String),
    #[error("유효하지 않은 토큰")]
    InvalidToken,
}

/// 토큰 서명/검증 키 쌍.
///
/// 시크릿으로부터 생성되어 애플리케이션 상태에 보관됩니다. 검증 시
/// 만료를 요구하지 않도록 구성됩니다.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// 시크릿에서 키 쌍을 생성합니다.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        // 만료 클레임을 쓰지 않으므로 exp 검증과 필수 클레임 요구를 끈다
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 사용자 ID를 담은 서명된 토큰을 발급합니다.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        encode(&Header::default(), &Claims::for_user(user_id), &self.encoding)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// 토큰을 검증하고 페이로드를 반환합니다.
    ///
    /// 서명 불일치, 페이로드 손상, 시크릿 불일치는 모두 하나의 거부로
    /// 수렴합니다. 내부 원인은 로그에만 남습니다.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                TokenError::InvalidToken
            })
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}
