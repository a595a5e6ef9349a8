//! 사용자 계정 레코드.
//!
//! 이 모듈은 자격증명 수명주기의 대상이 되는 사용자 타입을 정의합니다:
//! - `User` - 저장소에 보관되는 계정 레코드 (비밀번호 해시 포함)
//! - `PublicUser` - 클라이언트에 노출 가능한 투영 (비밀번호 제외)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 계정 레코드.
///
/// `password` 필드는 생성 시점부터 항상 해시만 담습니다. 평문 비밀번호는
/// 이 타입에 절대 들어오지 않으며, 직렬화 시에도 해시는 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct User {
    /// 내부 사용자 ID
    pub id: Uuid,
    /// 표시 이름
    pub name: String,
    /// 로그인 키로 사용되는 이메일 (저장소에서 유일성 보장)
    pub email: String,
    /// 아바타 참조
    pub avatar: Option<String>,
    /// 비밀번호 해시 (PHC 문자열, 솔트 포함)
    #[serde(skip_serializing, default)]
    pub password: String,
    /// 생성 타임스탬프
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 레코드를 생성합니다.
    ///
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let avatar = Self::derive_avatar(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            email: email.into(),
            avatar,
            password: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// 표시 이름에서 아바타를 유도합니다 (첫 글자).
    pub fn derive_avatar(name: &str) -> Option<String> {
        name.chars().next().map(|c| c.to_string())
    }

    /// 비밀번호가 제외된 공개 투영을 반환합니다.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// 클라이언트에 노출 가능한 사용자 투영.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct PublicUser {
    /// 사용자 ID
    pub id: Uuid,
    /// 표시 이름
    pub name: String,
    /// 이메일
    pub email: String,
    /// 아바타 참조
    pub avatar: Option<String>,
    /// 생성 타임스탬프
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_derives_avatar() {
        let user = User::new("Jane", "jane@example.com", "$argon2id$...");
        assert_eq!(user.avatar.as_deref(), Some("J"));
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_derive_avatar_handles_multibyte() {
        assert_eq!(User::derive_avatar("김개발").as_deref(), Some("김"));
        assert_eq!(User::derive_avatar(""), None);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new("Jane", "jane@example.com", "super-secret-hash");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("super-secret-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_public_projection() {
        let user = User::new("Jane", "jane@example.com", "hash");
        let public = user.to_public();
        assert_eq!(public.id, user.id);
        assert_eq!(public.name, "Jane");
    }
}
