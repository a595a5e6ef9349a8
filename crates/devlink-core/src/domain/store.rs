//! 저장소 계약.
//!
//! 데이터 소유자(사용자/프로필/게시글 저장소)에 대한 백엔드 중립적인
//! 인터페이스를 제공합니다. Postgres 구현과 테스트용 인메모리 구현이
//! 이 계약을 따릅니다.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{Post, Profile, User};

// =============================================================================
// 에러 타입
// =============================================================================

/// 저장소 에러.
#[derive(Debug, Error)]
pub enum StoreError {
    /// 유일 키 충돌 (이미 존재하는 이메일 등)
    #[error("유일 키 충돌")]
    DuplicateKey,

    /// 백엔드 에러
    #[error("저장소 에러: {0}")]
    Database(String),
}

impl StoreError {
    /// 유일 키 충돌인지 확인합니다.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey)
    }
}

// =============================================================================
// CredentialStore (사용자)
// =============================================================================

/// 사용자 자격증명 저장소 계약.
///
/// 이메일 유일성은 저장소가 보장합니다. 동시 등록이 가능하므로 중복 검사는
/// 애플리케이션 락이 아니라 저장소의 유일 제약으로 수행됩니다.
/// 부분 수정은 없습니다. 레코드는 통째로 삽입되거나 삭제됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// 사용자를 삽입합니다.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateKey`: 이메일이 이미 존재
    /// - `StoreError::Database`: 백엔드 실패
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// ID로 사용자를 삭제합니다.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

// =============================================================================
// ProfileStore
// =============================================================================

/// 프로필과 소유자 요약을 함께 담는 조회 결과.
///
/// 원본 문서의 소유자 참조를 소유자 요약으로 치환해 반환하는 조회에
/// 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ProfileWithOwner {
    /// 프로필
    #[serde(flatten)]
    pub profile: Profile,
    /// 소유 사용자 요약
    pub user: ProfileOwner,
}

/// 프로필 조회에 포함되는 소유자 요약.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ProfileOwner {
    /// 사용자 ID
    pub id: Uuid,
    /// 표시 이름
    pub name: String,
    /// 이메일
    pub email: String,
    /// 아바타
    pub avatar: Option<String>,
}

impl ProfileOwner {
    /// 사용자 레코드에서 요약을 만듭니다.
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// 프로필 저장소 계약.
///
/// 프로필은 사용자당 하나이며 소유 사용자 ID로 조회됩니다.
/// 내장 리스트(경력/학력)의 변경은 문서 전체 저장으로 반영됩니다.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// 소유 사용자 ID로 프로필을 조회합니다.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError>;

    /// 소유자 요약을 포함해 프로필을 조회합니다.
    async fn find_with_owner(&self, user_id: Uuid)
        -> Result<Option<ProfileWithOwner>, StoreError>;

    /// 모든 프로필을 소유자 요약과 함께 조회합니다.
    async fn list_with_owners(&self) -> Result<Vec<ProfileWithOwner>, StoreError>;

    /// 프로필을 삽입합니다.
    async fn insert(&self, profile: Profile) -> Result<Profile, StoreError>;

    /// 프로필 문서 전체를 저장합니다.
    async fn update(&self, profile: Profile) -> Result<Profile, StoreError>;

    /// 소유 사용자 ID로 프로필을 삭제합니다.
    ///
    /// # Returns
    ///
    /// 삭제된 프로필이 있었으면 `true`.
    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, StoreError>;
}

// =============================================================================
// PostStore
// =============================================================================

/// 게시글 저장소 계약.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// 게시글을 삽입합니다.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// 모든 게시글을 최신순으로 조회합니다.
    async fn list_recent(&self) -> Result<Vec<Post>, StoreError>;

    /// ID로 게시글을 조회합니다.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// 게시글 문서 전체를 저장합니다.
    async fn update(&self, post: Post) -> Result<Post, StoreError>;

    /// ID로 게시글을 삭제하고 삭제된 레코드를 반환합니다.
    async fn delete(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
}
