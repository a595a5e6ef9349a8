//! 테스트용 인메모리 저장소.
//!
//! DB 없이 라우트를 검증하기 위한 저장소 계약의 인메모리 구현입니다.
//! 유일 제약, 조인 결과, 정렬 순서는 PostgreSQL 구현과 같은 계약을
//! 따릅니다.

use std::sync::Arc;

use async_trait::async_trait;
use devlink_core::{
    Post, PostStore, Profile, ProfileOwner, ProfileStore, ProfileWithOwner, StoreError, User,
    UserStore,
};
use tokio::sync::RwLock;
use uuid::Uuid;

// ================================================================================================
// UserStore
// ================================================================================================

/// 인메모리 사용자 저장소.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateKey);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.users.write().await.retain(|u| u.id != id);
        Ok(())
    }
}

// ================================================================================================
// ProfileStore
// ================================================================================================

/// 인메모리 프로필 저장소.
///
/// 소유자 요약 조회는 SQL의 INNER JOIN과 같은 의미로 동작합니다.
/// 소유 사용자가 없는 프로필은 조인 결과에서 빠집니다.
pub struct MemoryProfileStore {
    profiles: RwLock<Vec<Profile>>,
    users: Arc<dyn UserStore>,
}

impl MemoryProfileStore {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self {
            profiles: RwLock::new(Vec::new()),
            users,
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn find_with_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileWithOwner>, StoreError> {
        let Some(profile) = self.find_by_user_id(user_id).await? else {
            return Ok(None);
        };
        let Some(user) = self.users.find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(ProfileWithOwner {
            profile,
            user: ProfileOwner::from_user(&user),
        }))
    }

    async fn list_with_owners(&self) -> Result<Vec<ProfileWithOwner>, StoreError> {
        let mut profiles = self.profiles.read().await.clone();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut result = Vec::with_capacity(profiles.len());
        for profile in profiles {
            if let Some(user) = self.users.find_by_id(profile.user_id).await? {
                result.push(ProfileWithOwner {
                    profile,
                    user: ProfileOwner::from_user(&user),
                });
            }
        }
        Ok(result)
    }

    async fn insert(&self, profile: Profile) -> Result<Profile, StoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.iter().any(|p| p.user_id == profile.user_id) {
            return Err(StoreError::DuplicateKey);
        }
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update(&self, profile: Profile) -> Result<Profile, StoreError> {
        let mut profiles = self.profiles.write().await;
        let slot = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(|| StoreError::Database("row not found".to_string()))?;
        *slot = profile.clone();
        Ok(profile)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter().position(|p| p.user_id == user_id) {
            Some(index) => {
                profiles.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ================================================================================================
// PostStore
// ================================================================================================

/// 인메모리 게시글 저장소.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn list_recent(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| StoreError::Database("row not found".to_string()))?;
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        match posts.iter().position(|p| p.id == id) {
            Some(index) => Ok(Some(posts.remove(index))),
            None => Ok(None),
        }
    }
}
