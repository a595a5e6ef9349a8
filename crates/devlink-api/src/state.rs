//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 모든 API 핸들러에서 공유되는 상태를 관리합니다.
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.

use std::sync::Arc;

use axum::extract::FromRef;
use devlink_core::{PostStore, ProfileStore, UserStore};

use crate::auth::TokenKeys;
use crate::error::ApiError;

/// 애플리케이션 공유 상태.
///
/// 이 구조체는 모든 API 핸들러에서 접근할 수 있는 공유 리소스를 포함합니다.
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
///
/// 스토어 필드는 DB 연결 없이 기동하는 저하 모드를 허용하기 위해
/// Option입니다. 저하 모드에서 데이터 라우트는 500으로 응답하고
/// 헬스 체크와 문서는 정상 동작합니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀 (PostgreSQL)
    pub db_pool: Option<sqlx::PgPool>,

    /// 사용자 자격 증명 스토어
    pub user_store: Option<Arc<dyn UserStore>>,

    /// 프로필 스토어
    pub profile_store: Option<Arc<dyn ProfileStore>>,

    /// 게시물 스토어
    pub post_store: Option<Arc<dyn PostStore>>,

    /// 토큰 서명/검증 키 쌍.
    ///
    /// 프로세스 시작 시 설정 시크릿으로부터 한 번 생성됩니다.
    pub token_keys: TokenKeys,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    ///
    /// 스토어는 배선되지 않은 상태로 시작합니다. [`AppState::with_db_pool`]로
    /// 연결하거나 테스트에서 인메모리 스토어를 직접 주입합니다.
    pub fn new(token_keys: TokenKeys) -> Self {
        Self {
            db_pool: None,
            user_store: None,
            profile_store: None,
            post_store: None,
            token_keys,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 데이터베이스 연결 설정.
    ///
    /// 풀이 연결되면 세 스토어 모두 PostgreSQL 구현으로 배선됩니다.
    pub fn with_db_pool(mut self, pool: sqlx::PgPool) -> Self {
        use crate::repository::{PgPostStore, PgProfileStore, PgUserStore};

        self.user_store = Some(Arc::new(PgUserStore::new(pool.clone())));
        self.profile_store = Some(Arc::new(PgProfileStore::new(pool.clone())));
        self.post_store = Some(Arc::new(PgPostStore::new(pool.clone())));
        self.db_pool = Some(pool);
        self
    }

    /// 데이터베이스 연결 여부 확인.
    pub fn has_db_pool(&self) -> bool {
        self.db_pool.is_some()
    }

    /// 스토어 배선 여부 확인.
    pub fn has_stores(&self) -> bool {
        self.user_store.is_some() && self.profile_store.is_some() && self.post_store.is_some()
    }

    /// 서버 기동 후 경과 시간 (초).
    pub fn uptime_secs(&self) -> i64 {
        (chrono::Utc::now() - self.started_at).num_seconds()
    }

    /// 데이터베이스 연결 상태 확인.
    ///
    /// 풀이 배선되지 않았으면 `false`를 반환합니다.
    pub async fn is_db_healthy(&self) -> bool {
        match &self.db_pool {
            Some(pool) => sqlx::query("SELECT 1").execute(pool).await.is_ok(),
            None => false,
        }
    }

    /// 사용자 스토어 접근. 저하 모드에서는 내부 실패를 반환합니다.
    pub fn users(&self) -> Result<&dyn UserStore, ApiError> {
        self.user_store
            .as_deref()
            .ok_or_else(|| ApiError::unexpected("user store not configured"))
    }

    /// 프로필 스토어 접근. 저하 모드에서는 내부 실패를 반환합니다.
    pub fn profiles(&self) -> Result<&dyn ProfileStore, ApiError> {
        self.profile_store
            .as_deref()
            .ok_or_else(|| ApiError::unexpected("profile store not configured"))
    }

    /// 게시물 스토어 접근. 저하 모드에서는 내부 실패를 반환합니다.
    pub fn posts(&self) -> Result<&dyn PostStore, ApiError> {
        self.post_store
            .as_deref()
            .ok_or_else(|| ApiError::unexpected("post store not configured"))
    }
}

impl FromRef<Arc<AppState>> for TokenKeys {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.token_keys.clone()
    }
}

/// 테스트용 AppState 생성 헬퍼.
///
/// 실제 DB 연결 없이 테스트할 수 있는 상태를 생성합니다. 세 스토어
/// 모두 인메모리 구현으로 배선됩니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use crate::repository::{MemoryPostStore, MemoryProfileStore, MemoryUserStore};

    let users = Arc::new(MemoryUserStore::new());

    let mut state = AppState::new(TokenKeys::new("test-secret-key-for-route-testing-32chars"));
    state.user_store = Some(users.clone());
    state.profile_store = Some(Arc::new(MemoryProfileStore::new(users)));
    state.post_store = Some(Arc::new(MemoryPostStore::new()));
    state
}
