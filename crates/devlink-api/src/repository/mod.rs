//! Repository pattern for database operations.
//!
//! 데이터베이스 접근 로직을 라우트 핸들러에서 분리하여 관리합니다.
//! 각 모듈은 devlink-core의 저장소 계약을 PostgreSQL로 구현하며,
//! 테스트용 인메모리 구현은 `memory` 모듈에 있습니다.

pub mod posts;
pub mod profiles;
pub mod users;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use posts::PgPostStore;
pub use profiles::PgProfileStore;
pub use users::PgUserStore;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::{MemoryPostStore, MemoryProfileStore, MemoryUserStore};

use devlink_core::StoreError;

/// sqlx 에러를 저장소 계약 에러로 변환합니다.
///
/// 유일 제약 위반만 구분하고 나머지는 백엔드 에러로 수렴합니다.
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateKey;
        }
    }
    StoreError::Database(e.to_string())
}
