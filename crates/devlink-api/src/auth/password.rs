//! 비밀번호 해싱 유틸리티.
//!
//! Argon2 기반 비밀번호 해싱 및 검증. 해시는 솔트가 내장된 PHC 문자열로
//! 저장되므로 별도의 솔트 보관이 필요 없습니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 비밀번호 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("비밀번호 해싱 실패")]
    HashingFailed,
}

/// 비밀번호 해싱.
///
/// Argon2id 알고리즘을 사용하며 호출마다 새 랜덤 솔트를 생성합니다.
/// 같은 비밀번호라도 호출마다 다른 해시가 나옵니다.
///
/// # Returns
///
/// PHC 형식의 해시 문자열 (솔트 포함)
///
/// # Example
///
/// ```rust,ignore
/// let hash = hash_password("my_secure_password").unwrap();
/// // "$argon2id$v=19$m=19456,t=2,p=1$..."
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// 비밀번호 검증.
///
/// 저장된 해시에 내장된 솔트로 재계산하여 상수 시간 비교합니다.
/// 저장된 해시가 손상되었거나 형식이 다르면 에러 대신 불일치로 처리되어
/// 호출자의 거부 경로를 우회하지 않습니다.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// 디스패치 경로 밖에서 비밀번호를 해싱합니다.
///
/// Argon2는 CPU 집약적이므로 블로킹 풀에서 실행해 다른 요청의 처리를
/// 막지 않습니다.
pub async fn hash_password_async(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|_| PasswordError::HashingFailed)?
}

/// 디스패치 경로 밖에서 비밀번호를 검증합니다.
///
/// 블로킹 풀 실패를 포함한 모든 실패는 불일치로 처리됩니다.
pub async fn verify_password_async(password: String, hash: String) -> bool {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .unwrap_or(false)
}
