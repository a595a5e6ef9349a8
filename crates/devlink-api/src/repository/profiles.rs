//! Profile Repository
//!
//! 프로필 관련 데이터베이스 연산을 담당합니다. 경력/학력/소셜 링크는
//! JSONB 컬럼에 내장 문서로 저장되며 문서 전체 저장으로 갱신됩니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use devlink_core::{
    Education, Experience, Profile, ProfileOwner, ProfileStore, ProfileWithOwner, SocialLinks,
    StoreError,
};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::map_sqlx_error;

// ================================================================================================
// Records
// ================================================================================================

/// 프로필 행 레코드. JSONB 컬럼을 도메인 타입으로 풀어냅니다.
#[derive(Debug, Clone, FromRow)]
struct ProfileRecord {
    id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: Json<Vec<String>>,
    bio: Option<String>,
    github_user_name: Option<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
}

impl From<ProfileRecord> for Profile {
    fn from(r: ProfileRecord) -> Self {
        Profile {
            id: r.id,
            user_id: r.user_id,
            company: r.company,
            website: r.website,
            location: r.location,
            status: r.status,
            skills: r.skills.0,
            bio: r.bio,
            github_user_name: r.github_user_name,
            social: r.social.0,
            experience: r.experience.0,
            education: r.education.0,
            created_at: r.created_at,
        }
    }
}

/// 프로필 + 소유자 요약 조인 레코드.
#[derive(Debug, Clone, FromRow)]
struct ProfileWithOwnerRecord {
    id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: Json<Vec<String>>,
    bio: Option<String>,
    github_user_name: Option<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
    owner_id: Uuid,
    owner_name: String,
    owner_email: String,
    owner_avatar: Option<String>,
}

impl From<ProfileWithOwnerRecord> for ProfileWithOwner {
    fn from(r: ProfileWithOwnerRecord) -> Self {
        ProfileWithOwner {
            profile: Profile {
                id: r.id,
                user_id: r.user_id,
                company: r.company,
                website: r.website,
                location: r.location,
                status: r.status,
                skills: r.skills.0,
                bio: r.bio,
                github_user_name: r.github_user_name,
                social: r.social.0,
                experience: r.experience.0,
                education: r.education.0,
                created_at: r.created_at,
            },
            user: ProfileOwner {
                id: r.owner_id,
                name: r.owner_name,
                email: r.owner_email,
                avatar: r.owner_avatar,
            },
        }
    }
}

/// 프로필 + 소유자 조인 SELECT 목록.
const PROFILE_WITH_OWNER_COLUMNS: &str = r#"
    p.id, p.user_id, p.company, p.website, p.location, p.status, p.skills,
    p.bio, p.github_user_name, p.social, p.experience, p.education, p.created_at,
    u.id AS owner_id, u.name AS owner_name, u.email AS owner_email, u.avatar AS owner_avatar
"#;

// ================================================================================================
// Repository
// ================================================================================================

/// PostgreSQL 프로필 저장소.
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, StoreError> {
        let record =
            sqlx::query_as::<_, ProfileRecord>("SELECT * FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(record.map(Profile::from))
    }

    async fn find_with_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileWithOwner>, StoreError> {
        let record = sqlx::query_as::<_, ProfileWithOwnerRecord>(&format!(
            r#"
            SELECT {PROFILE_WITH_OWNER_COLUMNS}
            FROM profiles p
            INNER JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1
            "#,
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.map(ProfileWithOwner::from))
    }

    async fn list_with_owners(&self) -> Result<Vec<ProfileWithOwner>, StoreError> {
        let records = sqlx::query_as::<_, ProfileWithOwnerRecord>(&format!(
            r#"
            SELECT {PROFILE_WITH_OWNER_COLUMNS}
            FROM profiles p
            INNER JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(records.into_iter().map(ProfileWithOwner::from).collect())
    }

    async fn insert(&self, profile: Profile) -> Result<Profile, StoreError> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profiles
                (id, user_id, company, website, location, status, skills, bio,
                 github_user_name, social, experience, education, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.status)
        .bind(Json(&profile.skills))
        .bind(&profile.bio)
        .bind(&profile.github_user_name)
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.into())
    }

    async fn update(&self, profile: Profile) -> Result<Profile, StoreError> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            UPDATE profiles
            SET company = $2, website = $3, location = $4, status = $5, skills = $6,
                bio = $7, github_user_name = $8, social = $9, experience = $10, education = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.status)
        .bind(Json(&profile.skills))
        .bind(&profile.bio)
        .bind(&profile.github_user_name)
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.into())
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
