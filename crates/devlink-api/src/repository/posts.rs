//! Post Repository
//!
//! 게시글 관련 데이터베이스 연산을 담당합니다. 좋아요와 댓글은 JSONB
//! 컬럼에 내장 문서로 저장되며 문서 전체 저장으로 갱신됩니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use devlink_core::{Comment, Like, Post, PostStore, StoreError};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::map_sqlx_error;

// ================================================================================================
// Records
// ================================================================================================

/// 게시글 행 레코드. JSONB 컬럼을 도메인 타입으로 풀어냅니다.
#[derive(Debug, Clone, FromRow)]
struct PostRecord {
    id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: Option<String>,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl From<PostRecord> for Post {
    fn from(r: PostRecord) -> Self {
        Post {
            id: r.id,
            user_id: r.user_id,
            text: r.text,
            name: r.name,
            avatar: r.avatar,
            likes: r.likes.0,
            comments: r.comments.0,
            created_at: r.created_at,
        }
    }
}

// ================================================================================================
// Repository
// ================================================================================================

/// PostgreSQL 게시글 저장소.
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let record = sqlx::query_as::<_, PostRecord>(
            r#"
            INSERT INTO posts (id, user_id, text, name, avatar, likes, comments, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(post.id)
        .bind(post.user_id)
        .bind(&post.text)
        .bind(&post.name)
        .bind(&post.avatar)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.into())
    }

    async fn list_recent(&self) -> Result<Vec<Post>, StoreError> {
        let records =
            sqlx::query_as::<_, PostRecord>("SELECT * FROM posts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(records.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let record = sqlx::query_as::<_, PostRecord>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(record.map(Post::from))
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        let record = sqlx::query_as::<_, PostRecord>(
            r#"
            UPDATE posts
            SET text = $2, name = $3, avatar = $4, likes = $5, comments = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(post.id)
        .bind(&post.text)
        .bind(&post.name)
        .bind(&post.avatar)
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(record.into())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let record =
            sqlx::query_as::<_, PostRecord>("DELETE FROM posts WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(record.map(Post::from))
    }
}
