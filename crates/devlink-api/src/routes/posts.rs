//! 게시글 endpoint.
//!
//! 게시글 CRUD와 좋아요/댓글 조작을 제공합니다. 모든 라우트는 베어러
//! 토큰을 요구하며, 삭제는 작성자 본인만 가능합니다.
//!
//! 작성자 이름과 아바타는 작성 시점의 사용자 레코드에서 비정규화되어
//! 게시글과 댓글에 저장됩니다.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use devlink_core::{Comment, Post, PostStore, User};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::state::AppState;

/// 게시글/댓글 본문 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TextRequest {
    /// 본문
    #[validate(
        required(message = "Enter text"),
        length(min = 1, message = "Enter text")
    )]
    pub text: Option<String>,
}

/// 경로의 게시글 ID를 해석해 조회합니다.
///
/// 형식이 깨진 ID는 존재하지 않는 ID와 같은 거부로 수렴합니다.
async fn find_post(posts: &dyn PostStore, raw_id: &str) -> Result<Post, ApiError> {
    let id =
        Uuid::parse_str(raw_id).map_err(|_| ApiError::not_found("Post not found"))?;
    posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))
}

/// 토큰이 가리키는 사용자 레코드를 조회합니다.
///
/// 비정규화할 이름/아바타의 원본이 필요한 작성 경로에서 사용합니다.
async fn find_author(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
    state
        .users()?
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Invalid Authentication"))
}

/// 게시글 작성.
///
/// POST /api/post
#[utoipa::path(
    post,
    path = "/api/post",
    tag = "posts",
    security(("bearer_token" = [])),
    request_body = TextRequest,
    responses(
        (status = 201, description = "작성된 게시글", body = Post),
        (status = 400, description = "본문 누락", body = ErrorBody),
        (status = 401, description = "토큰 없음 또는 무효", body = ErrorBody)
    )
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<TextRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    req.validate()?;
    let text = req.text.unwrap_or_default();

    let author = find_author(&state, user_id).await?;
    let post = Post::new(user_id, text, author.name, author.avatar);
    let post = state.posts()?.insert(post).await?;

    info!(post_id = %post.id, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// 게시글 목록 조회 (최신순).
///
/// GET /api/post
#[utoipa::path(
    get,
    path = "/api/post",
    tag = "posts",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "게시글 목록 (최신순)", body = Vec<Post>),
        (status = 401, description = "토큰 없음 또는 무효", body = ErrorBody)
    )
)]
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<Post>>> {
    debug!("Listing posts");
    let posts = state.posts()?.list_recent().await?;
    Ok(Json(posts))
}

/// 게시글 단건 조회.
///
/// GET /api/post/{id}
#[utoipa::path(
    get,
    path = "/api/post/{id}",
    tag = "posts",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "게시글 ID")
    ),
    responses(
        (status = 200, description = "게시글", body = Post),
        (status = 400, description = "게시글 없음", body = ErrorBody)
    )
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Post>> {
    let post = find_post(state.posts()?, &id).await?;
    Ok(Json(post))
}

/// 게시글 삭제 (작성자 본인만).
///
/// DELETE /api/post/{id}
#[utoipa::path(
    delete,
    path = "/api/post/{id}",
    tag = "posts",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "게시글 ID")
    ),
    responses(
        (status = 200, description = "삭제된 게시글", body = Post),
        (status = 400, description = "게시글 없음", body = ErrorBody),
        (status = 401, description = "작성자 아님", body = ErrorBody)
    )
)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Post>> {
    let posts = state.posts()?;
    let post = find_post(posts, &id).await?;

    if post.user_id != user_id {
        return Err(ApiError::unauthorized("User not authorized"));
    }

    // 조회와 삭제 사이에 사라졌으면 조회 실패와 같은 거부
    let deleted = posts
        .delete(post.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    info!(post_id = %deleted.id, "Post deleted");
    Ok(Json(deleted))
}

/// 좋아요 토글.
///
/// 이미 누른 사용자는 취소되고, 아니면 목록 맨 앞에 추가됩니다.
///
/// PUT /api/post/like/{id}
#[utoipa::path(
    put,
    path = "/api/post/like/{id}",
    tag = "posts",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "게시글 ID")
    ),
    responses(
        (status = 200, description = "변경된 게시글", body = Post),
        (status = 400, description = "게시글 없음", body = ErrorBody)
    )
)]
pub async fn toggle_like(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Post>> {
    let posts = state.posts()?;
    let mut post = find_post(posts, &id).await?;

    let liked = post.toggle_like(user_id);
    let post = posts.update(post).await?;

    debug!(post_id = %post.id, liked, "Like toggled");
    Ok(Json(post))
}

/// 댓글 작성.
///
/// POST /api/post/comment/{id}
#[utoipa::path(
    post,
    path = "/api/post/comment/{id}",
    tag = "posts",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "게시글 ID")
    ),
    request_body = TextRequest,
    responses(
        (status = 201, description = "변경된 댓글 목록 (최신순)", body = Vec<Comment>),
        (status = 400, description = "본문 누락 또는 게시글 없음", body = ErrorBody)
    )
)]
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<TextRequest>,
) -> ApiResult<(StatusCode, Json<Vec<Comment>>)> {
    req.validate()?;
    let text = req.text.unwrap_or_default();

    let author = find_author(&state, user_id).await?;
    let posts = state.posts()?;
    let mut post = find_post(posts, &id).await?;

    post.add_comment(Comment::new(user_id, text, author.name, author.avatar));
    let post = posts.update(post).await?;

    info!(post_id = %post.id, "Comment added");
    Ok((StatusCode::CREATED, Json(post.comments)))
}

/// 댓글 삭제 (댓글 작성자 본인만).
///
/// DELETE /api/post/comment/{id}/{comment_id}
#[utoipa::path(
    delete,
    path = "/api/post/comment/{id}/{comment_id}",
    tag = "posts",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "게시글 ID"),
        ("comment_id" = String, Path, description = "댓글 ID")
    ),
    responses(
        (status = 200, description = "남은 댓글 목록", body = Vec<Comment>),
        (status = 400, description = "게시글 또는 댓글 없음", body = ErrorBody),
        (status = 401, description = "댓글 작성자 아님", body = ErrorBody)
    )
)]
pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Comment>>> {
    let posts = state.posts()?;
    let mut post = find_post(posts, &id).await?;

    let comment_id = Uuid::parse_str(&comment_id)
        .map_err(|_| ApiError::not_found("Comment not found"))?;
    let is_author = post
        .find_comment(comment_id)
        .map(|c| c.user == user_id)
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;

    if !is_author {
        return Err(ApiError::unauthorized("User not authorized"));
    }

    post.remove_comment(comment_id);
    let post = posts.update(post).await?;

    info!(post_id = %post.id, "Comment removed");
    Ok(Json(post.comments))
}

/// 게시글 라우터 생성.
pub fn posts_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_post).get(list_posts))
        .route("/{id}", get(get_post).delete(delete_post))
        .route("/like/{id}", put(toggle_like))
        .route("/comment/{id}", post(add_comment))
        .route("/comment/{id}/{comment_id}", delete(delete_comment))
}
