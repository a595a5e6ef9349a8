//! 프로필 endpoint.
//!
//! 프로필 CRUD와 경력/학력 리스트 조작을 제공합니다. 모든 라우트는 베어러
//! 토큰을 요구합니다.
//!
//! 조회 라우트는 소유 사용자 요약(이름, 이메일, 아바타)을 함께 반환하고,
//! 생성/수정은 사용자당 하나의 프로필에 대한 upsert로 동작합니다.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use devlink_core::{
    parse_skills, Education, Experience, Profile, ProfileFields, ProfileWithOwner, SocialLinks,
};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::state::AppState;

/// 프로필 생성/수정 요청.
///
/// `status`와 `skills` 외의 필드는 선택이며, 빈 문자열은 미제공과 동일하게
/// 취급됩니다. 소셜 링크는 요청마다 통째로 재구성됩니다.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    /// 현재 상태
    #[validate(
        required(message = "Please define your status"),
        length(min = 1, message = "Please define your status")
    )]
    pub status: Option<String>,

    /// 쉼표로 구분된 기술 목록
    #[validate(
        required(message = "Skills are required"),
        length(min = 1, message = "Skills are required")
    )]
    pub skills: Option<String>,

    /// 회사
    pub company: Option<String>,
    /// 웹사이트
    pub website: Option<String>,
    /// 지역
    pub location: Option<String>,
    /// 자기소개
    pub bio: Option<String>,
    /// GitHub 사용자명
    #[serde(rename = "githubUserName")]
    pub github_user_name: Option<String>,
    /// YouTube 채널
    pub youtube: Option<String>,
    /// Twitter 핸들
    pub twitter: Option<String>,
    /// Facebook 페이지
    pub facebook: Option<String>,
    /// LinkedIn 프로필
    pub linkedin: Option<String>,
    /// Instagram 핸들
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    /// 요청을 적용 가능한 필드 묶음으로 변환합니다.
    fn into_fields(self) -> ProfileFields {
        ProfileFields {
            status: self.status.unwrap_or_default(),
            skills: parse_skills(&self.skills.unwrap_or_default()),
            company: non_empty(self.company),
            website: non_empty(self.website),
            location: non_empty(self.location),
            bio: non_empty(self.bio),
            github_user_name: non_empty(self.github_user_name),
            social: SocialLinks {
                youtube: non_empty(self.youtube),
                twitter: non_empty(self.twitter),
                facebook: non_empty(self.facebook),
                linkedin: non_empty(self.linkedin),
                instagram: non_empty(self.instagram),
            },
        }
    }
}

/// 경력 추가 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExperienceRequest {
    /// 직함
    #[validate(
        required(message = "Enter title"),
        length(min = 1, message = "Enter title")
    )]
    pub title: Option<String>,

    /// 회사
    #[validate(
        required(message = "Enter company"),
        length(min = 1, message = "Enter company")
    )]
    pub company: Option<String>,

    /// 근무 지역
    #[validate(
        required(message = "Enter location"),
        length(min = 1, message = "Enter location")
    )]
    pub location: Option<String>,

    /// 시작일
    #[validate(required(message = "Enter from date"))]
    pub from: Option<NaiveDate>,

    /// 종료일
    pub to: Option<NaiveDate>,

    /// 재직 중 여부
    #[serde(default)]
    pub current: bool,

    /// 설명
    pub description: Option<String>,
}

/// 학력 추가 요청.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEducationRequest {
    /// 학교
    #[validate(
        required(message = "Enter school"),
        length(min = 1, message = "Enter school")
    )]
    pub school: Option<String>,

    /// 학위
    #[validate(
        required(message = "Enter degree"),
        length(min = 1, message = "Enter degree")
    )]
    pub degree: Option<String>,

    /// 전공
    #[serde(rename = "fieldOfStudy")]
    #[validate(
        required(message = "Enter fieldOfStudy"),
        length(min = 1, message = "Enter fieldOfStudy")
    )]
    pub field_of_study: Option<String>,

    /// 시작일
    #[validate(required(message = "Enter from date"))]
    pub from: Option<NaiveDate>,

    /// 종료일
    pub to: Option<NaiveDate>,

    /// 재학 중 여부
    #[serde(default)]
    pub current: bool,

    /// 설명
    pub description: Option<String>,
}

/// 빈 문자열을 미제공으로 정규화합니다.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 호출자의 프로필을 조회합니다. 없으면 주어진 문구로 거부합니다.
async fn find_own_profile(
    state: &AppState,
    user_id: Uuid,
    missing_msg: &str,
) -> Result<Profile, ApiError> {
    state
        .profiles()?
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(missing_msg))
}

/// 내 프로필 조회.
///
/// GET /api/profile/me
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "profiles",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "소유자 요약을 포함한 프로필", body = ProfileWithOwner),
        (status = 400, description = "프로필 없음", body = ErrorBody),
        (status = 401, description = "토큰 없음 또는 무효", body = ErrorBody)
    )
)]
pub async fn my_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ProfileWithOwner>> {
    let profile = state
        .profiles()?
        .find_with_owner(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("There is no profile for this user"))?;

    Ok(Json(profile))
}

/// 프로필 생성 또는 수정.
///
/// 기존 프로필이 있으면 제공된 필드만 반영하고, 없으면 새로 만듭니다.
///
/// POST /api/profile
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profiles",
    security(("bearer_token" = [])),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "저장된 프로필", body = Profile),
        (status = 400, description = "검증 실패", body = ErrorBody)
    )
)]
pub async fn upsert_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<UpsertProfileRequest>,
) -> ApiResult<Json<Profile>> {
    req.validate()?;
    let fields = req.into_fields();

    let profiles = state.profiles()?;
    let profile = match profiles.find_by_user_id(user_id).await? {
        Some(mut profile) => {
            profile.apply_fields(fields);
            profiles.update(profile).await?
        }
        None => profiles.insert(Profile::new(user_id, fields)).await?,
    };

    info!(user_id = %user_id, "Profile saved");
    Ok(Json(profile))
}

/// 전체 프로필 목록 조회.
///
/// GET /api/profile/profiles
#[utoipa::path(
    get,
    path = "/api/profile/profiles",
    tag = "profiles",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "소유자 요약을 포함한 프로필 목록", body = Vec<ProfileWithOwner>),
        (status = 401, description = "토큰 없음 또는 무효", body = ErrorBody)
    )
)]
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ProfileWithOwner>>> {
    debug!("Listing profiles");
    let profiles = state.profiles()?.list_with_owners().await?;
    Ok(Json(profiles))
}

/// 사용자 ID로 프로필 조회.
///
/// GET /api/profile/{id}
#[utoipa::path(
    get,
    path = "/api/profile/{id}",
    tag = "profiles",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "소유 사용자 ID")
    ),
    responses(
        (status = 200, description = "소유자 요약을 포함한 프로필", body = ProfileWithOwner),
        (status = 400, description = "프로필 없음", body = ErrorBody)
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileWithOwner>> {
    // 형식이 깨진 ID는 존재하지 않는 ID와 같은 거부로 수렴한다
    let user_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Profile not found"))?;
    let profile = state
        .profiles()?
        .find_with_owner(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(profile))
}

/// 프로필과 계정 삭제 (본인만).
///
/// DELETE /api/profile/{id}
#[utoipa::path(
    delete,
    path = "/api/profile/{id}",
    tag = "profiles",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "소유 사용자 ID")
    ),
    responses(
        (status = 200, description = "삭제 완료", body = String),
        (status = 400, description = "프로필 없음", body = ErrorBody),
        (status = 401, description = "본인 아님", body = ErrorBody)
    )
)]
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<&'static str>> {
    let target =
        Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Profile not found"))?;

    if target != user_id {
        return Err(ApiError::unauthorized("User not authorized"));
    }

    let profiles = state.profiles()?;
    if !profiles.delete_by_user_id(target).await? {
        return Err(ApiError::not_found("Profile not found"));
    }
    state.users()?.delete(target).await?;

    info!(user_id = %target, "Profile and account deleted");
    Ok(Json("Deleted"))
}

/// 경력 항목 추가 (맨 앞).
///
/// PUT /api/profile/experience
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    tag = "profiles",
    security(("bearer_token" = [])),
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "변경된 프로필", body = Profile),
        (status = 400, description = "검증 실패 또는 프로필 없음", body = ErrorBody)
    )
)]
pub async fn add_experience(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<AddExperienceRequest>,
) -> ApiResult<Json<Profile>> {
    req.validate()?;

    let mut profile = find_own_profile(&state, user_id, "Profile not found").await?;

    let from = req
        .from
        .ok_or_else(|| ApiError::validation("Enter from date"))?;
    let mut entry = Experience::new(
        req.title.unwrap_or_default(),
        req.company.unwrap_or_default(),
        req.location.unwrap_or_default(),
        from,
    );
    entry.to = req.to;
    entry.current = req.current;
    entry.description = req.description;

    profile.add_experience(entry);
    let profile = state.profiles()?.update(profile).await?;

    info!(user_id = %user_id, "Experience added");
    Ok(Json(profile))
}

/// 경력 항목 삭제.
///
/// DELETE /api/profile/experience/{id}
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{id}",
    tag = "profiles",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "경력 항목 ID")
    ),
    responses(
        (status = 200, description = "변경된 프로필", body = Profile),
        (status = 400, description = "프로필 또는 항목 없음", body = ErrorBody)
    )
)]
pub async fn delete_experience(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Profile>> {
    let mut profile = find_own_profile(&state, user_id, "Profile not found").await?;

    let entry_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Experience not found"))?;
    profile
        .remove_experience(entry_id)
        .ok_or_else(|| ApiError::not_found("Experience not found"))?;

    let profile = state.profiles()?.update(profile).await?;

    info!(user_id = %user_id, "Experience removed");
    Ok(Json(profile))
}

/// 학력 항목 추가 (맨 앞).
///
/// PUT /api/profile/education
#[utoipa::path(
    put,
    path = "/api/profile/education",
    tag = "profiles",
    security(("bearer_token" = [])),
    request_body = AddEducationRequest,
    responses(
        (status = 200, description = "변경된 프로필", body = Profile),
        (status = 400, description = "검증 실패 또는 프로필 없음", body = ErrorBody)
    )
)]
pub async fn add_education(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<AddEducationRequest>,
) -> ApiResult<Json<Profile>> {
    req.validate()?;

    let mut profile = find_own_profile(&state, user_id, "Profile not found").await?;

    let from = req
        .from
        .ok_or_else(|| ApiError::validation("Enter from date"))?;
    let mut entry = Education::new(
        req.school.unwrap_or_default(),
        req.degree.unwrap_or_default(),
        req.field_of_study.unwrap_or_default(),
        from,
    );
    entry.to = req.to;
    entry.current = req.current;
    entry.description = req.description;

    profile.add_education(entry);
    let profile = state.profiles()?.update(profile).await?;

    info!(user_id = %user_id, "Education added");
    Ok(Json(profile))
}

/// 학력 항목 삭제.
///
/// DELETE /api/profile/education/{id}
#[utoipa::path(
    delete,
    path = "/api/profile/education/{id}",
    tag = "profiles",
    security(("bearer_token" = [])),
    params(
        ("id" = String, Path, description = "학력 항목 ID")
    ),
    responses(
        (status = 200, description = "변경된 프로필", body = Profile),
        (status = 400, description = "프로필 또는 항목 없음", body = ErrorBody)
    )
)]
pub async fn delete_education(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Profile>> {
    let mut profile = find_own_profile(&state, user_id, "Profile not found").await?;

    let entry_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Education not found"))?;
    profile
        .remove_education(entry_id)
        .ok_or_else(|| ApiError::not_found("Education not found"))?;

    let profile = state.profiles()?.update(profile).await?;

    info!(user_id = %user_id, "Education removed");
    Ok(Json(profile))
}

/// 프로필 라우터 생성.
pub fn profiles_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(upsert_profile))
        .route("/me", get(my_profile))
        .route("/profiles", get(list_profiles))
        .route("/{id}", get(get_profile).delete(delete_profile))
        .route("/experience", put(add_experience))
        .route("/experience/{id}", delete(delete_experience))
        .route("/education", put(add_education))
        .route("/education/{id}", delete(delete_education))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::state::create_test_state;
    use devlink_core::User;

    fn test_app() -> (Arc<AppState>, Router) {
        let state = Arc::new(create_test_state());
        let app = Router::new()
            .nest("/api/profile", profiles_router())
            .with_state(state.clone());
        (state, app)
    }

    async fn seed_user(state: &AppState, name: &str, email: &str) -> (User, String) {
        let user = state
            .users()
            .unwrap()
            .insert(User::new(name, email, "hash"))
            .await
            .unwrap();
        let token = state.token_keys.issue(user.id).unwrap();
        (user, token)
    }

    fn authed(method: &str, uri: &str, token: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", format!("Bearer {token}"));
        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn upsert(app: &Router, token: &str, body: serde_json::Value) -> serde_json::Value {
        let response = app
            .clone()
            .oneshot(authed("POST", "/api/profile", token, Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_upsert_creates_then_merges() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let created = upsert(
            &app,
            &token,
            json!({"status": "Developer", "skills": "js, rust ,  go", "company": "Acme"}),
        )
        .await;
        assert_eq!(created["status"], "Developer");
        assert_eq!(created["skills"], json!(["js", "rust", "go"]));
        assert_eq!(created["company"], "Acme");

        // company를 생략해도 기존 값이 유지된다
        let updated = upsert(
            &app,
            &token,
            json!({"status": "Lead Developer", "skills": "rust"}),
        )
        .await;
        assert_eq!(updated["status"], "Lead Developer");
        assert_eq!(updated["company"], "Acme");
        assert_eq!(updated["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_upsert_rebuilds_social_links() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let created = upsert(
            &app,
            &token,
            json!({"status": "Developer", "skills": "rust", "twitter": "@dev"}),
        )
        .await;
        assert_eq!(created["social"]["twitter"], "@dev");

        // 소셜 링크는 요청마다 재구성되므로 생략하면 지워진다
        let updated = upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;
        assert_eq!(updated["social"]["twitter"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_upsert_requires_status_and_skills() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .oneshot(authed("POST", "/api/profile", &token, Some(json!({}))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        // 필드명 순 정렬: skills, status
        assert_eq!(body["errors"][0]["msg"], "Skills are required");
        assert_eq!(body["errors"][1]["msg"], "Please define your status");
    }

    #[tokio::test]
    async fn test_my_profile_joins_owner() {
        let (state, app) = test_app();
        let (user, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .clone()
            .oneshot(authed("GET", "/api/profile/me", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "There is no profile for this user"
        );

        upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;

        let response = app
            .oneshot(authed("GET", "/api/profile/me", &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "Developer");
        assert_eq!(body["user"]["id"], user.id.to_string());
        assert_eq!(body["user"]["name"], "Jane");
        assert_eq!(body["user"]["avatar"], "J");
    }

    #[tokio::test]
    async fn test_list_profiles_includes_all_owners() {
        let (state, app) = test_app();
        let (_, jane) = seed_user(&state, "Jane", "jane@example.com").await;
        let (_, kim) = seed_user(&state, "Kim", "kim@example.com").await;

        upsert(&app, &jane, json!({"status": "Developer", "skills": "rust"})).await;
        upsert(&app, &kim, json!({"status": "Designer", "skills": "figma"})).await;

        let response = app
            .oneshot(authed("GET", "/api/profile/profiles", &jane, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["user"]["name"].is_string()));
    }

    #[tokio::test]
    async fn test_get_profile_by_user_id() {
        let (state, app) = test_app();
        let (user, token) = seed_user(&state, "Jane", "jane@example.com").await;
        upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;

        let response = app
            .clone()
            .oneshot(authed("GET", &format!("/api/profile/{}", user.id), &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["user"]["email"], "jane@example.com");

        for bad in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let response = app
                .clone()
                .oneshot(authed("GET", &format!("/api/profile/{bad}"), &token, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await["errors"][0]["msg"],
                "Profile not found"
            );
        }
    }

    #[tokio::test]
    async fn test_delete_profile_is_self_only() {
        let (state, app) = test_app();
        let (jane, jane_token) = seed_user(&state, "Jane", "jane@example.com").await;
        let (_, kim_token) = seed_user(&state, "Kim", "kim@example.com").await;
        upsert(&app, &jane_token, json!({"status": "Developer", "skills": "rust"})).await;

        // 남의 프로필은 지울 수 없다
        let response = app
            .clone()
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/{}", jane.id),
                &kim_token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "User not authorized"
        );

        let response = app
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/{}", jane.id),
                &jane_token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!("Deleted"));

        // 프로필과 계정이 함께 사라진다
        assert!(state
            .profiles()
            .unwrap()
            .find_by_user_id(jane.id)
            .await
            .unwrap()
            .is_none());
        assert!(state
            .users()
            .unwrap()
            .find_by_id(jane.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_profile_without_profile() {
        let (state, app) = test_app();
        let (user, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/{}", user.id),
                &token,
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "Profile not found"
        );
    }

    #[tokio::test]
    async fn test_add_experience_prepends() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;
        upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;

        let first = json!({
            "title": "Developer", "company": "Acme", "location": "Seoul",
            "from": "2019-01-01", "to": "2021-05-31"
        });
        let second = json!({
            "title": "Lead", "company": "Acme", "location": "Seoul",
            "from": "2021-06-01", "current": true
        });

        for body in [first, second] {
            let response = app
                .clone()
                .oneshot(authed("PUT", "/api/profile/experience", &token, Some(body)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let profile = find_own_profile(&state, claims_of(&state, &token), "missing")
            .await
            .unwrap();
        assert_eq!(profile.experience[0].title, "Lead");
        assert!(profile.experience[0].current);
        assert_eq!(profile.experience[1].title, "Developer");
    }

    #[tokio::test]
    async fn test_add_experience_validation_messages() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .oneshot(authed("PUT", "/api/profile/experience", &token, Some(json!({}))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        // 필드명 순 정렬: company, from, location, title
        assert_eq!(body["errors"][0]["msg"], "Enter company");
        assert_eq!(body["errors"][1]["msg"], "Enter from date");
        assert_eq!(body["errors"][2]["msg"], "Enter location");
        assert_eq!(body["errors"][3]["msg"], "Enter title");
    }

    #[tokio::test]
    async fn test_experience_requires_profile() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .oneshot(authed(
                "PUT",
                "/api/profile/experience",
                &token,
                Some(json!({
                    "title": "Developer", "company": "Acme",
                    "location": "Seoul", "from": "2019-01-01"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "Profile not found"
        );
    }

    #[tokio::test]
    async fn test_delete_experience_by_id() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;
        upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;

        let response = app
            .clone()
            .oneshot(authed(
                "PUT",
                "/api/profile/experience",
                &token,
                Some(json!({
                    "title": "Developer", "company": "Acme",
                    "location": "Seoul", "from": "2019-01-01"
                })),
            ))
            .await
            .unwrap();
        let entry_id = body_json(response).await["experience"][0]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/experience/{}", Uuid::new_v4()),
                &token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "Experience not found"
        );

        let response = app
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/experience/{entry_id}"),
                &token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["experience"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_education_add_and_delete() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;
        upsert(&app, &token, json!({"status": "Developer", "skills": "rust"})).await;

        let response = app
            .clone()
            .oneshot(authed(
                "PUT",
                "/api/profile/education",
                &token,
                Some(json!({
                    "school": "SNU", "degree": "BSc",
                    "fieldOfStudy": "CS", "from": "2015-03-01"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["education"][0]["school"], "SNU");
        assert_eq!(body["education"][0]["fieldOfStudy"], "CS");
        let entry_id = body["education"][0]["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/education/{}", Uuid::new_v4()),
                &token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(
            body_json(response).await["errors"][0]["msg"],
            "Education not found"
        );

        let response = app
            .oneshot(authed(
                "DELETE",
                &format!("/api/profile/education/{entry_id}"),
                &token,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_json(response).await["education"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_education_missing_fields_messages() {
        let (state, app) = test_app();
        let (_, token) = seed_user(&state, "Jane", "jane@example.com").await;

        let response = app
            .oneshot(authed(
                "PUT",
                "/api/profile/education",
                &token,
                Some(json!({"school": "SNU"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        // 필드명 순 정렬: degree, field_of_study, from
        assert_eq!(body["errors"][0]["msg"], "Enter degree");
        assert_eq!(body["errors"][1]["msg"], "Enter fieldOfStudy");
        assert_eq!(body["errors"][2]["msg"], "Enter from date");
    }

    fn claims_of(state: &AppState, token: &str) -> Uuid {
        state.token_keys.decode(token).unwrap().user.id
    }
}
