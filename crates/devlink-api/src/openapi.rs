//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! # 자동 생성 구조
//!
//! 각 라우트 모듈은 자체 스키마를 정의하고, 중앙 `ApiDoc`에서 집계합니다.
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

// ==================== 각 모듈에서 스키마 Import ====================

use crate::error::{ErrorBody, ErrorMessage};
use crate::routes::{
    AddEducationRequest,
    AddExperienceRequest,
    // Health 모듈
    ComponentHealth,
    ComponentStatus,
    HealthResponse,
    // Session 모듈
    LoginRequest,
    // Users 모듈
    RegisterRequest,
    // Posts 모듈
    TextRequest,
    TokenResponse,
    // Profiles 모듈
    UpsertProfileRequest,
};
use devlink_core::{
    Comment, Education, Experience, Like, Post, Profile, ProfileOwner, ProfileWithOwner,
    PublicUser, SocialLinks,
};

// ==================== 보안 스키마 ====================

/// 생성된 문서에 베어러 토큰 보안 스키마를 추가합니다.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

// ==================== OpenAPI 문서 정의 ====================

/// DevLink API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "DevLink API",
        version = "0.1.0",
        description = r#"
# DevLink 개발자 네트워크 REST API

개발자 등록/인증, 프로필 관리, 게시글/댓글/좋아요를 위한 REST API입니다.

## 주요 기능

- **사용자**: 등록, 로그인, 현재 사용자 조회
- **프로필**: 사용자당 하나의 프로필, 경력/학력 관리
- **게시글**: 작성, 조회, 삭제, 좋아요 토글, 댓글

## 인증

`/health`와 등록/로그인을 제외한 모든 엔드포인트는 베어러 토큰 인증이
필요합니다. `Authorization: Bearer <token>` 헤더를 포함하세요.
토큰은 `POST /api/user` (등록) 또는 `POST /api/auth` (로그인)에서 발급됩니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(
            name = "DevLink Team",
            url = "https://github.com/user/devlink"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "users", description = "사용자 - 등록 및 토큰 발급"),
        (name = "session", description = "세션 - 로그인 및 현재 사용자"),
        (name = "posts", description = "게시글 - 작성, 좋아요, 댓글"),
        (name = "profiles", description = "프로필 - 경력 및 학력 관리")
    ),
    // ==================== 스키마 등록 ====================
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Common =====
            ErrorBody,
            ErrorMessage,

            // ===== Users / Session =====
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            PublicUser,

            // ===== Posts =====
            TextRequest,
            Post,
            Comment,
            Like,

            // ===== Profiles =====
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            Profile,
            Experience,
            Education,
            SocialLinks,
            ProfileWithOwner,
            ProfileOwner,
        )
    ),
    // ==================== 경로 등록 ====================
    paths(
        // ===== Health =====
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        // ===== Users / Session =====
        crate::routes::users::register,
        crate::routes::session::current_user,
        crate::routes::session::login,

        // ===== Posts =====
        crate::routes::posts::create_post,
        crate::routes::posts::list_posts,
        crate::routes::posts::get_post,
        crate::routes::posts::delete_post,
        crate::routes::posts::toggle_like,
        crate::routes::posts::add_comment,
        crate::routes::posts::delete_comment,

        // ===== Profiles =====
        crate::routes::profiles::my_profile,
        crate::routes::profiles::upsert_profile,
        crate::routes::profiles::list_profiles,
        crate::routes::profiles::get_profile,
        crate::routes::profiles::delete_profile,
        crate::routes::profiles::add_experience,
        crate::routes::profiles::delete_experience,
        crate::routes::profiles::add_education,
        crate::routes::profiles::delete_education,
    )
)]
pub struct ApiDoc;

// ==================== Swagger UI 라우터 ====================

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

// ==================== 테스트 ====================
