//! # DevLink Core
//!
//! 개발자 네트워크의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 백엔드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 사용자 계정 및 자격증명 레코드
//! - 프로필 (경력, 학력, 소셜 링크)
//! - 게시글, 댓글, 좋아요
//! - 저장소 계약 (UserStore 등)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
