//! 개발자 프로필.
//!
//! 이 모듈은 프로필과 내장 리스트 타입을 정의합니다:
//! - `Profile` - 사용자당 하나의 프로필
//! - `Experience` / `Education` - 최신순으로 유지되는 내장 경력/학력 항목
//! - `SocialLinks` - 소셜 링크 묶음
//!
//! 내장 리스트 변경은 모두 "인덱스를 찾고, 없으면 실패" 연산으로 표현됩니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 개발자 프로필.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Profile {
    /// 프로필 ID
    pub id: Uuid,
    /// 소유 사용자 ID (사용자당 하나)
    pub user_id: Uuid,
    /// 회사
    pub company: Option<String>,
    /// 웹사이트
    pub website: Option<String>,
    /// 지역
    pub location: Option<String>,
    /// 현재 상태 (예: "Senior Developer")
    pub status: String,
    /// 기술 목록
    pub skills: Vec<String>,
    /// 자기소개
    pub bio: Option<String>,
    /// GitHub 사용자명
    #[serde(rename = "githubUserName")]
    pub github_user_name: Option<String>,
    /// 소셜 링크
    #[serde(default)]
    pub social: SocialLinks,
    /// 경력 항목 (최신순)
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// 학력 항목 (최신순)
    #[serde(default)]
    pub education: Vec<Education>,
    /// 생성 타임스탬프
    pub created_at: DateTime<Utc>,
}

/// 프로필 생성/수정 시 적용되는 필드 묶음.
///
/// `status`와 `skills`는 항상 제공되며, 나머지는 제공된 경우에만 기존 값을
/// 덮어씁니다. `social`은 매번 통째로 교체됩니다.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    /// 현재 상태
    pub status: String,
    /// 기술 목록
    pub skills: Vec<String>,
    /// 회사
    pub company: Option<String>,
    /// 웹사이트
    pub website: Option<String>,
    /// 지역
    pub location: Option<String>,
    /// 자기소개
    pub bio: Option<String>,
    /// GitHub 사용자명
    pub github_user_name: Option<String>,
    /// 소셜 링크 (통째로 교체)
    pub social: SocialLinks,
}

impl Profile {
    /// 필드 묶음으로 새 프로필을 생성합니다.
    pub fn new(user_id: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skills: fields.skills,
            bio: fields.bio,
            github_user_name: fields.github_user_name,
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 필드 묶음을 기존 프로필에 병합합니다.
    ///
    /// 제공되지 않은 선택 필드는 기존 값을 유지합니다.
    pub fn apply_fields(&mut self, fields: ProfileFields) {
        self.status = fields.status;
        self.skills = fields.skills;
        self.social = fields.social;
        if fields.company.is_some() {
            self.company = fields.company;
        }
        if fields.website.is_some() {
            self.website = fields.website;
        }
        if fields.location.is_some() {
            self.location = fields.location;
        }
        if fields.bio.is_some() {
            self.bio = fields.bio;
        }
        if fields.github_user_name.is_some() {
            self.github_user_name = fields.github_user_name;
        }
    }

    /// 경력 항목을 맨 앞에 추가합니다.
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// ID로 경력 항목을 찾아 제거합니다. 없으면 `None`.
    pub fn remove_experience(&mut self, experience_id: Uuid) -> Option<Experience> {
        let index = self
            .experience
            .iter()
            .position(|e| e.id == experience_id)?;
        Some(self.experience.remove(index))
    }

    /// 학력 항목을 맨 앞에 추가합니다.
    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// ID로 학력 항목을 찾아 제거합니다. 없으면 `None`.
    pub fn remove_education(&mut self, education_id: Uuid) -> Option<Education> {
        let index = self.education.iter().position(|e| e.id == education_id)?;
        Some(self.education.remove(index))
    }
}

/// 쉼표로 구분된 기술 문자열을 목록으로 변환합니다.
///
/// 각 항목의 앞뒤 공백은 제거됩니다.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// 경력 항목.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Experience {
    /// 항목 ID
    pub id: Uuid,
    /// 직함
    pub title: String,
    /// 회사
    pub company: String,
    /// 근무 지역
    pub location: String,
    /// 시작일
    pub from: NaiveDate,
    /// 종료일
    pub to: Option<NaiveDate>,
    /// 재직 중 여부
    #[serde(default)]
    pub current: bool,
    /// 설명
    pub description: Option<String>,
}

impl Experience {
    /// 새 경력 항목을 생성합니다.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        from: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            from,
            to: None,
            current: false,
            description: None,
        }
    }
}

/// 학력 항목.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Education {
    /// 항목 ID
    pub id: Uuid,
    /// 학교
    pub school: String,
    /// 학위
    pub degree: String,
    /// 전공
    #[serde(rename = "fieldOfStudy")]
    pub field_of_study: String,
    /// 시작일
    pub from: NaiveDate,
    /// 종료일
    pub to: Option<NaiveDate>,
    /// 재학 중 여부
    #[serde(default)]
    pub current: bool,
    /// 설명
    pub description: Option<String>,
}

impl Education {
    /// 새 학력 항목을 생성합니다.
    pub fn new(
        school: impl Into<String>,
        degree: impl Into<String>,
        field_of_study: impl Into<String>,
        from: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: school.into(),
            degree: degree.into(),
            field_of_study: field_of_study.into(),
            from,
            to: None,
            current: false,
            description: None,
        }
    }
}

/// 소셜 링크 묶음.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SocialLinks {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ProfileFields {
        ProfileFields {
            status: "Senior Developer".to_string(),
            skills: vec!["rust".to_string(), "sql".to_string()],
            company: Some("Acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_skills_trims_whitespace() {
        let skills = parse_skills("js, rust ,  go");
        assert_eq!(skills, vec!["js", "rust", "go"]);
    }

    #[test]
    fn test_apply_fields_keeps_absent_optionals() {
        let mut profile = Profile::new(Uuid::new_v4(), sample_fields());

        let update = ProfileFields {
            status: "Lead Developer".to_string(),
            skills: vec!["rust".to_string()],
            ..Default::default()
        };
        profile.apply_fields(update);

        assert_eq!(profile.status, "Lead Developer");
        // company는 이번 요청에 없었으므로 유지
        assert_eq!(profile.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_apply_fields_replaces_social_wholesale() {
        let mut fields = sample_fields();
        fields.social.twitter = Some("@dev".to_string());
        let mut profile = Profile::new(Uuid::new_v4(), fields);

        profile.apply_fields(sample_fields());
        assert!(profile.social.twitter.is_none());
    }

    #[test]
    fn test_experience_prepended_and_removed_by_id() {
        let mut profile = Profile::new(Uuid::new_v4(), sample_fields());
        let first = Experience::new(
            "Developer",
            "Acme",
            "Seoul",
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
        );
        let second = Experience::new(
            "Lead",
            "Acme",
            "Seoul",
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
        );
        let second_id = second.id;

        profile.add_experience(first);
        profile.add_experience(second);
        assert_eq!(profile.experience[0].id, second_id);

        let removed = profile.remove_experience(second_id).unwrap();
        assert_eq!(removed.title, "Lead");
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_remove_education_unknown_id_is_none() {
        let mut profile = Profile::new(Uuid::new_v4(), sample_fields());
        assert!(profile.remove_education(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_education_wire_field_name() {
        let entry = Education::new(
            "SNU",
            "BSc",
            "CS",
            NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("fieldOfStudy"));
    }
}
