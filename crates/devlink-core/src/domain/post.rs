//! 게시글, 댓글, 좋아요.
//!
//! 게시글에는 작성자의 이름과 아바타가 비정규화되어 저장됩니다.
//! 좋아요와 댓글은 내장 리스트로 보관하며, 변경은 "인덱스를 찾고, 없으면
//! 실패" 연산으로 표현됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 게시글.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Post {
    /// 게시글 ID
    pub id: Uuid,
    /// 작성자 ID
    pub user_id: Uuid,
    /// 본문
    pub text: String,
    /// 작성자 표시 이름 (비정규화)
    pub name: String,
    /// 작성자 아바타 (비정규화)
    pub avatar: Option<String>,
    /// 좋아요 목록 (최신순)
    #[serde(default)]
    pub likes: Vec<Like>,
    /// 댓글 목록 (최신순)
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// 생성 타임스탬프
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// 새 게시글을 생성합니다.
    pub fn new(
        user_id: Uuid,
        text: impl Into<String>,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text: text.into(),
            name: name.into(),
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 좋아요를 토글합니다.
    ///
    /// 이미 누른 사용자는 목록에서 제거되고, 아니면 맨 앞에 추가됩니다.
    /// 토글 후 좋아요 상태를 반환합니다.
    pub fn toggle_like(&mut self, user_id: Uuid) -> bool {
        match self.likes.iter().position(|l| l.user == user_id) {
            Some(index) => {
                self.likes.remove(index);
                false
            }
            None => {
                self.likes.insert(0, Like { user: user_id });
                true
            }
        }
    }

    /// 특정 사용자가 좋아요를 눌렀는지 확인합니다.
    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|l| l.user == user_id)
    }

    /// 댓글을 맨 앞에 추가합니다.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// ID로 댓글을 찾습니다.
    pub fn find_comment(&self, comment_id: Uuid) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    /// ID로 댓글을 찾아 제거합니다. 없으면 `None`.
    pub fn remove_comment(&mut self, comment_id: Uuid) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == comment_id)?;
        Some(self.comments.remove(index))
    }
}

/// 좋아요 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Like {
    /// 좋아요를 누른 사용자 ID
    pub user: Uuid,
}

/// 댓글.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Comment {
    /// 댓글 ID
    pub id: Uuid,
    /// 작성자 ID
    pub user: Uuid,
    /// 본문
    pub text: String,
    /// 작성자 표시 이름 (비정규화)
    pub name: String,
    /// 작성자 아바타 (비정규화)
    pub avatar: Option<String>,
    /// 작성 타임스탬프
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// 새 댓글을 생성합니다.
    pub fn new(
        user: Uuid,
        text: impl Into<String>,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text: text.into(),
            name: name.into(),
            avatar,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(author: Uuid) -> Post {
        Post::new(author, "hello world", "Jane", Some("J".to_string()))
    }

    #[test]
    fn test_toggle_like_adds_then_removes() {
        let author = Uuid::new_v4();
        let reader = Uuid::new_v4();
        let mut post = sample_post(author);

        assert!(post.toggle_like(reader));
        assert!(post.liked_by(reader));
        assert_eq!(post.likes.len(), 1);

        assert!(!post.toggle_like(reader));
        assert!(!post.liked_by(reader));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_toggle_like_prepends_new_likes() {
        let mut post = sample_post(Uuid::new_v4());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        post.toggle_like(first);
        post.toggle_like(second);
        assert_eq!(post.likes[0].user, second);
        assert_eq!(post.likes[1].user, first);
    }

    #[test]
    fn test_comments_newest_first() {
        let mut post = sample_post(Uuid::new_v4());
        let commenter = Uuid::new_v4();

        post.add_comment(Comment::new(commenter, "first", "Kim", None));
        post.add_comment(Comment::new(commenter, "second", "Kim", None));

        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn test_remove_comment_by_id() {
        let mut post = sample_post(Uuid::new_v4());
        let comment = Comment::new(Uuid::new_v4(), "hi", "Kim", None);
        let comment_id = comment.id;
        post.add_comment(comment);

        assert!(post.remove_comment(Uuid::new_v4()).is_none());
        assert_eq!(post.comments.len(), 1);

        let removed = post.remove_comment(comment_id).unwrap();
        assert_eq!(removed.text, "hi");
        assert!(post.comments.is_empty());
    }
}
