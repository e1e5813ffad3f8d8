//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: String,
    pub self_description: Option<String>,
    pub created_at: String,
}

/// Public profile response
#[derive(Debug, Deserialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: String,
    pub self_description: Option<String>,
}

/// Settings update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

/// Per-user counters response
#[derive(Debug, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "answersCount")]
    pub answers_count: i64,
    #[serde(rename = "friendsCount")]
    pub friends_count: i64,
    #[serde(rename = "likesCount")]
    pub likes_count: i64,
}

/// Create question request
#[derive(Debug, Serialize)]
pub struct CreateQuestionRequest {
    pub asked_user_id: String,
    pub question_text: String,
    pub anonymous: bool,
}

impl CreateQuestionRequest {
    pub fn to_user(asked_user_id: &str, text: &str) -> Self {
        Self {
            asked_user_id: asked_user_id.to_string(),
            question_text: text.to_string(),
            anonymous: false,
        }
    }

    pub fn anonymous(asked_user_id: &str, text: &str) -> Self {
        Self {
            asked_user_id: asked_user_id.to_string(),
            question_text: text.to_string(),
            anonymous: true,
        }
    }
}

/// Batch question request
#[derive(Debug, Serialize)]
pub struct CreateQuestionBatchRequest {
    pub asked_user_ids: Vec<String>,
    pub question_text: String,
    pub anonymous: bool,
}

/// Question response
#[derive(Debug, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub question_text: String,
    pub asked_user_id: String,
    pub asker_id: Option<String>,
    pub created_at: String,
}

/// Create answer request
#[derive(Debug, Serialize)]
pub struct CreateAnswerRequest {
    pub answer_text: String,
}

/// Answer response
#[derive(Debug, Deserialize)]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub answer_text: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: String,
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub action: String,
}

impl VoteRequest {
    pub fn like() -> Self {
        Self {
            action: "like".to_string(),
        }
    }

    pub fn unlike() -> Self {
        Self {
            action: "unlike".to_string(),
        }
    }

    pub fn dislike() -> Self {
        Self {
            action: "dislike".to_string(),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub comment_text: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub answer_id: String,
    pub user_id: String,
    pub comment_text: String,
    pub created_at: String,
}

/// Send friend request body
#[derive(Debug, Serialize)]
pub struct SendFriendRequestRequest {
    pub to_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Friend request response
#[derive(Debug, Deserialize)]
pub struct FriendRequestResponse {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Friendship edge response
#[derive(Debug, Deserialize)]
pub struct FriendshipResponse {
    pub id: String,
    pub user_ids: [String; 2],
    pub created_at: String,
}

/// Feed item: answer joined with its question
#[derive(Debug, Deserialize)]
pub struct FeedItemResponse {
    pub answer: AnswerResponse,
    pub question: QuestionResponse,
}

/// Paginated response wrapper
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub limit: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
