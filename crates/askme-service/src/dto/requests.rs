//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies with user-supplied
//! fields also implement `Validate` for input validation. Snowflake IDs
//! arrive as strings and are parsed in the service layer.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    #[serde(default)]
    pub first_name: Option<String>,

    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    #[serde(default)]
    pub last_name: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// Account Requests
// ============================================================================

/// Update account settings request
///
/// Absent fields are left unchanged; `date_of_birth` is additionally
/// checked against the future-date rule in the service.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(length(max = 64, message = "First name must be at most 64 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 64, message = "Last name must be at most 64 characters"))]
    pub last_name: Option<String>,

    /// Avatar reference or null to remove
    pub avatar: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub self_description: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}

// ============================================================================
// Friendship Requests
// ============================================================================

/// Send a friend request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendFriendRequestRequest {
    /// Recipient user ID (Snowflake as string)
    pub to_user_id: String,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Question Requests
// ============================================================================

/// Post a question to a single user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    /// Recipient user ID (Snowflake as string)
    pub asked_user_id: String,

    #[validate(length(min = 1, message = "Question text is required"))]
    pub question_text: String,

    /// Hide the asker's identity even when authenticated
    #[serde(default)]
    pub anonymous: bool,
}

/// Post one question to several users at once
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionBatchRequest {
    /// Recipient user IDs (Snowflakes as strings)
    #[validate(length(min = 1, message = "At least one recipient is required"))]
    pub asked_user_ids: Vec<String>,

    #[validate(length(min = 1, message = "Question text is required"))]
    pub question_text: String,

    #[serde(default)]
    pub anonymous: bool,
}

// ============================================================================
// Answer Requests
// ============================================================================

/// Answer a question
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswerRequest {
    #[validate(length(min = 1, message = "Answer text is required"))]
    pub answer_text: String,
}

/// Vote action on an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteAction {
    Like,
    Unlike,
    Dislike,
    Undislike,
}

impl VoteAction {
    /// Counter deltas (likes, dislikes) for this action
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Self::Like => (1, 0),
            Self::Unlike => (-1, 0),
            Self::Dislike => (0, 1),
            Self::Undislike => (0, -1),
        }
    }
}

/// Vote on an answer
#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub action: VoteAction,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Comment on an answer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Comment text is required"))]
    pub comment_text: String,
}
