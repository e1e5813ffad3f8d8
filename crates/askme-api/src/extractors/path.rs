//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use askme_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with question_id
#[derive(Debug, serde::Deserialize)]
pub struct QuestionIdPath {
    pub question_id: String,
}

impl QuestionIdPath {
    /// Parse question_id as Snowflake
    pub fn question_id(&self) -> Result<Snowflake, ApiError> {
        self.question_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid question_id format"))
    }
}

/// Path parameters with answer_id
#[derive(Debug, serde::Deserialize)]
pub struct AnswerIdPath {
    pub answer_id: String,
}

impl AnswerIdPath {
    /// Parse answer_id as Snowflake
    pub fn answer_id(&self) -> Result<Snowflake, ApiError> {
        self.answer_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid answer_id format"))
    }
}

/// Path parameters with request_id (friend requests)
#[derive(Debug, serde::Deserialize)]
pub struct RequestIdPath {
    pub request_id: String,
}

impl RequestIdPath {
    /// Parse request_id as Snowflake
    pub fn request_id(&self) -> Result<Snowflake, ApiError> {
        self.request_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid request_id format"))
    }
}

/// Path parameters with a username
#[derive(Debug, serde::Deserialize)]
pub struct UsernamePath {
    pub username: String,
}

impl UsernamePath {
    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }
}
