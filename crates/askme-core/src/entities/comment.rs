//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A comment left on an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub answer_id: Snowflake,
    pub user_id: Snowflake,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, answer_id: Snowflake, user_id: Snowflake, comment_text: String) -> Self {
        Self {
            id,
            answer_id,
            user_id,
            comment_text,
            created_at: Utc::now(),
        }
    }
}
