//! Answer entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// The answer to a question, with like/dislike counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: Snowflake,
    pub question_id: Snowflake,
    pub answer_text: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Create a new Answer with zeroed counters
    pub fn new(id: Snowflake, question_id: Snowflake, answer_text: String) -> Self {
        Self {
            id,
            question_id,
            answer_text,
            likes: 0,
            dislikes: 0,
            created_at: Utc::now(),
        }
    }
}
