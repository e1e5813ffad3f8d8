//! Question entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A question posted to a user, optionally anonymously
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: Snowflake,
    pub question_text: String,
    /// Recipient of the question
    pub asked_user_id: Snowflake,
    /// None when the question was asked anonymously
    pub asker_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Create a new Question
    pub fn new(
        id: Snowflake,
        question_text: String,
        asked_user_id: Snowflake,
        asker_id: Option<Snowflake>,
    ) -> Self {
        Self {
            id,
            question_text,
            asked_user_id,
            asker_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the asker chose to stay anonymous
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.asker_id.is_none()
    }
}
