//! Question database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for questions table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionModel {
    pub id: i64,
    pub question_text: String,
    pub asked_user_id: i64,
    /// NULL for anonymous questions
    pub asker_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
