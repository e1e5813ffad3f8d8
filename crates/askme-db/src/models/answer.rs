//! Answer database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for answers table
#[derive(Debug, Clone, FromRow)]
pub struct AnswerModel {
    pub id: i64,
    pub question_id: i64,
    pub answer_text: String,
    pub likes: i32,
    pub dislikes: i32,
    pub created_at: DateTime<Utc>,
}
