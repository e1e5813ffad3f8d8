//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub answer_id: i64,
    pub user_id: i64,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}
