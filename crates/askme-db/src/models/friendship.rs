//! Friend request and friendship database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for friend_requests table
#[derive(Debug, Clone, FromRow)]
pub struct FriendRequestModel {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub message: Option<String>,
    pub status: String,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Database model for friendships table
#[derive(Debug, Clone, FromRow)]
pub struct FriendshipModel {
    pub id: i64,
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub created_at: DateTime<Utc>,
}
