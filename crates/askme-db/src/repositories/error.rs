//! Error handling utilities for repositories

use askme_core::error::DomainError;
use askme_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// The closure receives the violated constraint name (when the driver
/// reports one) so callers can map different indexes to different errors.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "answer not found" error
pub fn answer_not_found(id: Snowflake) -> DomainError {
    DomainError::AnswerNotFound(id)
}

/// Create a "friend request not found" error
pub fn friend_request_not_found(id: Snowflake) -> DomainError {
    DomainError::FriendRequestNotFound(id)
}
