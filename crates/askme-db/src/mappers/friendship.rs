//! Friend request and friendship entity <-> model mappers

use askme_core::entities::{FriendRequest, FriendRequestStatus, Friendship};
use askme_core::value_objects::Snowflake;

use crate::models::{FriendRequestModel, FriendshipModel};

/// Convert FriendRequestModel to FriendRequest entity
///
/// An unknown status string falls back to `Rejected` rather than panicking;
/// the schema constrains the column so this path is unreachable in practice.
impl From<FriendRequestModel> for FriendRequest {
    fn from(model: FriendRequestModel) -> Self {
        FriendRequest {
            id: Snowflake::new(model.id),
            from_user_id: Snowflake::new(model.from_user_id),
            to_user_id: Snowflake::new(model.to_user_id),
            message: model.message,
            status: FriendRequestStatus::parse(&model.status)
                .unwrap_or(FriendRequestStatus::Rejected),
            rejected_at: model.rejected_at,
            created_at: model.created_at,
        }
    }
}

impl From<FriendshipModel> for Friendship {
    fn from(model: FriendshipModel) -> Self {
        Friendship {
            id: Snowflake::new(model.id),
            from_user_id: Snowflake::new(model.from_user_id),
            to_user_id: Snowflake::new(model.to_user_id),
            created_at: model.created_at,
        }
    }
}
