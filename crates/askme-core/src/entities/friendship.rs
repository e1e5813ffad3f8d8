//! Friendship entities - pending requests and accepted edges
//!
//! A `FriendRequest` records the pending/rejected half of the lifecycle; a
//! `Friendship` is the accepted edge. The two are separate so that request
//! metadata (message, rejection time) survives independently of the edge,
//! and friend lookups never scan the request table.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Status of a friend request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendRequestStatus {
    Pending,
    Rejected,
}

impl FriendRequestStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from the storage representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A friend request from one user to another
///
/// An accepted request is consumed: the row is deleted in the same
/// transaction that creates the `Friendship` edge, so only pending and
/// rejected requests are ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRequest {
    pub id: Snowflake,
    pub from_user_id: Snowflake,
    pub to_user_id: Snowflake,
    pub message: Option<String>,
    pub status: FriendRequestStatus,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl FriendRequest {
    /// Create a new pending request
    pub fn new(
        id: Snowflake,
        from_user_id: Snowflake,
        to_user_id: Snowflake,
        message: Option<String>,
    ) -> Self {
        Self {
            id,
            from_user_id,
            to_user_id,
            message,
            status: FriendRequestStatus::Pending,
            rejected_at: None,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == FriendRequestStatus::Pending
    }
}

/// An accepted friendship edge
///
/// Stored as the directed pair from the originating request, but the
/// direction carries no meaning: every lookup treats {from, to} as an
/// unordered pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id: Snowflake,
    pub from_user_id: Snowflake,
    pub to_user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Create a new edge
    pub fn new(id: Snowflake, from_user_id: Snowflake, to_user_id: Snowflake) -> Self {
        Self {
            id,
            from_user_id,
            to_user_id,
            created_at: Utc::now(),
        }
    }

    /// Whether this edge connects the given user to anyone
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.from_user_id == user_id || self.to_user_id == user_id
    }

    /// The other end of the edge, if `user_id` is one of the two ends
    pub fn other_end(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.from_user_id == user_id {
            Some(self.to_user_id)
        } else if self.to_user_id == user_id {
            Some(self.from_user_id)
        } else {
            None
        }
    }
}
