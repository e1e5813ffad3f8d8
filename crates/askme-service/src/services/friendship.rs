//! Friendship service
//!
//! Drives the friend request state machine: send, accept, reject, remove.
//! An accepted request becomes a symmetric edge; the stored direction of
//! the edge never matters to callers.

use askme_core::entities::{FriendRequest, FriendRequestStatus, Friendship};
use askme_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    FriendRequestResponse, FriendshipResponse, PublicUserResponse, SendFriendRequestRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Friendship service
pub struct FriendshipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendshipService<'a> {
    /// Create a new FriendshipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a friend request
    #[instrument(skip(self, request), fields(sender = %sender))]
    pub async fn send_request(
        &self,
        sender: Snowflake,
        request: SendFriendRequestRequest,
    ) -> ServiceResult<FriendRequestResponse> {
        let recipient = Snowflake::parse(&request.to_user_id)
            .map_err(|_| ServiceError::validation("Invalid recipient id"))?;

        if recipient == sender {
            return Err(DomainError::SelfFriendRequest.into());
        }

        if self
            .ctx
            .user_repo()
            .find_by_id(recipient)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(recipient).into());
        }

        if self
            .ctx
            .friendship_repo()
            .edge_exists(sender, recipient)
            .await?
        {
            return Err(DomainError::AlreadyFriends.into());
        }

        let friend_request = FriendRequest::new(
            self.ctx.generate_id(),
            sender,
            recipient,
            request.message,
        );

        // A concurrent duplicate in the same direction loses on the partial
        // unique index and surfaces as FriendRequestExists.
        self.ctx
            .friendship_repo()
            .create_request(&friend_request)
            .await?;

        info!(request_id = %friend_request.id, recipient = %recipient, "Friend request sent");
        Ok(FriendRequestResponse::from(&friend_request))
    }

    /// Accept a friend request; only the recipient may accept
    #[instrument(skip(self), fields(acting_user = %acting_user))]
    pub async fn accept_request(
        &self,
        request_id: Snowflake,
        acting_user: Snowflake,
    ) -> ServiceResult<FriendshipResponse> {
        let request = self
            .ctx
            .friendship_repo()
            .find_request(request_id)
            .await?
            .ok_or(DomainError::FriendRequestNotFound(request_id))?;

        if request.to_user_id != acting_user {
            return Err(DomainError::NotRequestRecipient.into());
        }

        if !request.is_pending() {
            return Err(DomainError::FriendRequestNotFound(request_id).into());
        }

        let edge = Friendship::new(
            self.ctx.generate_id(),
            request.from_user_id,
            request.to_user_id,
        );

        // Atomic consume + insert; a concurrent accept of the same request
        // loses on the deleted row, a concurrent edge for the pair loses on
        // the pair unique index.
        self.ctx
            .friendship_repo()
            .accept_request(request_id, &edge)
            .await?;

        info!(request_id = %request_id, edge_id = %edge.id, "Friend request accepted");
        Ok(FriendshipResponse::from(&edge))
    }

    /// Reject a friend request; only the recipient may reject.
    /// Rejecting an already-rejected request is a no-op.
    #[instrument(skip(self), fields(acting_user = %acting_user))]
    pub async fn reject_request(
        &self,
        request_id: Snowflake,
        acting_user: Snowflake,
    ) -> ServiceResult<()> {
        let request = self
            .ctx
            .friendship_repo()
            .find_request(request_id)
            .await?
            .ok_or(DomainError::FriendRequestNotFound(request_id))?;

        if request.to_user_id != acting_user {
            return Err(DomainError::NotRequestRecipient.into());
        }

        if request.status == FriendRequestStatus::Rejected {
            return Ok(());
        }

        let marked = self.ctx.friendship_repo().mark_rejected(request_id).await?;
        if !marked {
            // Lost a race: either rejected concurrently (fine) or consumed
            // by a concurrent accept (gone).
            let still_there = self
                .ctx
                .friendship_repo()
                .find_request(request_id)
                .await?
                .is_some_and(|r| r.status == FriendRequestStatus::Rejected);
            if !still_there {
                return Err(DomainError::FriendRequestNotFound(request_id).into());
            }
        }

        info!(request_id = %request_id, "Friend request rejected");
        Ok(())
    }

    /// Remove a friendship edge; returns false when no edge existed
    #[instrument(skip(self), fields(user = %user))]
    pub async fn remove_friend(&self, user: Snowflake, other: Snowflake) -> ServiceResult<bool> {
        let removed = self.ctx.friendship_repo().delete_edge(user, other).await?;
        if removed {
            info!(other = %other, "Friend removed");
        }
        Ok(removed)
    }

    /// List the user's friends
    #[instrument(skip(self))]
    pub async fn list_friends(&self, user: Snowflake) -> ServiceResult<Vec<PublicUserResponse>> {
        let friend_ids = self.ctx.friendship_repo().friend_ids(user).await?;
        let friends = self.ctx.user_repo().find_by_ids(&friend_ids).await?;
        Ok(friends.iter().map(PublicUserResponse::from).collect())
    }

    /// List incoming pending requests, newest first
    #[instrument(skip(self))]
    pub async fn list_pending_requests(
        &self,
        user: Snowflake,
    ) -> ServiceResult<Vec<FriendRequestResponse>> {
        let requests = self
            .ctx
            .friendship_repo()
            .pending_requests_for(user)
            .await?;
        Ok(requests.iter().map(FriendRequestResponse::from).collect())
    }
}
