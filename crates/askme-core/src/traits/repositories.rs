//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All mutations that touch the friendship
//! pair or the one-answer-per-question rule rely on store-level uniqueness
//! constraints, so concurrent writers serialize in the database rather
//! than in application code.

use async_trait::async_trait;

use crate::entities::{Answer, Comment, FriendRequest, Friendship, Question, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Cursor pagination options for feed queries
///
/// `before` is a Snowflake id cursor: ids are time-sortable, so paging by id
/// is paging by creation time and stays stable under concurrent inserts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedQuery {
    pub before: Option<Snowflake>,
    pub limit: i64,
}

/// Aggregates over a user's answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerStats {
    pub answers_count: i64,
    pub likes_count: i64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find several users by ID (order unspecified, missing ids skipped)
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check that every given id refers to an existing user
    async fn all_exist(&self, ids: &[Snowflake]) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Search users by username or display names
    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Friendship Repository
// ============================================================================

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Find a friend request by ID
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>>;

    /// Find the pending request for an ordered (from, to) pair
    async fn find_pending_request(
        &self,
        from: Snowflake,
        to: Snowflake,
    ) -> RepoResult<Option<FriendRequest>>;

    /// Incoming pending requests for a user, newest first
    async fn pending_requests_for(&self, to_user: Snowflake) -> RepoResult<Vec<FriendRequest>>;

    /// Insert a pending request; a concurrent duplicate in the same
    /// direction fails with `FriendRequestExists`
    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()>;

    /// Consume a pending request and create the edge in one transaction
    ///
    /// Fails with `FriendRequestNotFound` if the request row is gone
    /// (already consumed) and with `AlreadyFriends` if the pair already has
    /// an edge.
    async fn accept_request(&self, request_id: Snowflake, edge: &Friendship) -> RepoResult<()>;

    /// Mark a pending request rejected; returns false if no pending row
    /// matched (already rejected or unknown)
    async fn mark_rejected(&self, request_id: Snowflake) -> RepoResult<bool>;

    /// True iff an edge exists between the unordered pair {a, b}
    async fn edge_exists(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool>;

    /// Delete the edge between {a, b} in whichever direction it is stored;
    /// returns whether an edge was deleted
    async fn delete_edge(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool>;

    /// Ids of every user connected to `user` by an edge, either direction
    async fn friend_ids(&self, user: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Number of edges touching `user`
    async fn count_friends(&self, user: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Question Repository
// ============================================================================

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Question>>;

    /// Create a new question
    async fn create(&self, question: &Question) -> RepoResult<()>;

    /// Create a batch of questions atomically (all inserted or none)
    async fn create_batch(&self, questions: &[Question]) -> RepoResult<()>;

    /// Delete a question and its answer and comments in one transaction;
    /// returns whether the question existed
    async fn delete_cascade(&self, id: Snowflake) -> RepoResult<bool>;

    /// Questions addressed to `user` that have no answer yet, newest first
    async fn unanswered_for(&self, user: Snowflake) -> RepoResult<Vec<Question>>;
}

// ============================================================================
// Answer Repository
// ============================================================================

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Find answer by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Answer>>;

    /// Create an answer; fails with `QuestionAlreadyAnswered` if the
    /// question already has one
    async fn create(&self, answer: &Answer) -> RepoResult<()>;

    /// Atomically adjust like/dislike counters (clamped at zero) and
    /// return the updated answer
    async fn adjust_votes(
        &self,
        id: Snowflake,
        like_delta: i32,
        dislike_delta: i32,
    ) -> RepoResult<Answer>;

    /// Answers to questions addressed to any of `asked_users`, newest
    /// first, cursor-paginated; each answer comes with its question
    async fn answers_to_users(
        &self,
        asked_users: &[Snowflake],
        query: FeedQuery,
    ) -> RepoResult<Vec<(Answer, Question)>>;

    /// Count and like-sum over all answers to questions addressed to `user`
    async fn stats_for(&self, user: Snowflake) -> RepoResult<AnswerStats>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Comments on an answer, newest first
    async fn find_by_answer(&self, answer_id: Snowflake) -> RepoResult<Vec<Comment>>;
}
