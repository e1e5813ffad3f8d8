//! Data transfer objects
//!
//! Request DTOs deserialize and validate API input; response DTOs
//! serialize domain entities for JSON output.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateAnswerRequest, CreateCommentRequest, CreateQuestionBatchRequest, CreateQuestionRequest,
    LoginRequest, RegisterRequest, SendFriendRequestRequest, UpdateSettingsRequest, VoteAction,
    VoteRequest,
};
pub use responses::{
    AnswerResponse, ApiResponse, AuthResponse, CommentResponse, CurrentUserResponse,
    FeedItemResponse, FriendRequestResponse, FriendshipResponse, HealthChecks, HealthResponse,
    PaginatedResponse, PaginationMeta, PublicUserResponse, QuestionResponse, ReadinessResponse,
    StatsResponse,
};
