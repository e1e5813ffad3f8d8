//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod answer;
pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod friendship;
pub mod question;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use account::AccountService;
pub use answer::AnswerService;
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use friendship::FriendshipService;
pub use question::QuestionService;
