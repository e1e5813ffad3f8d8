//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::{Pagination, PaginationParams};
pub use path::{AnswerIdPath, QuestionIdPath, RequestIdPath, UserIdPath, UsernamePath};
pub use validated::ValidatedJson;
