//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in askme-core.
//! Each repository handles database operations for a specific domain entity.

mod answer;
mod comment;
mod error;
mod friendship;
mod question;
mod user;

pub use answer::PgAnswerRepository;
pub use comment::PgCommentRepository;
pub use friendship::PgFriendshipRepository;
pub use question::PgQuestionRepository;
pub use user::PgUserRepository;
