//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnswerRepository, AnswerStats, CommentRepository, FeedQuery, FriendshipRepository,
    QuestionRepository, RepoResult, UserRepository,
};
