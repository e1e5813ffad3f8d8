//! Database models
//!
//! Plain structs with SQLx `FromRow` derives, mirroring table layouts.

mod answer;
mod comment;
mod friendship;
mod question;
mod user;

pub use answer::AnswerModel;
pub use comment::CommentModel;
pub use friendship::{FriendRequestModel, FriendshipModel};
pub use question::QuestionModel;
pub use user::UserModel;
