//! Domain entities

mod answer;
mod comment;
mod friendship;
mod question;
mod user;

pub use answer::Answer;
pub use comment::Comment;
pub use friendship::{FriendRequest, FriendRequestStatus, Friendship};
pub use question::Question;
pub use user::User;
