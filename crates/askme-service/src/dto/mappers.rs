//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use askme_core::entities::{Answer, Comment, FriendRequest, Friendship, Question, User};
use askme_core::Snowflake;

use super::responses::{
    AnswerResponse, CommentResponse, CurrentUserResponse, FeedItemResponse, FriendRequestResponse,
    FriendshipResponse, PublicUserResponse, QuestionResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar_url: user.avatar_url(),
            self_description: user.self_description.clone(),
            date_of_birth: user.date_of_birth,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            display_name: user.display_name(),
            avatar_url: user.avatar_url(),
            self_description: user.self_description.clone(),
        }
    }
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Friendship Mappers
// ============================================================================

impl From<&FriendRequest> for FriendRequestResponse {
    fn from(request: &FriendRequest) -> Self {
        Self {
            id: request.id.to_string(),
            from_user_id: request.from_user_id.to_string(),
            to_user_id: request.to_user_id.to_string(),
            message: request.message.clone(),
            status: request.status.as_str().to_string(),
            created_at: request.created_at,
        }
    }
}

impl From<FriendRequest> for FriendRequestResponse {
    fn from(request: FriendRequest) -> Self {
        Self::from(&request)
    }
}

impl From<&Friendship> for FriendshipResponse {
    fn from(edge: &Friendship) -> Self {
        Self {
            id: edge.id.to_string(),
            user_ids: [edge.from_user_id.to_string(), edge.to_user_id.to_string()],
            created_at: edge.created_at,
        }
    }
}

impl From<Friendship> for FriendshipResponse {
    fn from(edge: Friendship) -> Self {
        Self::from(&edge)
    }
}

// ============================================================================
// Q&A Mappers
// ============================================================================

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.to_string(),
            question_text: question.question_text.clone(),
            asked_user_id: question.asked_user_id.to_string(),
            asker_id: question.asker_id.map(|id: Snowflake| id.to_string()),
            created_at: question.created_at,
        }
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self::from(&question)
    }
}

impl From<&Answer> for AnswerResponse {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id.to_string(),
            question_id: answer.question_id.to_string(),
            answer_text: answer.answer_text.clone(),
            likes: answer.likes,
            dislikes: answer.dislikes,
            created_at: answer.created_at,
        }
    }
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self::from(&answer)
    }
}

impl From<(Answer, Question)> for FeedItemResponse {
    fn from((answer, question): (Answer, Question)) -> Self {
        Self {
            answer: AnswerResponse::from(&answer),
            question: QuestionResponse::from(&question),
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            answer_id: comment.answer_id.to_string(),
            user_id: comment.user_id.to_string(),
            comment_text: comment.comment_text.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}
