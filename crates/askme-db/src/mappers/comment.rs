//! Comment entity <-> model mapper

use askme_core::entities::Comment;
use askme_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            answer_id: Snowflake::new(model.answer_id),
            user_id: Snowflake::new(model.user_id),
            comment_text: model.comment_text,
            created_at: model.created_at,
        }
    }
}
