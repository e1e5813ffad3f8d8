//! Answer entity <-> model mapper

use askme_core::entities::Answer;
use askme_core::value_objects::Snowflake;

use crate::models::AnswerModel;

impl From<AnswerModel> for Answer {
    fn from(model: AnswerModel) -> Self {
        Answer {
            id: Snowflake::new(model.id),
            question_id: Snowflake::new(model.question_id),
            answer_text: model.answer_text,
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at,
        }
    }
}
