//! Question entity <-> model mapper

use askme_core::entities::Question;
use askme_core::value_objects::Snowflake;

use crate::models::QuestionModel;

impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: Snowflake::new(model.id),
            question_text: model.question_text,
            asked_user_id: Snowflake::new(model.asked_user_id),
            asker_id: model.asker_id.map(Snowflake::new),
            created_at: model.created_at,
        }
    }
}
