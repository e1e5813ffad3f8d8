//! Question service
//!
//! Posting questions (single and batch), listing unanswered questions,
//! and deleting a question with its answer and comments.

use askme_core::entities::Question;
use askme_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateQuestionBatchRequest, CreateQuestionRequest, QuestionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub(crate) const MAX_QUESTION_LEN: usize = 300;

/// Question service
pub struct QuestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuestionService<'a> {
    /// Create a new QuestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a question to a single user
    ///
    /// `asker` is None for unauthenticated callers; an authenticated caller
    /// may still choose to stay anonymous via the request flag.
    #[instrument(skip(self, request))]
    pub async fn create_question(
        &self,
        asker: Option<Snowflake>,
        request: CreateQuestionRequest,
    ) -> ServiceResult<QuestionResponse> {
        if request.question_text.chars().count() > MAX_QUESTION_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_QUESTION_LEN,
            }
            .into());
        }

        let asked_user = Snowflake::parse(&request.asked_user_id)
            .map_err(|_| ServiceError::validation("Invalid recipient id"))?;

        if self
            .ctx
            .user_repo()
            .find_by_id(asked_user)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(asked_user).into());
        }

        let effective_asker = if request.anonymous { None } else { asker };
        let question = Question::new(
            self.ctx.generate_id(),
            request.question_text,
            asked_user,
            effective_asker,
        );

        self.ctx.question_repo().create(&question).await?;

        info!(question_id = %question.id, asked_user = %asked_user, "Question created");
        Ok(QuestionResponse::from(&question))
    }

    /// Post one question to several users atomically
    ///
    /// Every recipient is validated before any insert; the inserts share
    /// one transaction, so either all recipients get the question or none do.
    #[instrument(skip(self, request))]
    pub async fn create_questions_batch(
        &self,
        asker: Option<Snowflake>,
        request: CreateQuestionBatchRequest,
    ) -> ServiceResult<Vec<QuestionResponse>> {
        if request.question_text.chars().count() > MAX_QUESTION_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_QUESTION_LEN,
            }
            .into());
        }

        let mut recipients = Vec::with_capacity(request.asked_user_ids.len());
        for raw in &request.asked_user_ids {
            recipients.push(
                Snowflake::parse(raw)
                    .map_err(|_| ServiceError::validation("Invalid recipient id"))?,
            );
        }

        if !self.ctx.user_repo().all_exist(&recipients).await? {
            return Err(ServiceError::validation("One or more recipients do not exist"));
        }

        let effective_asker = if request.anonymous { None } else { asker };
        let questions: Vec<Question> = recipients
            .iter()
            .map(|&asked_user| {
                Question::new(
                    self.ctx.generate_id(),
                    request.question_text.clone(),
                    asked_user,
                    effective_asker,
                )
            })
            .collect();

        self.ctx.question_repo().create_batch(&questions).await?;

        info!(count = questions.len(), "Question batch created");
        Ok(questions.iter().map(QuestionResponse::from).collect())
    }

    /// Unanswered questions addressed to the user, newest first
    #[instrument(skip(self))]
    pub async fn unanswered_questions(
        &self,
        user: Snowflake,
    ) -> ServiceResult<Vec<QuestionResponse>> {
        let questions = self.ctx.question_repo().unanswered_for(user).await?;
        Ok(questions.iter().map(QuestionResponse::from).collect())
    }

    /// Delete a question with its answer and comments
    ///
    /// Only the question's recipient may delete it.
    #[instrument(skip(self), fields(acting_user = %acting_user))]
    pub async fn delete_question(
        &self,
        question_id: Snowflake,
        acting_user: Snowflake,
    ) -> ServiceResult<()> {
        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or(DomainError::QuestionNotFound(question_id))?;

        if question.asked_user_id != acting_user {
            return Err(ServiceError::permission_denied("delete this question"));
        }

        let deleted = self.ctx.question_repo().delete_cascade(question_id).await?;
        if !deleted {
            return Err(DomainError::QuestionNotFound(question_id).into());
        }

        info!(question_id = %question_id, "Question deleted");
        Ok(())
    }
}
