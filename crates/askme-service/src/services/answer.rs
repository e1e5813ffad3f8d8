//! Answer service
//!
//! Answering questions, voting, the per-user answers listing, and the wall
//! feed composed from the caller's friend set.

use askme_core::entities::Answer;
use askme_core::traits::FeedQuery;
use askme_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AnswerResponse, CreateAnswerRequest, FeedItemResponse, PaginatedResponse, VoteRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub(crate) const MAX_ANSWER_LEN: usize = 3000;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Answer service
pub struct AnswerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnswerService<'a> {
    /// Create a new AnswerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Answer a question; only the question's recipient may answer
    #[instrument(skip(self, request), fields(acting_user = %acting_user))]
    pub async fn create_answer(
        &self,
        question_id: Snowflake,
        acting_user: Snowflake,
        request: CreateAnswerRequest,
    ) -> ServiceResult<AnswerResponse> {
        if request.answer_text.chars().count() > MAX_ANSWER_LEN {
            return Err(DomainError::ContentTooLong { max: MAX_ANSWER_LEN }.into());
        }

        let question = self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or(DomainError::QuestionNotFound(question_id))?;

        if question.asked_user_id != acting_user {
            return Err(ServiceError::permission_denied("answer this question"));
        }

        let answer = Answer::new(self.ctx.generate_id(), question_id, request.answer_text);

        // The question_id unique constraint turns a concurrent double answer
        // into QuestionAlreadyAnswered.
        self.ctx.answer_repo().create(&answer).await?;

        info!(answer_id = %answer.id, question_id = %question_id, "Answer created");
        Ok(AnswerResponse::from(&answer))
    }

    /// Apply a vote action to an answer's counters
    #[instrument(skip(self, request))]
    pub async fn vote(
        &self,
        answer_id: Snowflake,
        request: VoteRequest,
    ) -> ServiceResult<AnswerResponse> {
        let (like_delta, dislike_delta) = request.action.deltas();
        let answer = self
            .ctx
            .answer_repo()
            .adjust_votes(answer_id, like_delta, dislike_delta)
            .await?;

        Ok(AnswerResponse::from(&answer))
    }

    /// Wall feed: answers to questions asked to any of the user's friends,
    /// newest first, cursor-paginated
    #[instrument(skip(self))]
    pub async fn wall_feed(
        &self,
        user: Snowflake,
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<FeedItemResponse>> {
        let friend_ids = self.ctx.friendship_repo().friend_ids(user).await?;
        self.feed_for(&friend_ids, before, limit).await
    }

    /// Answers to questions asked to one user, newest first
    #[instrument(skip(self))]
    pub async fn answers_for(
        &self,
        target: Snowflake,
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<FeedItemResponse>> {
        self.feed_for(&[target], before, limit).await
    }

    /// Answers listing for a username (public profile page)
    #[instrument(skip(self))]
    pub async fn answers_by_username(
        &self,
        username: &str,
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<FeedItemResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::UsernameNotFound(username.to_string())))?;

        self.feed_for(&[user.id], before, limit).await
    }

    async fn feed_for(
        &self,
        asked_users: &[Snowflake],
        before: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<FeedItemResponse>> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

        // Fetch one extra row to detect whether another page exists
        let query = FeedQuery {
            before,
            limit: limit + 1,
        };
        let mut rows = self.ctx.answer_repo().answers_to_users(asked_users, query).await?;

        let has_more = rows.len() as i64 > limit;
        rows.truncate(limit as usize);

        let next_cursor = if has_more {
            rows.last().map(|(answer, _)| answer.id.to_string())
        } else {
            None
        };

        let items = rows.into_iter().map(FeedItemResponse::from).collect();
        Ok(PaginatedResponse::new(items, next_cursor, has_more, limit))
    }
}
