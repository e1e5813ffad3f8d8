//! In-memory repository fakes for service-level tests
//!
//! The fakes mirror the semantics the SQL schema enforces: the pending
//! request and symmetric pair uniqueness rules, the one-answer-per-question
//! constraint, and vote clamping. This lets the state machine tests run
//! without a database.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use askme_common::auth::JwtService;
use askme_core::entities::{Answer, Comment, FriendRequest, FriendRequestStatus, Friendship, Question, User};
use askme_core::traits::{
    AnswerRepository, AnswerStats, CommentRepository, FeedQuery, FriendshipRepository,
    QuestionRepository, RepoResult, UserRepository,
};
use askme_core::{DomainError, Snowflake, SnowflakeGenerator};
use askme_db::PgPool;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Store {
    users: Vec<(User, String)>,
    requests: Vec<FriendRequest>,
    edges: Vec<Friendship>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    comments: Vec<Comment>,
}

type SharedStore = Arc<Mutex<Store>>;

struct FakeUserRepo(SharedStore);
struct FakeFriendshipRepo(SharedStore);
struct FakeQuestionRepo(SharedStore);
struct FakeAnswerRepo(SharedStore);
struct FakeCommentRepo(SharedStore);

#[async_trait]
impl UserRepository for FakeUserRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .filter(|(u, _)| ids.contains(&u.id))
            .map(|(u, _)| u.clone())
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn all_exist(&self, ids: &[Snowflake]) -> RepoResult<bool> {
        let store = self.0.lock();
        Ok(ids
            .iter()
            .all(|id| store.users.iter().any(|(u, _)| u.id == *id)))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut store = self.0.lock();
        if store.users.iter().any(|(u, _)| u.username == user.username) {
            return Err(DomainError::UsernameTaken);
        }
        if store.users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        store.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut store = self.0.lock();
        match store.users.iter_mut().find(|(u, _)| u.id == user.id) {
            Some((existing, _)) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound(user.id)),
        }
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone()))
    }

    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<User>> {
        let needle = query.to_lowercase();
        Ok(self
            .0
            .lock()
            .users
            .iter()
            .filter(|(u, _)| {
                u.username.to_lowercase().contains(&needle)
                    || u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
            })
            .take(limit as usize)
            .map(|(u, _)| u.clone())
            .collect())
    }
}

fn is_pair(edge: &Friendship, a: Snowflake, b: Snowflake) -> bool {
    (edge.from_user_id == a && edge.to_user_id == b)
        || (edge.from_user_id == b && edge.to_user_id == a)
}

#[async_trait]
impl FriendshipRepository for FakeFriendshipRepo {
    async fn find_request(&self, id: Snowflake) -> RepoResult<Option<FriendRequest>> {
        Ok(self.0.lock().requests.iter().find(|r| r.id == id).cloned())
    }

    async fn find_pending_request(
        &self,
        from: Snowflake,
        to: Snowflake,
    ) -> RepoResult<Option<FriendRequest>> {
        Ok(self
            .0
            .lock()
            .requests
            .iter()
            .find(|r| r.from_user_id == from && r.to_user_id == to && r.is_pending())
            .cloned())
    }

    async fn pending_requests_for(&self, to_user: Snowflake) -> RepoResult<Vec<FriendRequest>> {
        let mut requests: Vec<FriendRequest> = self
            .0
            .lock()
            .requests
            .iter()
            .filter(|r| r.to_user_id == to_user && r.is_pending())
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(requests)
    }

    async fn create_request(&self, request: &FriendRequest) -> RepoResult<()> {
        let mut store = self.0.lock();
        if store.requests.iter().any(|r| {
            r.from_user_id == request.from_user_id
                && r.to_user_id == request.to_user_id
                && r.is_pending()
        }) {
            return Err(DomainError::FriendRequestExists);
        }
        store.requests.push(request.clone());
        Ok(())
    }

    async fn accept_request(&self, request_id: Snowflake, edge: &Friendship) -> RepoResult<()> {
        let mut store = self.0.lock();
        let position = store
            .requests
            .iter()
            .position(|r| r.id == request_id && r.is_pending())
            .ok_or(DomainError::FriendRequestNotFound(request_id))?;

        if store
            .edges
            .iter()
            .any(|e| is_pair(e, edge.from_user_id, edge.to_user_id))
        {
            return Err(DomainError::AlreadyFriends);
        }

        store.requests.remove(position);
        store.edges.push(edge.clone());
        Ok(())
    }

    async fn mark_rejected(&self, request_id: Snowflake) -> RepoResult<bool> {
        let mut store = self.0.lock();
        match store
            .requests
            .iter_mut()
            .find(|r| r.id == request_id && r.is_pending())
        {
            Some(request) => {
                request.status = FriendRequestStatus::Rejected;
                request.rejected_at = Some(chrono::Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn edge_exists(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        Ok(self.0.lock().edges.iter().any(|e| is_pair(e, a, b)))
    }

    async fn delete_edge(&self, a: Snowflake, b: Snowflake) -> RepoResult<bool> {
        let mut store = self.0.lock();
        let before = store.edges.len();
        store.edges.retain(|e| !is_pair(e, a, b));
        Ok(store.edges.len() < before)
    }

    async fn friend_ids(&self, user: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let mut edges: Vec<&Friendship> = Vec::new();
        let store = self.0.lock();
        for edge in &store.edges {
            if edge.involves(user) {
                edges.push(edge);
            }
        }
        edges.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(edges
            .iter()
            .filter_map(|e| e.other_end(user))
            .collect())
    }

    async fn count_friends(&self, user: Snowflake) -> RepoResult<i64> {
        Ok(self
            .0
            .lock()
            .edges
            .iter()
            .filter(|e| e.involves(user))
            .count() as i64)
    }
}

#[async_trait]
impl QuestionRepository for FakeQuestionRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Question>> {
        Ok(self.0.lock().questions.iter().find(|q| q.id == id).cloned())
    }

    async fn create(&self, question: &Question) -> RepoResult<()> {
        self.0.lock().questions.push(question.clone());
        Ok(())
    }

    async fn create_batch(&self, questions: &[Question]) -> RepoResult<()> {
        self.0.lock().questions.extend_from_slice(questions);
        Ok(())
    }

    async fn delete_cascade(&self, id: Snowflake) -> RepoResult<bool> {
        let mut store = self.0.lock();
        let answer_ids: Vec<Snowflake> = store
            .answers
            .iter()
            .filter(|a| a.question_id == id)
            .map(|a| a.id)
            .collect();
        store.comments.retain(|c| !answer_ids.contains(&c.answer_id));
        store.answers.retain(|a| a.question_id != id);
        let before = store.questions.len();
        store.questions.retain(|q| q.id != id);
        Ok(store.questions.len() < before)
    }

    async fn unanswered_for(&self, user: Snowflake) -> RepoResult<Vec<Question>> {
        let store = self.0.lock();
        let mut questions: Vec<Question> = store
            .questions
            .iter()
            .filter(|q| {
                q.asked_user_id == user
                    && !store.answers.iter().any(|a| a.question_id == q.id)
            })
            .cloned()
            .collect();
        questions.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(questions)
    }
}

#[async_trait]
impl AnswerRepository for FakeAnswerRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Answer>> {
        Ok(self.0.lock().answers.iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, answer: &Answer) -> RepoResult<()> {
        let mut store = self.0.lock();
        if store
            .answers
            .iter()
            .any(|a| a.question_id == answer.question_id)
        {
            return Err(DomainError::QuestionAlreadyAnswered);
        }
        store.answers.push(answer.clone());
        Ok(())
    }

    async fn adjust_votes(
        &self,
        id: Snowflake,
        like_delta: i32,
        dislike_delta: i32,
    ) -> RepoResult<Answer> {
        let mut store = self.0.lock();
        let answer = store
            .answers
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::AnswerNotFound(id))?;
        answer.likes = (answer.likes + like_delta).max(0);
        answer.dislikes = (answer.dislikes + dislike_delta).max(0);
        Ok(answer.clone())
    }

    async fn answers_to_users(
        &self,
        asked_users: &[Snowflake],
        query: FeedQuery,
    ) -> RepoResult<Vec<(Answer, Question)>> {
        let store = self.0.lock();
        let mut rows: Vec<(Answer, Question)> = store
            .answers
            .iter()
            .filter_map(|a| {
                let question = store.questions.iter().find(|q| q.id == a.question_id)?;
                if !asked_users.contains(&question.asked_user_id) {
                    return None;
                }
                if let Some(before) = query.before {
                    if a.id >= before {
                        return None;
                    }
                }
                Some((a.clone(), question.clone()))
            })
            .collect();
        rows.sort_by(|(a, _), (b, _)| b.id.cmp(&a.id));
        rows.truncate(query.limit as usize);
        Ok(rows)
    }

    async fn stats_for(&self, user: Snowflake) -> RepoResult<AnswerStats> {
        let store = self.0.lock();
        let mut stats = AnswerStats::default();
        for answer in &store.answers {
            let to_user = store
                .questions
                .iter()
                .any(|q| q.id == answer.question_id && q.asked_user_id == user);
            if to_user {
                stats.answers_count += 1;
                stats.likes_count += i64::from(answer.likes);
            }
        }
        Ok(stats)
    }
}

#[async_trait]
impl CommentRepository for FakeCommentRepo {
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.0.lock().comments.push(comment.clone());
        Ok(())
    }

    async fn find_by_answer(&self, answer_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .0
            .lock()
            .comments
            .iter()
            .filter(|c| c.answer_id == answer_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(comments)
    }
}

/// Build a ServiceContext backed entirely by in-memory fakes
pub(crate) fn test_context() -> ServiceContext {
    let store: SharedStore = Arc::new(Mutex::new(Store::default()));

    // Lazy pool: never actually connects, the fakes handle everything
    let pool = PgPool::connect_lazy("postgresql://localhost:5432/askme_test")
        .expect("lazy pool");

    ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(Arc::new(FakeUserRepo(store.clone())))
        .friendship_repo(Arc::new(FakeFriendshipRepo(store.clone())))
        .question_repo(Arc::new(FakeQuestionRepo(store.clone())))
        .answer_repo(Arc::new(FakeAnswerRepo(store.clone())))
        .comment_repo(Arc::new(FakeCommentRepo(store)))
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            3600,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .expect("test context")
}

/// Insert a user directly, bypassing password hashing for speed
pub(crate) async fn register_user(ctx: &ServiceContext, username: &str) -> Snowflake {
    let user = User::new(
        ctx.generate_id(),
        username.to_string(),
        format!("{username}@example.com"),
    );
    ctx.user_repo()
        .create(&user, "$argon2id$fake-hash")
        .await
        .expect("create test user");
    user.id
}
