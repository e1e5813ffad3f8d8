//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{answers, auth, comments, friends, health, questions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(question_routes())
        .merge(answer_routes())
        .merge(friend_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_settings))
        .route("/users/search", get(users::search_users))
        .route("/users/:username", get(users::get_public_profile))
        .route("/users/:username/stats", get(users::get_stats))
        .route("/users/:username/answers", get(users::get_user_answers))
}

/// Question routes
fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", post(questions::create_question))
        .route("/questions/batch", post(questions::create_question_batch))
        .route("/questions/unanswered", get(questions::get_unanswered_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/questions/:question_id/answers", post(answers::create_answer))
}

/// Answer and feed routes
fn answer_routes() -> Router<AppState> {
    Router::new()
        .route("/answers/:answer_id/vote", post(answers::vote))
        .route("/answers/:answer_id/comments", post(comments::create_comment))
        .route("/answers/:answer_id/comments", get(comments::get_comments))
        .route("/feed", get(answers::wall_feed))
}

/// Friendship routes
fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends", get(friends::get_friends))
        .route("/friends/requests", post(friends::send_request))
        .route("/friends/requests", get(friends::get_pending_requests))
        .route("/friends/requests/:request_id/accept", post(friends::accept_request))
        .route("/friends/requests/:request_id/reject", post(friends::reject_request))
        .route("/friends/:user_id", delete(friends::remove_friend))
}
