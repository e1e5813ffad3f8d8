//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a user and return the auth response
async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Ask a question from one user to another and answer it as the recipient
async fn ask_and_answer(
    server: &TestServer,
    asker: &AuthResponse,
    asked: &AuthResponse,
    text: &str,
) -> AnswerResponse {
    let question_req = CreateQuestionRequest::to_user(&asked.user.id, text);
    let response = server
        .post_auth("/api/v1/questions", &asker.access_token, &question_req)
        .await
        .unwrap();
    let question: QuestionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let answer_req = CreateAnswerRequest {
        answer_text: format!("re: {text}"),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/questions/{}/answers", question.id),
            &asked.access_token,
            &answer_req,
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Befriend two users through the full request/accept flow
async fn befriend(server: &TestServer, a: &AuthResponse, b: &AuthResponse) {
    let request_body = SendFriendRequestRequest {
        to_user_id: b.user.id.clone(),
        message: None,
    };
    let response = server
        .post_auth("/api/v1/friends/requests", &a.access_token, &request_body)
        .await
        .unwrap();
    let request: FriendRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/friends/requests/{}/accept", request.id),
            &b.access_token,
            &(),
        )
        .await
        .unwrap();
    let _: FriendshipResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    // Second registration with same username
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "wrongpass".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.username, register_req.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_settings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let settings = UpdateSettingsRequest {
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        self_description: Some("First programmer".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/v1/users/@me", &auth.access_token, &settings)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.self_description.as_deref(), Some("First programmer"));
}

#[tokio::test]
async fn test_get_public_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register(&server).await;

    // Public profile needs no auth
    let response = server
        .get(&format!("/api/v1/users/{}", register_req.username))
        .await
        .unwrap();
    let profile: PublicUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.username, register_req.username);
}

#[tokio::test]
async fn test_get_unknown_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/no-such-user-anywhere").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Question Tests
// ============================================================================

#[tokio::test]
async fn test_ask_question() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let question_req = CreateQuestionRequest::to_user(&asked.user.id, "What is your favorite crate?");
    let response = server
        .post_auth("/api/v1/questions", &asker.access_token, &question_req)
        .await
        .unwrap();
    let question: QuestionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(question.asked_user_id, asked.user.id);
    assert_eq!(question.asker_id.as_deref(), Some(asker.user.id.as_str()));
}

#[tokio::test]
async fn test_ask_question_anonymously() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asked) = register(&server).await;

    // No auth header at all
    let question_req = CreateQuestionRequest::anonymous(&asked.user.id, "Who are you?");
    let response = server
        .post("/api/v1/questions", &question_req)
        .await
        .unwrap();
    let question: QuestionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(question.asker_id.is_none());
}

#[tokio::test]
async fn test_unanswered_questions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let question_req = CreateQuestionRequest::to_user(&asked.user.id, "Pending question?");
    server
        .post_auth("/api/v1/questions", &asker.access_token, &question_req)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/questions/unanswered", &asked.access_token)
        .await
        .unwrap();
    let questions: Vec<QuestionResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question_text, "Pending question?");
}

#[tokio::test]
async fn test_question_batch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, first) = register(&server).await;
    let (_, second) = register(&server).await;

    let batch_req = CreateQuestionBatchRequest {
        asked_user_ids: vec![first.user.id.clone(), second.user.id.clone()],
        question_text: "Same question for both?".to_string(),
        anonymous: false,
    };
    let response = server
        .post_auth("/api/v1/questions/batch", &asker.access_token, &batch_req)
        .await
        .unwrap();
    let questions: Vec<QuestionResponse> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(questions.len(), 2);
}

#[tokio::test]
async fn test_delete_question() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let question_req = CreateQuestionRequest::to_user(&asked.user.id, "Delete me?");
    let response = server
        .post_auth("/api/v1/questions", &asker.access_token, &question_req)
        .await
        .unwrap();
    let question: QuestionResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The asker may not delete, only the recipient
    let response = server
        .delete_auth(
            &format!("/api/v1/questions/{}", question.id),
            &asker.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/questions/{}", question.id),
            &asked.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Answer Tests
// ============================================================================

#[tokio::test]
async fn test_answer_question() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let answer = ask_and_answer(&server, &asker, &asked, "Why Rust?").await;
    assert_eq!(answer.answer_text, "re: Why Rust?");
    assert_eq!(answer.likes, 0);
}

#[tokio::test]
async fn test_second_answer_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let answer = ask_and_answer(&server, &asker, &asked, "Once only?").await;

    let answer_req = CreateAnswerRequest {
        answer_text: "again".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/questions/{}/answers", answer.question_id),
            &asked.access_token,
            &answer_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_vote_on_answer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let answer = ask_and_answer(&server, &asker, &asked, "Vote for me?").await;

    let response = server
        .post_auth(
            &format!("/api/v1/answers/{}/vote", answer.id),
            &asker.access_token,
            &VoteRequest::like(),
        )
        .await
        .unwrap();
    let voted: AnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(voted.likes, 1);

    // Unlike twice: counter clamps at zero
    for _ in 0..2 {
        let response = server
            .post_auth(
                &format!("/api/v1/answers/{}/vote", answer.id),
                &asker.access_token,
                &VoteRequest::unlike(),
            )
            .await
            .unwrap();
        let voted: AnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(voted.likes, 0);
    }
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_on_answer() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (_, asked) = register(&server).await;

    let answer = ask_and_answer(&server, &asker, &asked, "Comments?").await;

    let comment_req = CreateCommentRequest {
        comment_text: "Nice answer".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/answers/{}/comments", answer.id),
            &asker.access_token,
            &comment_req,
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.comment_text, "Nice answer");

    let response = server
        .get(&format!("/api/v1/answers/{}/comments", answer.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
}

// ============================================================================
// Friendship Tests
// ============================================================================

#[tokio::test]
async fn test_friend_request_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register(&server).await;
    let (_, bob) = register(&server).await;

    befriend(&server, &alice, &bob).await;

    // Both sides see the friendship
    let response = server
        .get_auth("/api/v1/friends", &alice.access_token)
        .await
        .unwrap();
    let friends: Vec<PublicUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.iter().any(|f| f.id == bob.user.id));

    let response = server
        .get_auth("/api/v1/friends", &bob.access_token)
        .await
        .unwrap();
    let friends: Vec<PublicUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.iter().any(|f| f.id == alice.user.id));

    // Remove from the other end
    let response = server
        .delete_auth(
            &format!("/api/v1/friends/{}", alice.user.id),
            &bob.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_self_friend_request_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register(&server).await;

    let request_body = SendFriendRequestRequest {
        to_user_id: alice.user.id.clone(),
        message: None,
    };
    let response = server
        .post_auth("/api/v1/friends/requests", &alice.access_token, &request_body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reject_friend_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register(&server).await;
    let (_, bob) = register(&server).await;

    let request_body = SendFriendRequestRequest {
        to_user_id: bob.user.id.clone(),
        message: Some("hi".to_string()),
    };
    let response = server
        .post_auth("/api/v1/friends/requests", &alice.access_token, &request_body)
        .await
        .unwrap();
    let request: FriendRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Bob sees the pending request
    let response = server
        .get_auth("/api/v1/friends/requests", &bob.access_token)
        .await
        .unwrap();
    let pending: Vec<FriendRequestResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(pending.iter().any(|r| r.id == request.id));

    // Reject is idempotent
    for _ in 0..2 {
        let response = server
            .post_auth(
                &format!("/api/v1/friends/requests/{}/reject", request.id),
                &bob.access_token,
                &(),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    // A rejected request can no longer be accepted
    let response = server
        .post_auth(
            &format!("/api/v1/friends/requests/{}/accept", request.id),
            &bob.access_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_wall_feed_shows_friend_answers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register(&server).await;
    let (_, bob) = register(&server).await;
    let (_, stranger) = register(&server).await;

    befriend(&server, &alice, &bob).await;

    let friend_answer = ask_and_answer(&server, &alice, &bob, "From a friend").await;
    ask_and_answer(&server, &alice, &stranger, "From a stranger").await;

    let response = server
        .get_auth("/api/v1/feed", &alice.access_token)
        .await
        .unwrap();
    let feed: PaginatedResponse<FeedItemResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert!(feed.data.iter().any(|item| item.answer.id == friend_answer.id));
    assert!(feed
        .data
        .iter()
        .all(|item| item.question.question_text != "From a stranger"));
}

#[tokio::test]
async fn test_user_answers_listing_and_stats() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, asker) = register(&server).await;
    let (asked_req, asked) = register(&server).await;

    for i in 0..3 {
        ask_and_answer(&server, &asker, &asked, &format!("q{i}")).await;
    }

    // Paginated answers listing
    let response = server
        .get(&format!(
            "/api/v1/users/{}/answers?limit=2",
            asked_req.username
        ))
        .await
        .unwrap();
    let page: PaginatedResponse<FeedItemResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.pagination.has_more);

    let cursor = page.pagination.next_cursor.unwrap();
    let response = server
        .get(&format!(
            "/api/v1/users/{}/answers?limit=2&before={}",
            asked_req.username, cursor
        ))
        .await
        .unwrap();
    let page2: PaginatedResponse<FeedItemResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page2.data.len(), 1);
    assert!(!page2.pagination.has_more);

    // Stats reflect the answers
    let response = server
        .get(&format!("/api/v1/users/{}/stats", asked_req.username))
        .await
        .unwrap();
    let stats: StatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.answers_count, 3);
    assert_eq!(stats.friends_count, 0);
}
