mod common;

use axum::http::StatusCode;
use lectern::config::jwt::JwtConfig;
use lectern::utils::jwt::verify_activation_token;
use serde_json::json;
use tower::ServiceExt;

use common::{
    authed_request, create_test_user, generate_unique_email, json_request, login, response_json,
    setup_test_app, try_pool,
};

#[tokio::test]
async fn test_register_verify_login_flow() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();

    // Register: no user row yet, only an activation token.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"name": "Ada", "email": email, "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Otp sent to your mail");
    let activation_token = body["activation_token"].as_str().unwrap().to_string();

    // The OTP lives inside the token; recover it the way the server would.
    let claims = verify_activation_token(&activation_token, &JwtConfig::from_env()).unwrap();
    assert_eq!(claims.user.email, email);

    // Verify with the correct OTP creates the user.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/verify",
            json!({"otp": claims.otp, "activation_token": activation_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "User created successfully");

    // Login returns a session token and the user with the default role.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": email, "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Welcome back Ada");
    assert_eq!(body["user"]["role"], "user");
    let token = body["token"].as_str().unwrap().to_string();

    // The access guard accepts the session token.
    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/auth/me", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], email);
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    create_test_user(&pool, &email, "password123", "user").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"name": "Ada", "email": email, "password": "password123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn test_verify_with_wrong_otp_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            json!({"name": "Ada", "email": email, "password": "password123"}),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let activation_token = body["activation_token"].as_str().unwrap().to_string();

    let claims = verify_activation_token(&activation_token, &JwtConfig::from_env()).unwrap();
    let wrong_otp = (claims.otp + 1) % 1_000_000;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/verify",
            json!({"otp": wrong_otp, "activation_token": activation_token}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Incorrect OTP");
}

#[tokio::test]
async fn test_verify_with_tampered_token_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/verify",
            json!({"otp": 123456, "activation_token": "tampered.token.value"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "OTP expired");
}

#[tokio::test]
async fn test_login_unknown_email_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": generate_unique_email(), "password": "password123"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid User");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    create_test_user(&pool, &email, "password123", "user").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": email, "password": "not-the-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Incorrect Password");
}

#[tokio::test]
async fn test_profile_without_token_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/api/auth/me")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Token missing");
}

#[tokio::test]
async fn test_profile_with_garbage_token_rejected() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(authed_request("GET", "/api/auth/me", "garbage.token.value"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_forgot_and_reset_password_flow() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    create_test_user(&pool, &email, "oldpassword1", "user").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/forgot-password",
            json!({"email": email}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The reset mail is fire-and-forget; rebuild the token the way the
    // server does to drive the second half of the flow.
    let token =
        lectern::utils::jwt::create_reset_token(&email, &JwtConfig::from_env()).unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/auth/reset-password?token={}", token),
            json!({"password": "newpassword1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Password Reset");

    // Old password no longer works, new one does.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": email, "password": "oldpassword1"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    login(&app, &email, "newpassword1").await;
}

#[tokio::test]
async fn test_reset_password_requires_unexpired_stamp() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    create_test_user(&pool, &email, "oldpassword1", "user").await;

    // A valid token alone must not authorize a reset: the stamp is null
    // because forgot-password never ran.
    let token =
        lectern::utils::jwt::create_reset_token(&email, &JwtConfig::from_env()).unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/auth/reset-password?token={}", token),
            json!({"password": "newpassword1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Reset token expired");
}

#[tokio::test]
async fn test_reset_password_rejects_expired_stamp() {
    let Some(pool) = try_pool().await else { return };
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    create_test_user(&pool, &email, "oldpassword1", "user").await;

    // Backdate the stamp past the window.
    sqlx::query(
        "UPDATE users SET reset_password_expire = now() - interval '10 minutes' WHERE email = $1",
    )
    .bind(&email)
    .execute(&pool)
    .await
    .unwrap();

    let token =
        lectern::utils::jwt::create_reset_token(&email, &JwtConfig::from_env()).unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/auth/reset-password?token={}", token),
            json!({"password": "newpassword1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Reset token expired");
}
