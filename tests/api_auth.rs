//! Integration tests for the authentication flow.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn signup_then_login() {
    let app = helpers::TestApp::new().await;
    app.signup("aoife@test.ie", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "aoife@test.ie",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data("access_token").is_string());
    assert!(response.data("refresh_token").is_string());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn duplicate_signup_conflicts() {
    let app = helpers::TestApp::new().await;
    app.signup("dup@test.ie", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "dup@test.ie",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn login_wrong_password_is_unauthorized() {
    let app = helpers::TestApp::new().await;
    app.signup("sean@test.ie", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "sean@test.ie",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn me_returns_the_authenticated_user() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("me@test.ie", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("email").as_str().unwrap(), "me@test.ie");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn me_without_token_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn refresh_rotates_tokens() {
    let app = helpers::TestApp::new().await;

    let signup = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "email": "rotate@test.ie",
                "password": "password123",
            })),
            None,
        )
        .await;
    let refresh_token = signup.data("refresh_token").as_str().unwrap().to_string();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The superseded token no longer refreshes.
    let replay = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({ "refresh_token": refresh_token })),
            None,
        )
        .await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn logout_revokes_the_session() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("leave@test.ie", "password123").await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}
