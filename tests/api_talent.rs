//! Integration tests for talent profile endpoints.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn submit_and_read_profile() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("talent@test.ie", "password123").await;

    let body = serde_json::json!({
        "full_name": "Niamh Doyle",
        "email": "talent@test.ie",
        "current_location": "Galway",
        "salary_expectation": "€70k",
    });

    let submit = app
        .request("PUT", "/api/talent/profile", Some(body), Some(&token))
        .await;
    assert_eq!(submit.status, StatusCode::OK);
    assert_eq!(submit.data("full_name").as_str().unwrap(), "Niamh Doyle");

    let read = app
        .request("GET", "/api/talent/profile", None, Some(&token))
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.data("current_location").as_str().unwrap(), "Galway");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn resubmission_updates_in_place() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("resubmit@test.ie", "password123").await;

    let first = serde_json::json!({
        "full_name": "Liam Walsh",
        "email": "resubmit@test.ie",
        "current_location": "Cork",
    });
    app.request("PUT", "/api/talent/profile", Some(first), Some(&token))
        .await;

    let second = serde_json::json!({
        "full_name": "Liam Walsh",
        "email": "resubmit@test.ie",
        "current_location": "Dublin",
    });
    let response = app
        .request("PUT", "/api/talent/profile", Some(second), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data("current_location").as_str().unwrap(), "Dublin");

    // Still a single profile row for the user.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talent_profiles")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn resume_upload_sets_the_profile_path() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("cv@test.ie", "password123").await;

    let profile = serde_json::json!({
        "full_name": "Orla Byrne",
        "email": "cv@test.ie",
        "current_location": "Limerick",
    });
    app.request("PUT", "/api/talent/profile", Some(profile), Some(&token))
        .await;

    let boundary = "test-boundary";
    let multipart_body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"cv.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         %PDF-1.4 not really a pdf\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/talent/resume")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(multipart_body))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let path = body["data"]["resume_path"].as_str().unwrap();
    assert!(path.starts_with("resumes/"));
    assert!(path.ends_with(".pdf"));

    // The stored document can be fetched back by its owner.
    let download = Request::builder()
        .method("GET")
        .uri("/api/talent/resume")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(download).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn rejected_extension_is_a_validation_error() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("exe@test.ie", "password123").await;

    let profile = serde_json::json!({
        "full_name": "Test User",
        "email": "exe@test.ie",
        "current_location": "Dublin",
    });
    app.request("PUT", "/api/talent/profile", Some(profile), Some(&token))
        .await;

    let boundary = "test-boundary";
    let multipart_body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"cv.exe\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         MZ\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/talent/resume")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(multipart_body))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn newsletter_subscribe_is_unavailable_when_disabled() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/newsletter/subscribe",
            Some(serde_json::json!({ "email": "reader@test.ie" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}
