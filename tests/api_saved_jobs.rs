//! Integration tests for saved-job endpoints.

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn save_and_list() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("saver@test.ie", "password123").await;
    let job_id = app.seed_job("Audit Senior", Some(65_000)).await;

    let save = app
        .request(
            "POST",
            &format!("/api/saved-jobs/{job_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(save.status, StatusCode::OK);
    assert!(save.data("saved").as_bool().unwrap());
    assert!(!save.data("already_saved").as_bool().unwrap());

    let list = app
        .request("GET", "/api/saved-jobs", None, Some(&token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"].as_str().unwrap(), "Audit Senior");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn duplicate_save_succeeds_and_reports_it() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("again@test.ie", "password123").await;
    let job_id = app.seed_job("Tax Senior", Some(65_000)).await;

    let path = format!("/api/saved-jobs/{job_id}");
    app.request("POST", &path, None, Some(&token)).await;

    let second = app.request("POST", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.data("saved").as_bool().unwrap());
    assert!(second.data("already_saved").as_bool().unwrap());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn saving_a_missing_job_is_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("ghost@test.ie", "password123").await;

    let response = app
        .request(
            "POST",
            &format!("/api/saved-jobs/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn unsave_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("remover@test.ie", "password123").await;
    let job_id = app.seed_job("Fund Accountant", Some(60_000)).await;

    let path = format!("/api/saved-jobs/{job_id}");
    app.request("POST", &path, None, Some(&token)).await;

    let first = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    // Removing an already-removed job is still a success.
    let second = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn saved_ids_are_scoped_to_the_user() {
    let app = helpers::TestApp::new().await;
    let alice = app.signup("alice@test.ie", "password123").await;
    let bob = app.signup("bob@test.ie", "password123").await;
    let job_id = app.seed_job("Controller", Some(90_000)).await;

    app.request(
        "POST",
        &format!("/api/saved-jobs/{job_id}"),
        None,
        Some(&alice),
    )
    .await;

    let alices = app
        .request("GET", "/api/saved-jobs/ids", None, Some(&alice))
        .await;
    assert_eq!(alices.body["data"].as_array().unwrap().len(), 1);

    let bobs = app
        .request("GET", "/api/saved-jobs/ids", None, Some(&bob))
        .await;
    assert_eq!(bobs.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn saved_endpoints_require_auth() {
    let app = helpers::TestApp::new().await;
    let job_id = app.seed_job("Analyst", Some(55_000)).await;

    let response = app
        .request("POST", &format!("/api/saved-jobs/{job_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
