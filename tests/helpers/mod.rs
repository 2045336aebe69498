//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use ledgerjobs_core::config::AppConfig;
use ledgerjobs_database::repositories::JobRepository;
use ledgerjobs_entity::job::model::CreateJob;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = ledgerjobs_database::connect_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        ledgerjobs_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = ledgerjobs_api::app::build_state(config.clone(), db_pool.clone())
            .await
            .expect("Failed to build app state");
        let router = ledgerjobs_api::build_app(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["talent_profiles", "saved_jobs", "jobs", "sessions", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Sign up a user through the API and return their access token
    pub async fn signup(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );

        response.data("access_token").as_str().unwrap().to_string()
    }

    /// Insert a job listing directly and return its ID
    pub async fn seed_job(&self, title: &str, salary_min: Option<i32>) -> Uuid {
        let repo = JobRepository::new(self.db_pool.clone());
        let job = repo
            .create(&CreateJob {
                title: title.to_string(),
                company: "Test Practice".to_string(),
                description: format!("{title} role for integration testing"),
                location: "Dublin".to_string(),
                location_category: Some("dublin".to_string()),
                city: Some("Dublin".to_string()),
                routine: Some("hybrid".to_string()),
                employment_type: Some("permanent".to_string()),
                experience_level: Some("mid".to_string()),
                min_experience: Some(3),
                salary_min,
                salary_max: salary_min.map(|s| s + 15_000),
                salary_range: None,
                perks: None,
                job_url: "https://example.com/job".to_string(),
                posted_date: Some(chrono::Utc::now()),
                closing_date: None,
            })
            .await
            .expect("Failed to seed job");
        job.id
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Field from the `data` envelope of a success response
    pub fn data(&self, field: &str) -> &Value {
        self.body
            .get("data")
            .and_then(|d| d.get(field))
            .unwrap_or(&Value::Null)
    }
}
