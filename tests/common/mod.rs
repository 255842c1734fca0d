#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_manager_api::config::AppConfig;
use todo_manager_api::database::DatabaseManager;
use todo_manager_api::services::weather::FixedWeather;
use todo_manager_api::{app, AppState};

pub const PASSWORD: &str = "Password1";

/// Router over a fresh in-memory database, driven in-process
pub struct TestApp {
    router: Router,
    pub config: AppConfig,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).context("response body is not JSON")
    }
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        Self::with_config(AppConfig::testing()).await
    }

    pub async fn with_config(config: AppConfig) -> Result<Self> {
        let pool = DatabaseManager::connect(&config.database).await?;
        DatabaseManager::migrate(&pool).await?;

        let state = AppState::new(pool, config.clone(), Arc::new(FixedWeather::default()));
        Ok(Self {
            router: app(state),
            config,
        })
    }

    pub async fn request(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes().to_vec();

        Ok(TestResponse { status, body })
    }

    pub async fn get(&self, uri: &str, token: &str) -> Result<TestResponse> {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> Result<TestResponse> {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> Result<TestResponse> {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Sign up and return the `Bearer ...` header value
    pub async fn signup(&self, email: &str, role: &str) -> Result<String> {
        let response = self
            .request(
                Method::POST,
                "/auth/signup",
                None,
                Some(json!({ "email": email, "password": PASSWORD, "user_role": role })),
            )
            .await?;
        anyhow::ensure!(response.status == StatusCode::OK, "signup failed: {}", response.status);

        let token = response.json()?["bearer_token"]
            .as_str()
            .context("missing bearer_token")?
            .to_string();
        Ok(token)
    }

    /// Id of the user a token was issued for
    pub fn user_id(&self, token: &str) -> Result<i64> {
        let raw = todo_manager_api::auth::strip_bearer(token).context("not a bearer token")?;
        let claims = todo_manager_api::auth::decode_jwt(&self.config.security, raw)?;
        Ok(claims.user_id()?)
    }

    pub async fn create_todo(&self, token: &str, title: &str) -> Result<i64> {
        let response = self
            .post("/todos", token, json!({ "title": title, "contents": "Test Contents" }))
            .await?;
        anyhow::ensure!(response.status == StatusCode::OK, "todo creation failed: {}", response.status);
        response.json()?["id"].as_i64().context("missing todo id")
    }
}

/// Asserts a 400 with the given message
pub fn assert_bad_request(response: &TestResponse, message: &str) -> Result<()> {
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()?["message"], message);
    Ok(())
}
