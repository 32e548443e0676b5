//! Test helpers for integration tests
//!
//! Spawning test servers, authenticated requests and status assertions.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use glamora_api::{create_app, create_app_state};
use glamora_common::{hash_password, AppConfig};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, AuthResponse, RegisterRequest, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with test admin credentials and no rate limit
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick, so parallel tests never collide
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(request: RequestBuilder, token: Option<&str>) -> Result<Response> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), None).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)), Some(token)).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), None).await
    }

    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body), Some(token)).await
    }

    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.put(self.url(path)).json(body), Some(token)).await
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)), Some(token)).await
    }

    /// Register a fresh user and return its session
    pub async fn register_user(&self) -> Result<AuthResponse> {
        let response = self.post("/api/auth/register", &RegisterRequest::unique()).await?;
        assert_json(response, StatusCode::CREATED).await
    }

    /// Log in through the dashboard endpoint
    pub async fn admin_login(&self) -> Result<AuthResponse> {
        let body = serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD });
        let response = self.post("/api/admin/login", &body).await?;
        assert_json(response, StatusCode::OK).await
    }
}

/// Configuration from the environment with test admin credentials.
///
/// Each server gets its own admin email so concurrent tests do not race
/// on creating the admin account.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    config.admin.username = ADMIN_USERNAME.to_string();
    config.admin.password_hash = Some(hash_password(ADMIN_PASSWORD)?);
    config.admin.email = format!("admin{}-{}@glamora.test", std::process::id(), unique_suffix());
    config.rate_limit.requests_per_second = 0;

    Ok(config)
}

/// Skip unless PostgreSQL and Redis are configured
pub async fn check_test_env() -> bool {
    for var in ["DATABASE_URL", "REDIS_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert status and return the error code from the body
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: Value = assert_json(response, expected_status).await?;
    Ok(body["code"].as_str().unwrap_or_default().to_string())
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
