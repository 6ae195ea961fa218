//! Shared test helpers for integration tests.

use axum::body::Body;
use axum::Router;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use cantina_api::{build_app, build_state, AppState};
use cantina_auth::password::PasswordHasher;
use cantina_core::config::AppConfig;
use cantina_entity::user::{CreateUser, Role, User};

/// The signing key every test app uses.
pub const TEST_SECRET: &str = "integration-test-key";

/// Test application context.
pub struct TestApp {
    /// Shared state; tests reach through it to seed users directly.
    pub state: AppState,
}

/// A collected response: status, parsed JSON body (Null for non-JSON), and
/// headers.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub headers: HeaderMap,
}

impl TestResponse {
    /// The session cookie pair (`name=value`) from Set-Cookie, if any.
    pub fn session_cookie(&self) -> Option<String> {
        let raw = self.headers.get("set-cookie")?.to_str().ok()?;
        Some(raw.split(';').next()?.trim().to_string())
    }
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.validate().expect("test config must validate");

        Self {
            state: build_state(config),
        }
    }

    fn router(&self) -> Router {
        build_app(self.state.clone())
    }

    /// Seed a user straight into the store.
    pub async fn create_user(&self, email: &str, secret: &str, role: Role) -> User {
        let hasher = PasswordHasher::new();
        self.state
            .users
            .insert(User::from_create(CreateUser {
                name: "Test User".to_string(),
                email: email.to_string(),
                password_hash: hasher.hash(secret).expect("hashing"),
                address: None,
                role,
            }))
            .await
            .expect("seeding user")
    }

    /// Issue a JSON request against the app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = bearer {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        self.send(request).await
    }

    /// Issue a form-encoded request (browser-style submissions).
    pub async fn form_request(
        &self,
        path: &str,
        form: &str,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }

        let request = builder.body(Body::from(form.to_string())).expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router().oneshot(request).await.expect("oneshot");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            headers,
        }
    }

    /// Log in through the API and return the issued token.
    pub async fn login(&self, email: &str, secret: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "secret": secret })),
                None,
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }

    /// Log in through the web form and return the session cookie pair.
    pub async fn web_login(&self, email: &str, secret: &str) -> String {
        let response = self
            .form_request("/login", &format!("email={email}&secret={secret}"), None)
            .await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        response.session_cookie().expect("session cookie after login")
    }
}

/// Sign an already-expired token under the test key.
pub fn expired_token(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = cantina_auth::jwt::Claims {
        sub: subject.to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("signing expired token")
}
