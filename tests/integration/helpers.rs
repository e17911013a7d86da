//! Shared test helpers: a stub remote authority and store builders.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use star4ce_client::AuthClient;
use star4ce_core::config::api::ApiConfig;
use star4ce_session::{MemoryBackend, SessionStore};

/// Email/password pair the stub authority accepts.
pub const TEST_EMAIL: &str = "lead@star4ce.com";
pub const TEST_PASSWORD: &str = "hunter2";
/// Token the stub authority issues and recognizes.
pub const TEST_TOKEN: &str = "abc123";

/// How the stub authority answers `GET /auth/me`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeMode {
    /// 200 with `{"ok": true}` for the known token.
    Affirmative,
    /// 200 with a body lacking the affirmative flag.
    Unaffirmed,
    /// 401 with an empty JSON object.
    Rejecting,
    /// Affirmative, but only after a short delay (for cancellation tests).
    SlowAffirmative,
    /// Never answers within any reasonable timeout.
    Hanging,
}

#[derive(Clone)]
struct StubState {
    mode: MeMode,
    me_hits: Arc<AtomicUsize>,
}

/// A stub Star4ce authority listening on an ephemeral local port.
pub struct StubAuthority {
    /// Base URL to point the client at.
    pub base_url: String,
    me_hits: Arc<AtomicUsize>,
}

impl StubAuthority {
    /// Start the stub with the given identity-check behavior.
    pub async fn spawn(mode: MeMode) -> Self {
        let me_hits = Arc::new(AtomicUsize::new(0));
        let state = StubState {
            mode,
            me_hits: Arc::clone(&me_hits),
        };

        let router = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/me", get(me))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub authority");
        let addr = listener.local_addr().expect("No local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            me_hits,
        }
    }

    /// Number of identity checks the authority has received.
    pub fn me_hits(&self) -> usize {
        self.me_hits.load(Ordering::SeqCst)
    }

    /// A client pointed at this stub with a short verification timeout.
    pub fn client(&self) -> AuthClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            verify_timeout_seconds: 1,
        };
        AuthClient::new(&config).expect("Failed to build client")
    }
}

/// An empty in-memory session store.
pub fn memory_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryBackend::new()))
}

async fn login(Json(body): Json<Value>) -> Result<Json<Value>, (StatusCode, String)> {
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body
        .get("password")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if email == TEST_EMAIL && password == TEST_PASSWORD {
        Ok(Json(json!({
            "token": TEST_TOKEN,
            "role": "manager",
            "email": email,
        })))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            "invalid email or password".to_string(),
        ))
    }
}

async fn me(State(state): State<StubState>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    state.me_hits.fetch_add(1, Ordering::SeqCst);

    let bearer_ok = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {TEST_TOKEN}"))
        .unwrap_or(false);

    match state.mode {
        MeMode::Affirmative if bearer_ok => (
            StatusCode::OK,
            Json(json!({"ok": true, "role": "manager", "email": TEST_EMAIL})),
        ),
        MeMode::Affirmative => (StatusCode::UNAUTHORIZED, Json(json!({}))),
        MeMode::Unaffirmed => (StatusCode::OK, Json(json!({}))),
        MeMode::Rejecting => (StatusCode::UNAUTHORIZED, Json(json!({}))),
        MeMode::SlowAffirmative => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            (StatusCode::OK, Json(json!({"ok": true})))
        }
        MeMode::Hanging => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            (StatusCode::OK, Json(json!({"ok": true})))
        }
    }
}
