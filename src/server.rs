//! Webhook HTTP server.
//!
//! Routes:
//! - `GET /webhook`  platform verification handshake
//! - `POST /webhook` inbound message batches
//! - `GET /privacy`, `GET /terms`  static policy pages
//! - `GET /`, `GET /health`  liveness checks

use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::platform::messenger::WebhookPayload;
use crate::platform::MessageSender;
use crate::responder::{self, Reply};

// The policy pages are embedded at compile time.
const PRIVACY_HTML: &str = include_str!("../static/privacy.html");
const TERMS_HTML: &str = include_str!("../static/terms.html");

const EVENT_RECEIVED: &str = "EVENT_RECEIVED";

// ── Shared state ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    verify_token: Arc<str>,
    sender: Arc<dyn MessageSender>,
    /// Background reply deliveries that may still be running
    deliveries: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl AppState {
    pub fn new(verify_token: &str, sender: Arc<dyn MessageSender>) -> Self {
        Self {
            verify_token: Arc::from(verify_token),
            sender,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Run a delivery in the background, reaping ones that already finished.
    async fn track_delivery<F>(&self, delivery: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut deliveries = self.deliveries.lock().await;
        deliveries.retain(|handle| !handle.is_finished());
        deliveries.push(tokio::spawn(delivery));
    }

    /// Wait for every pending delivery to finish.
    pub async fn drain_deliveries(&self) {
        let pending: Vec<JoinHandle<()>> = self.deliveries.lock().await.drain(..).collect();
        if !pending.is_empty() {
            info!("Waiting for {} pending deliveries", pending.len());
        }
        for result in join_all(pending).await {
            if let Err(e) = result {
                error!("Delivery task failed: {}", e);
            }
        }
    }
}

// ── Request / response types ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct VerifyParams {
    #[serde(rename = "hub.mode")]
    mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    challenge: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    has_access_token: bool,
}

// ── Router ─────────────────────────────────────────────────────────────────────

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .route("/privacy", get(privacy))
        .route("/terms", get(terms))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C, then let pending
/// replies finish.
pub async fn serve(config: &Config, sender: Arc<dyn MessageSender>) -> Result<()> {
    let state = AppState::new(&config.messenger.verify_token, sender);
    let app = router(state.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Bot server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server error")?;

    state.drain_deliveries().await;
    Ok(())
}

// ── Handlers ───────────────────────────────────────────────────────────────────

async fn index() -> &'static str {
    "🤖 Hestia Tourism Chatbot is running!"
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
        has_access_token: state.sender.is_configured(),
    })
}

async fn privacy() -> Html<&'static str> {
    Html(PRIVACY_HTML)
}

async fn terms() -> Html<&'static str> {
    Html(TERMS_HTML)
}

async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Response {
    info!("Webhook verification request received");

    let subscribed = params.mode.as_deref() == Some("subscribe");
    let token_ok = params.verify_token.as_deref() == Some(&*state.verify_token);

    if subscribed && token_ok {
        info!("Webhook verified");
        (StatusCode::OK, params.challenge.unwrap_or_default()).into_response()
    } else {
        warn!("Webhook verification failed");
        StatusCode::FORBIDDEN.into_response()
    }
}

async fn receive_webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Response {
    if !payload.is_page() {
        warn!("Webhook not from a page subscription: {:?}", payload.object);
        return StatusCode::NOT_FOUND.into_response();
    }

    let outgoing: Vec<(String, Reply)> = payload
        .incoming_messages()
        .into_iter()
        .map(|msg| {
            debug!("Classifying {:?} from {}", msg.kind, msg.sender_id);
            let reply = responder::respond(&msg.text);
            (msg.sender_id, reply)
        })
        .collect();

    // Acknowledge right away; delivery runs in the background so a slow or
    // failing Send API never makes the platform redeliver the batch.
    if !outgoing.is_empty() {
        state
            .track_delivery(deliver(state.sender.clone(), outgoing))
            .await;
    }

    (StatusCode::OK, EVENT_RECEIVED).into_response()
}

/// Send every reply concurrently, logging failures per recipient.
pub async fn deliver(sender: Arc<dyn MessageSender>, outgoing: Vec<(String, Reply)>) {
    let sender = &sender;
    join_all(outgoing.iter().map(|(recipient, reply)| async move {
        info!(
            "Replying to {} with {:?} ({})",
            recipient, reply.topic, reply.language
        );
        if let Err(e) = sender.send(recipient, reply.text).await {
            error!("Unable to send message to {}: {:#}", recipient, e);
        }
    }))
    .await;
}

// ── Tests ──────────────────────────────────────────────────────────────────────
