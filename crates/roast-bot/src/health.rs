//! Health check and metrics endpoint

use std::sync::Arc;
use std::time::SystemTime;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Health check status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub bot_username: Option<String>,
}

/// Metrics data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub messages_received: u64,
    pub llm_replies: u64,
    pub roasts_sent: u64,
    pub active_chats: usize,
    pub errors: u64,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<RwLock<Metrics>>,
    pub start_time: SystemTime,
    pub bot_username: Option<String>,
}

impl AppState {
    pub fn new(bot_username: Option<String>) -> Self {
        Self {
            metrics: Arc::new(RwLock::new(Metrics::default())),
            start_time: SystemTime::now(),
            bot_username,
        }
    }

    pub async fn increment_messages_received(&self) {
        self.metrics.write().await.messages_received += 1;
    }

    pub async fn increment_llm_replies(&self) {
        self.metrics.write().await.llm_replies += 1;
    }

    pub async fn increment_roasts_sent(&self) {
        self.metrics.write().await.roasts_sent += 1;
    }

    pub async fn increment_errors(&self) {
        self.metrics.write().await.errors += 1;
    }

    pub async fn set_active_chats(&self, count: usize) {
        self.metrics.write().await.active_chats = count;
    }
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    let uptime = state.start_time.elapsed().unwrap_or_default().as_secs();

    Json(HealthStatus {
        status: "healthy".to_string(),
        uptime_seconds: uptime,
        bot_username: state.bot_username.clone(),
    })
}

async fn metrics_handler(State(state): State<AppState>) -> Json<Metrics> {
    let metrics = state.metrics.read().await;
    Json(metrics.clone())
}

/// Liveness check (process is alive)
async fn live_handler() -> StatusCode {
    StatusCode::OK
}

/// Create health check router
pub fn create_health_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/live", get(live_handler))
        .with_state(state)
}

/// Start health check server
pub async fn start_health_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_health_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Health check server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_username() {
        let state = AppState::new(Some("RoastBot".to_string()));

        let (status, body) = get_json(create_health_router(state), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["bot_username"], "RoastBot");
    }

    #[tokio::test]
    async fn test_live() {
        let (status, _) = get_json(create_health_router(AppState::new(None)), "/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_reflect_counters() {
        let state = AppState::new(None);
        state.increment_messages_received().await;
        state.increment_messages_received().await;
        state.increment_llm_replies().await;
        state.increment_roasts_sent().await;
        state.increment_errors().await;
        state.set_active_chats(3).await;

        let (status, body) = get_json(create_health_router(state), "/metrics").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages_received"], 2);
        assert_eq!(body["llm_replies"], 1);
        assert_eq!(body["roasts_sent"], 1);
        assert_eq!(body["errors"], 1);
        assert_eq!(body["active_chats"], 3);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = get_json(create_health_router(AppState::new(None)), "/ready").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
