//! REST API router for the matching engine.
//!
//! Used by the binary and by integration tests. Create with [`create_router`] or, to share
//! an existing engine, [`router`]. State travels as an `Extension` so the router is
//! `Router<()>` and works with `into_make_service()`. Every response carries
//! `Access-Control-Allow-Origin: *` and `OPTIONS` preflights are answered by the CORS layer.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::warn;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::config::EngineConfig;
use crate::engine::{Engine, SharedEngine};
use crate::types::NewOrder;

/// Shared app state: one engine per process.
#[derive(Clone)]
pub struct AppState {
    pub(crate) engine: SharedEngine,
}

/// Builds the router around a fresh engine (UUID ids, system clock).
pub fn create_router(config: &EngineConfig) -> Router<()> {
    router(SharedEngine::new(Engine::new(config.limits.clone())))
}

/// Builds the router around an existing engine. Commands are checked against that
/// engine's own limits.
pub fn router(engine: SharedEngine) -> Router<()> {
    let state = AppState { engine };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);
    Router::new()
        .route("/health", get(health))
        .route("/api/place-order", post(place_order))
        .route("/api/orders", get(list_orders))
        .route("/api/trades", get(list_trades))
        .route("/api/orderbook", get(order_book))
        .layer(Extension(state))
        .layer(cors)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn bad_request(error: &str, details: serde_json::Value) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": error, "details": details })),
    )
        .into_response()
}

fn describe_rejection(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonSyntaxError(e) if e.body_text().contains("EOF") => {
            "Request body is empty or incomplete"
        }
        JsonRejection::JsonSyntaxError(_) => "Request body contains invalid JSON syntax",
        JsonRejection::JsonDataError(_) => "Request body contains invalid data types",
        JsonRejection::MissingJsonContentType(_) => "Content-Type must be application/json",
        _ => "Invalid JSON format in request body",
    }
}

async fn place_order(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Response {
    let cmd = match payload {
        Ok(Json(cmd)) => cmd,
        Err(rejection) => {
            warn!("place-order body rejected: {}", rejection.body_text());
            return bad_request(describe_rejection(&rejection), json!(rejection.body_text()));
        }
    };
    let violations = state.engine.with(|e| cmd.violations(e.limits()));
    if !violations.is_empty() {
        let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
        return bad_request("Validation failed", json!(details));
    }
    match state.engine.submit(&cmd) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => bad_request("Validation failed", json!([e.to_string()])),
    }
}

async fn list_orders(Extension(state): Extension<AppState>) -> Response {
    let orders = state.engine.list_orders();
    let count = orders.len();
    Json(json!({ "orders": orders, "count": count })).into_response()
}

async fn list_trades(Extension(state): Extension<AppState>) -> Response {
    let trades = state.engine.list_trades();
    let count = trades.len();
    Json(json!({ "trades": trades, "count": count })).into_response()
}

async fn order_book(Extension(state): Extension<AppState>) -> Response {
    let snapshot = state.engine.snapshot_book();
    let (buy_count, sell_count) = (snapshot.bids.len(), snapshot.asks.len());
    Json(json!({
        "orderbook": snapshot,
        "buy_count": buy_count,
        "sell_count": sell_count,
    }))
    .into_response()
}
