//! HTTP server for the matching engine.
//!
//! Endpoints: health, place order, list orders, list trades, order book snapshot.

use limit_order_engine::api;
use limit_order_engine::EngineConfig;
use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = env_logger::try_init();
    let config = EngineConfig::from_env();

    let app = api::create_router(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        "listening on http://{} max_quantity={} max_price={} price_scale={}",
        addr, config.limits.max_quantity, config.limits.max_price, config.limits.price_scale
    );
    axum::serve(listener, app.into_make_service()).await
}
