use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use halalscan_api::application::http::server::http_server::{router, state};
use halalscan_api::args::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(Args::parse());

    let state = state(args.clone());
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("halalscan api listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
