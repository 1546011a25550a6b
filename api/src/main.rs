use std::sync::Arc;

use clap::Parser;
use recipesnap_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let app_state = state(args.clone());
    let app = router(app_state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("RecipeSnap API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
