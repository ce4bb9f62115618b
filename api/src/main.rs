use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use clap::Parser;
use larder_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let router = router(app_state)?;

    let host: IpAddr = args.server.host.parse()?;
    let addr = SocketAddr::new(host, args.server.port);

    info!("Larder API listening on {addr}");
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
