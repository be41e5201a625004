mod api;
mod html;
mod options;

use anyhow::Error as AnyError;
use api::ServerState;
use clap::Parser;
use log::info;
use options::Cli;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    env_logger::init();
    let Cli { data_dir, listen } = Cli::parse();

    let state = Arc::new(ServerState::new(data_dir));
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("listening on {listen}");
    axum::serve(listener, router).await?;
    Ok(())
}
