use clap::Parser;
use cli::Args;
use errors::StartupError;
use tokio::net::TcpListener;

mod app_context;
mod auth;
mod cli;
mod errors;
mod geometry;
mod health;
mod http;
mod logging;
mod players;
mod scoring;
mod storage;
mod tasks;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let args = Args::parse();
    logging::init(&args);
    tracing::info!(
        "Starting {} v{}.",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let app_context = app_context::init(&args)?;
    tracing::info!(
        tasks = app_context.catalog.task_count(),
        "Loaded the task catalog."
    );
    let router = http::router::new(&args, app_context);

    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await?;
    Ok(())
}
