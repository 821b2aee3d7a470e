use axum::ServiceExt;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod action;
mod blog;
mod config;
mod form;
mod render;
mod routes;
mod state;
mod store;
mod submission;
mod validation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = std::sync::Arc::new(state::State::new(
        std::sync::Arc::new(store::FsPostStore::new(&config.store)),
        config.submit_delay(),
    ));
    if !state.submit_delay.is_zero() {
        tracing::warn!(
            "New post submissions are delayed by {:?}",
            state.submit_delay
        );
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(
        "Serving blog admin at http://{}{}",
        config.addr(),
        blog::ADMIN_PATH
    );

    axum::serve(
        listener,
        ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
