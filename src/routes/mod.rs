use crate::state::State;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

pub mod page;

pub fn app(state: Arc<State>) -> NormalizePath<axum::Router> {
    NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .nest("/posts", page::route())
            .with_state(state)
            .layer(TraceLayer::new_for_http()),
    )
}
