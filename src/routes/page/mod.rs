use crate::state::NestedRouter;
use axum::routing::get;

mod admin;
mod new_post;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/admin", get(admin::get))
        .route("/admin/new", get(new_post::get).post(new_post::post))
}
