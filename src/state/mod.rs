use crate::store::PostStore;
use std::sync::Arc;
use std::time::Duration;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub store: Arc<dyn PostStore>,
    /// Slept at the start of every new-post submission.
    pub submit_delay: Duration,
}

impl State {
    pub fn new(store: Arc<dyn PostStore>, submit_delay: Duration) -> State {
        State {
            store,
            submit_delay,
        }
    }
}
