use crate::blog::Post;
use crate::form::{Field, SubmittedForm};
use crate::store::StoreError;
use crate::validation::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum ActionOutcome {
    Invalid(ValidationErrors),
    Created(Post),
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("{0} must be a string")]
    MalformedField(Field),
    #[error("could not create post: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        tracing::error!("Error handling new post submission: {}", self);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// Handles one submission of the new-post form: waits out the configured delay,
/// checks that every field was filled in, then hands the draft to the store.
pub async fn create_post(
    state: &crate::state::State,
    form: &SubmittedForm,
) -> Result<ActionOutcome, ActionError> {
    if !state.submit_delay.is_zero() {
        tokio::time::sleep(state.submit_delay).await;
    }

    let errors = ValidationErrors::check(form);
    if errors.has_errors() {
        tracing::debug!("Rejected new post submission: {errors:?}");
        return Ok(ActionOutcome::Invalid(errors));
    }

    let draft = crate::validation::into_draft(form).map_err(ActionError::MalformedField)?;
    let post = state.store.create_post(draft).await?;

    tracing::info!("Created post {} ({})", post.id, post.slug);
    Ok(ActionOutcome::Created(post))
}
