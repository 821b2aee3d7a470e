use crate::action::{ActionError, ActionOutcome};
use crate::form::SubmittedForm;
use crate::render::new_post::NewPostPage;
use crate::state::SharedState;
use crate::submission::{Resolution, SubmissionState};
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;

pub(super) async fn get() -> Html<String> {
    Html(NewPostPage::default().render())
}

pub(super) async fn post(
    State(state): SharedState,
    headers: HeaderMap,
    form: SubmittedForm,
) -> Result<Response, ActionError> {
    let outcome = crate::action::create_post(&state, &form).await?;
    let page_state = SubmissionState::Idle
        .submit()
        .resolve(Resolution::from(&outcome));

    match outcome {
        ActionOutcome::Created(post) => {
            tracing::debug!(
                "Redirecting to {} after creating post {}",
                crate::blog::ADMIN_PATH,
                post.id
            );
            Ok(Redirect::to(crate::blog::ADMIN_PATH).into_response())
        }
        ActionOutcome::Invalid(errors) if wants_json(&headers) => Ok(Json(errors).into_response()),
        ActionOutcome::Invalid(errors) => Ok(Html(
            NewPostPage {
                errors: Some(&errors),
                values: Some(&form),
                state: page_state,
            }
            .render(),
        )
        .into_response()),
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
