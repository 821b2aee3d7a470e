use super::{html_escape, INPUT_CLASS};
use crate::form::{Field, SubmittedForm};
use crate::submission::SubmissionState;
use crate::validation::ValidationErrors;

/// Moves the page into the submitting state in the browser while the request is in flight
const PENDING_SCRIPT: &str = r#"<script>
(function() {
    var form = document.getElementById('new-post');
    form.addEventListener('submit', function(event) {
        var button = form.querySelector('button[type="submit"]');
        if (button.disabled) {
            event.preventDefault();
            return;
        }
        button.disabled = true;
        button.textContent = form.dataset.pendingLabel;
    });
})();
</script>"#;

const BUTTON_CLASS: &str = "rounded bg-blue-500 py-2 px-4 text-white hover:bg-blue-600 focus:bg-blue-400 disabled:bg-blue-300";

/// What the new-post page shows: errors and values from the last attempt, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewPostPage<'a> {
    pub errors: Option<&'a ValidationErrors>,
    pub values: Option<&'a SubmittedForm>,
    pub state: SubmissionState,
}

impl NewPostPage<'_> {
    pub fn render(&self) -> String {
        super::layout("New Post", &self.render_form())
    }

    pub fn render_form(&self) -> String {
        let button_disabled = if self.state.controls_disabled() {
            " disabled"
        } else {
            ""
        };
        let busy = if self.state.is_pending() {
            r#" aria-busy="true""#
        } else {
            ""
        };

        format!(
            r#"<form id="new-post" method="post" data-pending-label="{pending_label}"{busy}>
{title_error}
<p>
<label>Post Title: <input type="text" name="title" class="{INPUT_CLASS}" value="{title}"></label>
</p>
{slug_error}
<p>
<label>Post Slug: <input type="text" name="slug" class="{INPUT_CLASS}" value="{slug}"></label>
</p>
{markdown_error}
<p>
<label for="markdown">Markdown:</label>
<br>
<textarea id="markdown" rows="20" name="markdown" class="{INPUT_CLASS} font-mono">
{markdown}</textarea>
</p>
<p class="text-right">
<button type="submit" class="{BUTTON_CLASS}"{button_disabled}>{label}</button>
</p>
</form>
{PENDING_SCRIPT}"#,
            pending_label = SubmissionState::Submitting.submit_label(),
            title_error = self.render_error(Field::Title),
            title = self.value(Field::Title),
            slug_error = self.render_error(Field::Slug),
            slug = self.value(Field::Slug),
            markdown_error = self.render_error(Field::Markdown),
            markdown = self.value(Field::Markdown),
            label = self.state.submit_label(),
        )
    }

    /// Always emits the paragraph so the layout doesn't shift when errors appear.
    fn render_error(&self, field: Field) -> String {
        match self.errors.and_then(|errors| errors.get(field)) {
            Some(message) => format!(
                r#"<p><em class="text-red-600">{}</em></p>"#,
                html_escape(message)
            ),
            None => "<p></p>".to_string(),
        }
    }

    fn value(&self, field: Field) -> String {
        self.values
            .and_then(|values| values.text(field))
            .map(html_escape)
            .unwrap_or_default()
    }
}
