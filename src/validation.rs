use crate::blog::PostDraft;
use crate::form::{Field, SubmittedForm};
use serde::Serialize;

/// One optional message per field. Serializes with `null` for fields that passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
}

impl ValidationErrors {
    pub fn check(form: &SubmittedForm) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in enum_iterator::all::<Field>() {
            if !form.get(field).is_some_and(|value| value.is_filled()) {
                *errors.slot(field) = Some(format!("{} is required", field.label()));
            }
        }
        errors
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Slug => self.slug.as_deref(),
            Field::Markdown => self.markdown.as_deref(),
        }
    }

    pub fn has_errors(&self) -> bool {
        enum_iterator::all::<Field>().any(|field| self.get(field).is_some())
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Slug => &mut self.slug,
            Field::Markdown => &mut self.markdown,
        }
    }
}

/// Only meaningful once `ValidationErrors::check` came back clean. `Err` names the
/// first field whose value is not text.
pub fn into_draft(form: &SubmittedForm) -> Result<PostDraft, Field> {
    let text = |field: Field| form.text(field).map(str::to_owned).ok_or(field);

    Ok(PostDraft {
        title: text(Field::Title)?,
        slug: text(Field::Slug)?,
        markdown: text(Field::Markdown)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValue;

    fn full_form() -> SubmittedForm {
        SubmittedForm::from_pairs([
            ("title", "Hello"),
            ("slug", "hello-world"),
            ("markdown", "# Hi"),
        ])
    }

    #[test]
    fn test_full_form_passes() {
        let errors = ValidationErrors::check(&full_form());
        assert!(!errors.has_errors());
        assert_eq!(errors, ValidationErrors::default());
    }

    #[test]
    fn test_each_missing_field_is_reported_alone() {
        for missing in enum_iterator::all::<Field>() {
            let mut form = SubmittedForm::default();
            for field in enum_iterator::all::<Field>().filter(|field| *field != missing) {
                form.push(field.name(), FormValue::Text("value".to_string()));
            }

            let errors = ValidationErrors::check(&form);
            for field in enum_iterator::all::<Field>() {
                if field == missing {
                    assert_eq!(
                        errors.get(field),
                        Some(format!("{} is required", field.label()).as_str())
                    );
                } else {
                    assert_eq!(errors.get(field), None);
                }
            }
        }
    }

    #[test]
    fn test_empty_form_reports_all_fields() {
        let errors = ValidationErrors::check(&SubmittedForm::default());
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.slug.as_deref(), Some("Slug is required"));
        assert_eq!(errors.markdown.as_deref(), Some("Markdown is required"));
    }

    #[test]
    fn test_empty_title() {
        let form = SubmittedForm::from_pairs([("title", ""), ("slug", "x"), ("markdown", "y")]);
        let errors = ValidationErrors::check(&form);

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "title": "Title is required", "slug": null, "markdown": null })
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let form = SubmittedForm::from_pairs([("title", " "), ("slug", "x"), ("markdown", "y")]);
        assert!(!ValidationErrors::check(&form).has_errors());
    }

    #[test]
    fn test_into_draft_keeps_exact_values() {
        assert_eq!(
            into_draft(&full_form()),
            Ok(PostDraft {
                title: "Hello".to_string(),
                slug: "hello-world".to_string(),
                markdown: "# Hi".to_string(),
            })
        );
    }

    #[test]
    fn test_file_passes_presence_but_not_draft() {
        let mut form = SubmittedForm::from_pairs([("title", "Hello"), ("slug", "hello")]);
        form.push(
            "markdown",
            FormValue::File {
                file_name: "post.md".to_string(),
                content_type: Some("text/markdown".to_string()),
            },
        );

        assert!(!ValidationErrors::check(&form).has_errors());
        assert_eq!(into_draft(&form), Err(Field::Markdown));
    }
}
