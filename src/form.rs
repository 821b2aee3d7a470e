use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Form;

/// The fields of the new-post form, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Field {
    Title,
    Slug,
    Markdown,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Slug => "slug",
            Field::Markdown => "markdown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Slug => "Slug",
            Field::Markdown => "Markdown",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    /// A multipart part that came with a filename. Its contents are never read.
    File {
        file_name: String,
        content_type: Option<String>,
    },
}

impl FormValue {
    /// Absent values and empty text don't count as filled in. Files always do.
    pub fn is_filled(&self) -> bool {
        match self {
            FormValue::Text(text) => !text.is_empty(),
            FormValue::File { .. } => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::File { .. } => None,
        }
    }
}

/// A submitted form body, either urlencoded or multipart, in submission order.
#[derive(Debug, Clone, Default)]
pub struct SubmittedForm {
    values: Vec<(String, FormValue)>,
}

impl SubmittedForm {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> SubmittedForm
    where
        K: Into<String>,
        V: Into<String>,
    {
        SubmittedForm {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), FormValue::Text(value.into())))
                .collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: FormValue) {
        self.values.push((name.into(), value));
    }

    /// First value submitted under the field's name, if any.
    pub fn get(&self, field: Field) -> Option<&FormValue> {
        self.values
            .iter()
            .find(|(name, _)| name == field.name())
            .map(|(_, value)| value)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(FormValue::as_text)
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(SubmittedForm::from_pairs(pairs));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let mut form = SubmittedForm::default();

        while let Some(part) = multipart
            .next_field()
            .await
            .map_err(IntoResponse::into_response)?
        {
            let Some(name) = part.name().map(str::to_owned) else {
                continue;
            };

            let value = match part.file_name().map(str::to_owned) {
                Some(file_name) => FormValue::File {
                    file_name,
                    content_type: part.content_type().map(str::to_owned),
                },
                None => FormValue::Text(part.text().await.map_err(IntoResponse::into_response)?),
            };
            form.push(name, value);
        }

        Ok(form)
    }
}
