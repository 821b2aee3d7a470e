//! HTML for the admin pages

pub mod admin;
pub mod new_post;

const INPUT_CLASS: &str = "w-full rounded border border-gray-500 px-2 py-1 text-lg";

/// Escape text for use in element content and double-quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap page content in the shared admin document
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main class="mx-auto max-w-4xl">
{content}
</main>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("<New>", "<p>body</p>");
        assert!(page.contains("<title>&lt;New&gt;</title>"));
        assert!(page.contains("<p>body</p>"));
    }
}
