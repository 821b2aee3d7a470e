use super::html_escape;
use crate::blog::{Post, NEW_POST_PATH};

pub fn render_post_list(posts: &[Post]) -> String {
    let items = if posts.is_empty() {
        "<p>No posts yet.</p>".to_string()
    } else {
        let items = posts
            .iter()
            .map(|post| {
                format!(
                    r#"<li><span class="text-blue-600">{}</span> <code>{}</code></li>"#,
                    html_escape(&post.title),
                    html_escape(&post.slug),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("<ul>\n{items}\n</ul>")
    };

    let content = format!(
        r#"<h1 class="my-6 border-b-2 text-center text-3xl">Blog Admin</h1>
<nav>
{items}
</nav>
<p><a href="{NEW_POST_PATH}" class="text-blue-600 underline">Create a New Post</a></p>"#
    );

    super::layout("Blog Admin", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, slug: &str) -> Post {
        Post {
            id: "id".to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            timestamp: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_empty_list() {
        let html = render_post_list(&[]);
        assert!(html.contains("No posts yet."));
        assert!(html.contains(r#"href="/posts/admin/new""#));
    }

    #[test]
    fn test_lists_posts_in_order() {
        let html = render_post_list(&[post("Second", "second"), post("First & <b>", "first")]);

        let second_at = html.find("Second").unwrap();
        let first_at = html.find("First &amp; &lt;b&gt;").unwrap();
        assert!(second_at < first_at);
        assert!(html.contains("<code>first</code>"));
    }
}
