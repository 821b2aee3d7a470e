use crate::blog::{Post, PostDraft};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("post metadata is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where new posts end up. Implementations must not deduplicate: every call to
/// `create_post` makes a new post.
#[async_trait::async_trait]
pub trait PostStore: Send + Sync + std::fmt::Debug {
    async fn create_post(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;
}

/// Keeps each post in `<root>/post/<id>/` as `meta.json` plus `text.md`.
#[derive(Debug, Clone)]
pub struct FsPostStore {
    root: PathBuf,
}

impl FsPostStore {
    pub fn new(root: impl Into<PathBuf>) -> FsPostStore {
        FsPostStore { root: root.into() }
    }

    fn posts_dir(&self) -> PathBuf {
        self.root.join("post")
    }
}

#[async_trait::async_trait]
impl PostStore for FsPostStore {
    async fn create_post(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let post = Post {
            id: crate::blog::get_random_hex_string::<{ crate::blog::POST_ID_BYTES }>(),
            title: draft.title,
            slug: draft.slug,
            timestamp: chrono::Utc::now(),
        };
        let post_path = self.posts_dir().join(&post.id);

        tokio::fs::create_dir_all(&post_path).await?;
        tokio::fs::write(post_path.join("text.md"), draft.markdown).await?;
        // meta.json goes last so a half-written post is never listed
        tokio::fs::write(post_path.join("meta.json"), serde_json::to_vec(&post)?).await?;

        tracing::debug!("Wrote post {} to {post_path:?}", post.id);
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts_dir = match tokio::fs::read_dir(self.posts_dir()).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut posts = Vec::new();
        while let Some(entry) = posts_dir.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }

            let meta_path = entry.path().join("meta.json");
            let meta = match tokio::fs::read(&meta_path).await {
                Ok(it) => it,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => {
                    tracing::warn!("Skipping post, could not read {meta_path:?}: {err}");
                    continue;
                }
            };

            match serde_json::from_slice::<Post>(&meta) {
                Ok(post) => posts.push(post),
                Err(err) => tracing::warn!("Skipping post, invalid metadata in {meta_path:?}: {err}"),
            }
        }

        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(posts)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every draft it is handed instead of writing anything.
    #[derive(Debug, Default)]
    pub struct RecordingStore {
        pub drafts: Mutex<Vec<PostDraft>>,
    }

    impl RecordingStore {
        pub fn calls(&self) -> Vec<PostDraft> {
            self.drafts.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl PostStore for RecordingStore {
        async fn create_post(&self, draft: PostDraft) -> Result<Post, StoreError> {
            let post = Post {
                id: format!("{}", self.drafts.lock().unwrap().len()),
                title: draft.title.clone(),
                slug: draft.slug.clone(),
                timestamp: chrono::Utc::now(),
            };
            self.drafts.lock().unwrap().push(draft);
            Ok(post)
        }

        async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
            Ok(self
                .calls()
                .into_iter()
                .enumerate()
                .rev()
                .map(|(i, draft)| Post {
                    id: i.to_string(),
                    title: draft.title,
                    slug: draft.slug,
                    timestamp: chrono::Utc::now(),
                })
                .collect())
        }
    }

    #[derive(Debug, Default)]
    pub struct FailingStore;

    #[async_trait::async_trait]
    impl PostStore for FailingStore {
        async fn create_post(&self, _draft: PostDraft) -> Result<Post, StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }

        async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }
    }
}
