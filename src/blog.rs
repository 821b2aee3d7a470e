use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub type PostID = String;

pub const DEFAULT_STORE_PATH: &str = "./blog-store";

pub const POST_ID_BYTES: usize = 16;

pub const ADMIN_PATH: &str = "/posts/admin";
pub const NEW_POST_PATH: &str = "/posts/admin/new";

pub const DEFAULT_SUBMIT_DELAY: std::time::Duration = std::time::Duration::from_secs(3);

/// What the new-post form hands to the store. Never kept around after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostID,
    pub title: String,
    pub slug: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

pub fn get_random_hex_string<const LEN: usize>() -> String {
    let mut bytes = [0u8; LEN];
    rand_chacha::ChaCha20Rng::from_entropy().fill_bytes(&mut bytes);

    bytes.iter().fold(String::new(), |mut output, b| {
        let _ = write!(output, "{b:02x}");
        output
    })
}
