use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Post entity - one feed entry with its likes and comments.
///
/// Serialized field names follow the persisted camelCase layout so existing
/// store files keep loading (`imageData`, `likesBy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Creation time in milliseconds, also the sort key. Unique per feed.
    pub id: i64,
    pub author: String,
    pub text: String,
    /// Optional image as a data URI; empty when the post has none.
    #[serde(default)]
    pub image_data: String,
    pub timestamp: i64,
    /// Derived count, kept equal to `likes_by.len()` after every mutation.
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub likes_by: BTreeSet<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new post. The id doubles as the creation timestamp.
    pub fn new(
        id: i64,
        author: impl Into<String>,
        text: impl Into<String>,
        image_data: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            image_data: image_data.into(),
            timestamp: id,
            likes: 0,
            likes_by: BTreeSet::new(),
            comments: Vec::new(),
        }
    }

    /// Add or remove a like from `username`, keeping the count in sync.
    pub fn toggle_like(&mut self, username: &str) {
        if !self.likes_by.remove(username) {
            self.likes_by.insert(username.to_string());
        }
        self.likes = self.likes_by.len() as u32;
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn liked_by(&self, username: &str) -> bool {
        self.likes_by.contains(username)
    }

    /// Case-insensitive substring match against text or author.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.text.to_lowercase().contains(&term) || self.author.to_lowercase().contains(&term)
    }

    /// Re-establish the like-count invariant after deserialization.
    /// Stored records may predate the count or disagree with the liker set.
    pub fn normalize(&mut self) {
        self.likes = self.likes_by.len() as u32;
    }
}

/// Comment entity - immutable once created, append-only within its post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub timestamp: i64,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_keeps_count_in_sync() {
        let mut post = Post::new(1, "alice", "hello", "");

        post.toggle_like("bob");
        post.toggle_like("carol");
        post.toggle_like("bob");

        assert_eq!(post.likes, 1);
        assert_eq!(post.likes_by.len(), 1);
        assert!(post.liked_by("carol"));
        assert!(!post.liked_by("bob"));
    }

    #[test]
    fn matches_is_case_insensitive_on_text_and_author() {
        let post = Post::new(1, "Alice", "Hello World", "");

        assert!(post.matches("world"));
        assert!(post.matches("ALICE"));
        assert!(!post.matches("bob"));
    }

    #[test]
    fn legacy_record_without_likers_deserializes_empty() {
        let json = r#"{"id":5,"author":"alice","text":"hi","timestamp":5,"likes":3}"#;
        let mut post: Post = serde_json::from_str(json).unwrap();
        post.normalize();

        assert!(post.likes_by.is_empty());
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.image_data, "");
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let mut post = Post::new(7, "alice", "hi", "data:image/png;base64,AA==");
        post.toggle_like("bob");

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"imageData\""));
        assert!(json.contains("\"likesBy\""));
    }
}
