//! Post repository - the in-memory mirror of the persisted feed.
//!
//! The store is the source of truth across instances. `reload` replaces the
//! whole collection from the store and must run before rendering so that
//! another writer's changes become visible; writes are last-write-wins at
//! collection granularity.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Comment, Post};
use crate::error::DomainError;
use crate::ports::{Store, StoreError, keys};

pub struct PostRepository {
    store: Arc<dyn Store>,
    posts: Vec<Post>,
    /// Highest id handed out or observed; `next_id` bumps past it so two
    /// creations in the same millisecond cannot collide.
    last_id: i64,
}

impl PostRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            posts: Vec::new(),
            last_id: 0,
        }
    }

    /// Replace the in-memory collection with the store's current value.
    /// Absent or malformed stored JSON counts as an empty feed.
    pub async fn reload(&mut self) -> Result<(), DomainError> {
        let raw = self.store.get(keys::POSTS).await?;
        self.posts = raw
            .as_deref()
            .and_then(|json| serde_json::from_str::<Vec<Post>>(json).ok())
            .unwrap_or_default();
        for post in &mut self.posts {
            post.normalize();
            self.last_id = self.last_id.max(post.id);
        }
        Ok(())
    }

    /// Publish a new post. Blank text (after trimming) is rejected.
    pub async fn create(
        &mut self,
        author: &str,
        text: &str,
        image_data: &str,
    ) -> Result<Post, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyText);
        }

        let post = Post::new(self.next_id(), author, text, image_data);
        self.posts.push(post.clone());
        self.persist().await?;
        Ok(post)
    }

    /// Add or remove `username`'s like. Unknown ids are a silent no-op.
    pub async fn toggle_like(&mut self, post_id: i64, username: &str) -> Result<(), DomainError> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(());
        };
        post.toggle_like(username);
        self.persist().await
    }

    /// Append a comment. Blank text is rejected; unknown ids are a silent
    /// no-op.
    pub async fn add_comment(
        &mut self,
        post_id: i64,
        author: &str,
        text: &str,
    ) -> Result<(), DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyText);
        }

        let now = Utc::now().timestamp_millis();
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(());
        };
        post.add_comment(Comment::new(author, text, now));
        self.persist().await
    }

    /// Replace a post's text. `None` means the edit was cancelled: no
    /// change, no error. Only the author may edit, and the replacement must
    /// not be blank.
    pub async fn edit_text(
        &mut self,
        post_id: i64,
        new_text: Option<&str>,
        requester: &str,
    ) -> Result<(), DomainError> {
        let Some(new_text) = new_text else {
            return Ok(());
        };
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(());
        };
        if post.author != requester {
            return Err(DomainError::NotAuthor);
        }
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(DomainError::EmptyText);
        }

        post.text = new_text.to_string();
        self.persist().await
    }

    /// Remove a post. Only the author may delete; unknown ids are a silent
    /// no-op.
    pub async fn delete(&mut self, post_id: i64, requester: &str) -> Result<(), DomainError> {
        let Some(idx) = self.posts.iter().position(|p| p.id == post_id) else {
            return Ok(());
        };
        if self.posts[idx].author != requester {
            return Err(DomainError::NotAuthor);
        }

        self.posts.remove(idx);
        self.persist().await
    }

    /// Case-insensitive substring search over post text and author. Pure;
    /// the collection is untouched.
    pub fn search(&self, term: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.matches(term))
            .cloned()
            .collect()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    async fn persist(&self) -> Result<(), DomainError> {
        let json = serde_json::to_string(&self.posts)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(keys::POSTS, &json).await?;
        Ok(())
    }
}
