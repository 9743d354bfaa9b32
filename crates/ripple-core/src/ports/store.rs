use async_trait::async_trait;

/// Keys under which the application records are persisted. The names match
/// the historical store layout, so old data files load unchanged.
pub mod keys {
    pub const CURRENT_USER: &str = "currentUser";
    pub const POSTS: &str = "posts";
    pub const DARK_MODE: &str = "darkMode";
}

/// Store trait - abstraction over durable key-value backends (file,
/// in-memory). Values are opaque strings; interpretation is the caller's.
#[async_trait]
pub trait Store: Send + Sync {
    /// Get the value stored under a key.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value under a key. Durable once the call returns.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store operation errors.
///
/// Malformed stored *content* is not an error anywhere in the system; these
/// cover genuine backend failures only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
