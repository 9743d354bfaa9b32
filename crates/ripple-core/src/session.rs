//! Session manager - owns the current-user record.
//!
//! Identity is nominal: logging in derives a name from the email and that
//! is the whole authentication story. After a successful login the caller
//! is expected to reload the post repository so posts written by other
//! instances show up.

use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{Store, StoreError, keys};

pub struct SessionManager {
    store: Arc<dyn Store>,
    current: Option<User>,
}

impl SessionManager {
    /// Build a session manager, restoring any persisted user. Malformed
    /// stored JSON counts as nobody being logged in.
    pub async fn restore(store: Arc<dyn Store>) -> Result<Self, DomainError> {
        let current = store
            .get(keys::CURRENT_USER)
            .await?
            .as_deref()
            .and_then(|json| serde_json::from_str::<Option<User>>(json).ok())
            .flatten();
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Create an account from raw name/email and sign the user in.
    pub async fn sign_up(&mut self, name: &str, email: &str) -> Result<User, DomainError> {
        let user = User::new(name, email);
        self.current = Some(user.clone());
        self.persist().await?;
        Ok(user)
    }

    /// Log in with an email; the name is its local part.
    pub async fn log_in(&mut self, email: &str) -> Result<User, DomainError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::EmptyEmail);
        }

        let user = User::from_email(email);
        self.current = Some(user.clone());
        self.persist().await?;
        Ok(user)
    }

    /// Clear the current user. Posts are untouched.
    pub async fn log_out(&mut self) -> Result<(), DomainError> {
        self.current = None;
        self.persist().await
    }

    // A cleared session is stored as the JSON literal `null`, keeping the
    // persisted layout identical to what older data files contain.
    async fn persist(&self) -> Result<(), DomainError> {
        let json = serde_json::to_string(&self.current)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store.set(keys::CURRENT_USER, &json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemStore;

    #[tokio::test]
    async fn login_derives_name_and_persists() {
        let store = Arc::new(MemStore::default());
        let mut session = SessionManager::restore(store.clone()).await.unwrap();

        let user = session.log_in("alice@example.com").await.unwrap();
        assert_eq!(user.name, "alice");

        let restored = SessionManager::restore(store).await.unwrap();
        assert_eq!(restored.current(), Some(&user));
    }

    #[tokio::test]
    async fn login_rejects_empty_email() {
        let mut session = SessionManager::restore(Arc::new(MemStore::default()))
            .await
            .unwrap();

        assert!(matches!(
            session.log_in("   ").await,
            Err(DomainError::EmptyEmail)
        ));
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn logout_persists_null_and_survives_restore() {
        let store = Arc::new(MemStore::default());
        let mut session = SessionManager::restore(store.clone()).await.unwrap();
        session.sign_up("alice", "alice@example.com").await.unwrap();

        session.log_out().await.unwrap();

        assert_eq!(
            store.get(keys::CURRENT_USER).await.unwrap().as_deref(),
            Some("null")
        );
        let restored = SessionManager::restore(store).await.unwrap();
        assert!(restored.current().is_none());
    }

    #[tokio::test]
    async fn malformed_stored_user_counts_as_logged_out() {
        let store = Arc::new(MemStore::default());
        store.set(keys::CURRENT_USER, "{oops").await.unwrap();

        let session = SessionManager::restore(store).await.unwrap();
        assert!(session.current().is_none());
    }
}
