#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::feed::PostRepository;
    use crate::render::render;
    use crate::session::SessionManager;
    use crate::testutil::MemStore;

    #[tokio::test]
    async fn first_run_flow_signup_login_publish_like() {
        let store = Arc::new(MemStore::default());

        let mut session = SessionManager::restore(store.clone()).await.unwrap();
        session.sign_up("alice", "alice@x.com").await.unwrap();
        let alice = session.log_in("alice@x.com").await.unwrap();

        let mut feed = PostRepository::new(store);
        feed.reload().await.unwrap();
        let post = feed.create(&alice.name, "hello world", "").await.unwrap();
        feed.toggle_like(post.id, &alice.name).await.unwrap();

        let views = render(feed.posts(), session.current(), None);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].author, "alice");
        assert_eq!(views[0].likes, 1);
        assert_eq!(views[0].likes_by, vec!["alice".to_string()]);
        assert!(views[0].liked_by_current_user);
        assert!(views[0].is_owned_by_current_user);
    }

    #[tokio::test]
    async fn logging_out_leaves_the_feed_alone() {
        let store = Arc::new(MemStore::default());

        let mut session = SessionManager::restore(store.clone()).await.unwrap();
        session.log_in("bob@x.com").await.unwrap();

        let mut feed = PostRepository::new(store.clone());
        feed.reload().await.unwrap();
        feed.create("bob", "still here", "").await.unwrap();

        session.log_out().await.unwrap();

        let mut fresh = PostRepository::new(store);
        fresh.reload().await.unwrap();
        assert_eq!(fresh.posts().len(), 1);

        // Rendering with nobody signed in drops the viewer flags only.
        let views = render(fresh.posts(), session.current(), None);
        assert!(!views[0].is_owned_by_current_user);
    }
}
