//! Feed renderer - a pure projection from posts to view-models.

use ripple_shared::dto::{CommentView, PostView};

use crate::domain::{Post, User};

/// Project the post collection into render-ready view-models.
///
/// Output is sorted newest-first by id, optionally narrowed by a
/// case-insensitive filter, and carries the per-viewer flags the
/// presentation layer uses to pick action affordances. No side effects;
/// identical inputs give identical output.
pub fn render(posts: &[Post], current_user: Option<&User>, filter: Option<&str>) -> Vec<PostView> {
    let mut visible: Vec<&Post> = posts
        .iter()
        .filter(|p| filter.is_none_or(|term| p.matches(term)))
        .collect();
    visible.sort_by(|a, b| b.id.cmp(&a.id));

    let viewer = current_user.map(|u| u.name.as_str());
    visible.into_iter().map(|p| to_view(p, viewer)).collect()
}

fn to_view(post: &Post, viewer: Option<&str>) -> PostView {
    PostView {
        id: post.id,
        author: post.author.clone(),
        text: post.text.clone(),
        image_data: post.image_data.clone(),
        timestamp: post.timestamp,
        likes: post.likes,
        likes_by: post.likes_by.iter().cloned().collect(),
        comments: post
            .comments
            .iter()
            .map(|c| CommentView {
                author: c.author.clone(),
                text: c.text.clone(),
                timestamp: c.timestamp,
            })
            .collect(),
        liked_by_current_user: viewer.is_some_and(|name| post.liked_by(name)),
        is_owned_by_current_user: viewer.is_some_and(|name| post.author == name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        let mut first = Post::new(1, "alice", "Hello World", "");
        first.toggle_like("bob");
        let second = Post::new(2, "bob", "rust all day", "");
        let third = Post::new(3, "alice", "later post", "");
        vec![first, second, third]
    }

    #[test]
    fn output_is_sorted_newest_first() {
        let posts = sample_posts();
        let views = render(&posts, None, None);

        let ids: Vec<i64> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let posts = sample_posts();
        let user = User::new("bob", "bob@example.com");

        let a = render(&posts, Some(&user), Some("alice"));
        let b = render(&posts, Some(&user), Some("alice"));
        assert_eq!(a, b);
    }

    #[test]
    fn viewer_flags_are_derived_per_post() {
        let posts = sample_posts();
        let bob = User::new("bob", "bob@example.com");

        let views = render(&posts, Some(&bob), None);

        // views[2] is post 1: liked by bob, owned by alice.
        assert!(views[2].liked_by_current_user);
        assert!(!views[2].is_owned_by_current_user);
        // views[1] is post 2: bob's own, not liked by him.
        assert!(views[1].is_owned_by_current_user);
        assert!(!views[1].liked_by_current_user);
    }

    #[test]
    fn without_a_viewer_no_flags_are_set() {
        let views = render(&sample_posts(), None, None);
        assert!(views.iter().all(|v| !v.liked_by_current_user));
        assert!(views.iter().all(|v| !v.is_owned_by_current_user));
    }

    #[test]
    fn filter_narrows_case_insensitively() {
        let posts = sample_posts();

        let views = render(&posts, None, Some("world"));
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].text, "Hello World");

        // Author matches count too.
        let by_author = render(&posts, None, Some("ALICE"));
        assert_eq!(by_author.len(), 2);
    }
}
