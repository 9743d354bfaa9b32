//! Inbound user intents - the core's command surface.

/// One user-initiated action, already parsed by the presentation layer.
/// Dispatching an intent, persisting the result, and re-rendering are three
/// separate steps owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SignUp { name: String, email: String },
    LogIn { email: String },
    LogOut,
    Publish { text: String },
    Attach { path: String },
    ClearAttachment,
    ToggleLike { post_id: i64 },
    AddComment { post_id: i64, text: String },
    /// `new_text: None` is a cancelled edit, distinct from empty text.
    Edit { post_id: i64, new_text: Option<String> },
    Delete { post_id: i64 },
    /// An empty term clears the active filter.
    Search { term: String },
    Share { post_id: i64 },
    ToggleTheme,
    ShowFeed,
    Help,
    Quit,
}
