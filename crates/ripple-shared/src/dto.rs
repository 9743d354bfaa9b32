//! View-models - render-ready projections handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// One feed entry as the presentation layer sees it: every post field plus
/// the two per-viewer flags that decide which affordances to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub image_data: String,
    pub timestamp: i64,
    pub likes: u32,
    pub likes_by: Vec<String>,
    pub comments: Vec<CommentView>,
    pub liked_by_current_user: bool,
    pub is_owned_by_current_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub author: String,
    pub text: String,
    pub timestamp: i64,
}

/// What an external share collaborator (share sheet, clipboard) receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}
