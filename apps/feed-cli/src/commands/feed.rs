//! Feed command handlers and feed printing.

use std::path::Path;

use base64::Engine;

use ripple_core::DomainError;
use ripple_core::render::render;
use ripple_shared::dto::{PostView, SharePayload};

use crate::state::AppState;

/// Reload from the store, render, and print. Runs after every mutation and
/// for `feed`; reloading first is what makes another instance's writes show
/// up.
pub(crate) async fn refresh(state: &mut AppState) -> Result<(), DomainError> {
    state.feed.reload().await?;
    let views = render(
        state.feed.posts(),
        state.session.current(),
        state.filter.as_deref(),
    );
    if let Some(term) = &state.filter {
        println!("feed matching \"{term}\" - {} post(s)", views.len());
    } else {
        println!("feed - {} post(s)", views.len());
    }
    print_feed(&views);
    Ok(())
}

pub(crate) async fn publish(state: &mut AppState, text: &str) -> Result<(), DomainError> {
    let Some(author) = current_name(state) else {
        return Ok(());
    };

    let image = state.pending_image.clone();
    let post = state.feed.create(&author, text, &image).await?;
    // The staged attachment is spent only once a post actually went out.
    state.pending_image.clear();
    tracing::debug!(post_id = post.id, "post published");
    refresh(state).await
}

pub(crate) async fn attach(state: &mut AppState, path: &str) -> Result<(), DomainError> {
    // Reading and encoding the file happens out here; the core only ever
    // sees the finished data URI.
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            state.pending_image = format!("data:{};base64,{}", mime_for(path), encoded);
            println!("attached {path} ({} bytes), goes out with your next post", bytes.len());
        }
        Err(e) => println!("cannot read {path}: {e}"),
    }
    Ok(())
}

pub(crate) async fn toggle_like(state: &mut AppState, post_id: i64) -> Result<(), DomainError> {
    let Some(username) = current_name(state) else {
        return Ok(());
    };
    state.feed.toggle_like(post_id, &username).await?;
    refresh(state).await
}

pub(crate) async fn add_comment(
    state: &mut AppState,
    post_id: i64,
    text: &str,
) -> Result<(), DomainError> {
    let Some(author) = current_name(state) else {
        return Ok(());
    };
    state.feed.add_comment(post_id, &author, text).await?;
    refresh(state).await
}

pub(crate) async fn edit(
    state: &mut AppState,
    post_id: i64,
    new_text: Option<&str>,
) -> Result<(), DomainError> {
    let Some(requester) = current_name(state) else {
        return Ok(());
    };
    state.feed.edit_text(post_id, new_text, &requester).await?;
    refresh(state).await
}

pub(crate) async fn delete(state: &mut AppState, post_id: i64) -> Result<(), DomainError> {
    let Some(requester) = current_name(state) else {
        return Ok(());
    };
    state.feed.delete(post_id, &requester).await?;
    refresh(state).await
}

pub(crate) async fn search(state: &mut AppState, term: &str) -> Result<(), DomainError> {
    let term = term.trim();
    state.filter = (!term.is_empty()).then(|| term.to_string());
    refresh(state).await
}

pub(crate) async fn share(state: &mut AppState, post_id: i64) -> Result<(), DomainError> {
    state.feed.reload().await?;
    let Some(post) = state.feed.posts().iter().find(|p| p.id == post_id) else {
        println!("no such post");
        return Ok(());
    };

    let payload = SharePayload {
        title: "Ripple".to_string(),
        text: post.text.clone(),
        url: format!("ripple://posts/{post_id}"),
    };
    // No share sheet in a terminal; printing the payload is our clipboard.
    println!("share: {} | {} | {}", payload.title, payload.text, payload.url);
    Ok(())
}

fn current_name(state: &AppState) -> Option<String> {
    match state.session.current() {
        Some(user) => Some(user.name.clone()),
        None => {
            println!("log in first (`login <email>` or `signup <name> <email>`)");
            None
        }
    }
}

fn print_feed(views: &[PostView]) {
    if views.is_empty() {
        println!("  (nothing here yet)");
        return;
    }
    for view in views {
        print_post(view);
    }
}

fn print_post(view: &PostView) {
    let yours = if view.is_owned_by_current_user {
        "  [yours]"
    } else {
        ""
    };
    println!(
        "#{} {} @ {}{}",
        view.id,
        view.author,
        format_timestamp(view.timestamp),
        yours
    );
    println!("  {}", view.text);
    if !view.image_data.is_empty() {
        println!("  [image attached]");
    }
    let you = if view.liked_by_current_user {
        " (including you)"
    } else {
        ""
    };
    println!(
        "  likes: {}{}  comments: {}",
        view.likes,
        you,
        view.comments.len()
    );
    for comment in &view.comments {
        println!("    {}: {}", comment.author, comment.text);
    }
}

fn format_timestamp(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn mime_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
