//! Command parsing and dispatch.
//!
//! A line becomes an `Intent`, the intent runs against the application
//! state, and domain errors come back as one-line messages. The shell never
//! dies on a bad command.

mod feed;
mod session;

use ripple_core::DomainError;
use ripple_shared::Intent;

use crate::state::AppState;

pub enum CommandOutcome {
    Continue,
    Exit,
}

pub async fn execute_line(state: &mut AppState, line: &str) -> CommandOutcome {
    let line = line.trim();
    if line.is_empty() {
        return CommandOutcome::Continue;
    }

    let intent = match parse_line(line) {
        Ok(intent) => intent,
        Err(message) => {
            println!("{message}");
            return CommandOutcome::Continue;
        }
    };

    if intent == Intent::Quit {
        return CommandOutcome::Exit;
    }
    if let Err(e) = dispatch(state, intent).await {
        println!("error: {e}");
    }
    CommandOutcome::Continue
}

async fn dispatch(state: &mut AppState, intent: Intent) -> Result<(), DomainError> {
    match intent {
        Intent::SignUp { name, email } => session::sign_up(state, &name, &email).await,
        Intent::LogIn { email } => session::log_in(state, &email).await,
        Intent::LogOut => session::log_out(state).await,
        Intent::Publish { text } => feed::publish(state, &text).await,
        Intent::Attach { path } => feed::attach(state, &path).await,
        Intent::ClearAttachment => {
            state.pending_image.clear();
            println!("attachment cleared");
            Ok(())
        }
        Intent::ToggleLike { post_id } => feed::toggle_like(state, post_id).await,
        Intent::AddComment { post_id, text } => feed::add_comment(state, post_id, &text).await,
        Intent::Edit { post_id, new_text } => {
            feed::edit(state, post_id, new_text.as_deref()).await
        }
        Intent::Delete { post_id } => feed::delete(state, post_id).await,
        Intent::Search { term } => feed::search(state, &term).await,
        Intent::Share { post_id } => feed::share(state, post_id).await,
        Intent::ToggleTheme => {
            let theme = state.toggle_theme().await?;
            println!("theme: {}", theme.label());
            Ok(())
        }
        Intent::ShowFeed => feed::refresh(state).await,
        Intent::Help => {
            print_help();
            Ok(())
        }
        // Handled by execute_line before dispatch.
        Intent::Quit => Ok(()),
    }
}

fn parse_line(line: &str) -> Result<Intent, String> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "signup" => match rest.split_once(char::is_whitespace) {
            Some((name, email)) if !email.trim().is_empty() => Ok(Intent::SignUp {
                name: name.to_string(),
                email: email.trim().to_string(),
            }),
            _ => Err("usage: signup <name> <email>".to_string()),
        },
        "login" => {
            if rest.is_empty() {
                Err("usage: login <email>".to_string())
            } else {
                Ok(Intent::LogIn {
                    email: rest.to_string(),
                })
            }
        }
        "logout" => Ok(Intent::LogOut),
        // Empty text is passed through so the core gets to reject it.
        "post" => Ok(Intent::Publish {
            text: rest.to_string(),
        }),
        "attach" => {
            if rest.is_empty() {
                Err("usage: attach <path>".to_string())
            } else {
                Ok(Intent::Attach {
                    path: rest.to_string(),
                })
            }
        }
        "detach" => Ok(Intent::ClearAttachment),
        "like" => parse_id(rest, "like <id>").map(|post_id| Intent::ToggleLike { post_id }),
        "comment" => match rest.split_once(char::is_whitespace) {
            Some((id, text)) => Ok(Intent::AddComment {
                post_id: parse_id(id, "comment <id> <text>")?,
                text: text.trim().to_string(),
            }),
            None => Err("usage: comment <id> <text>".to_string()),
        },
        "edit" => match rest.split_once(char::is_whitespace) {
            // With no replacement text the edit counts as cancelled.
            Some((id, text)) => Ok(Intent::Edit {
                post_id: parse_id(id, "edit <id> [new text]")?,
                new_text: Some(text.trim().to_string()),
            }),
            None => Ok(Intent::Edit {
                post_id: parse_id(rest, "edit <id> [new text]")?,
                new_text: None,
            }),
        },
        "delete" => parse_id(rest, "delete <id>").map(|post_id| Intent::Delete { post_id }),
        "search" => Ok(Intent::Search {
            term: rest.to_string(),
        }),
        "share" => parse_id(rest, "share <id>").map(|post_id| Intent::Share { post_id }),
        "theme" => Ok(Intent::ToggleTheme),
        "feed" | "show" => Ok(Intent::ShowFeed),
        "help" => Ok(Intent::Help),
        "quit" | "exit" => Ok(Intent::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

fn parse_id(raw: &str, usage: &str) -> Result<i64, String> {
    raw.trim().parse().map_err(|_| format!("usage: {usage}"))
}

pub fn print_welcome(state: &AppState) {
    match state.session.current() {
        Some(user) => println!(
            "Welcome back, {}! Type `feed` to catch up, `help` for commands.",
            user.name
        ),
        None => println!("Welcome to Ripple. `signup <name> <email>` or `login <email>` to begin."),
    }
}

fn print_help() {
    println!(
        "\
commands:
  signup <name> <email>   create an account and sign in
  login <email>           sign in (the name is the email's local part)
  logout
  post <text>             publish a post, with any staged attachment
  attach <path>           stage an image for the next post
  detach                  drop the staged image
  feed                    show the feed
  like <id>               like or unlike a post
  comment <id> <text>
  edit <id> [new text]    leave the text off to cancel the edit
  delete <id>
  search [term]           filter the feed; empty term clears the filter
  share <id>              print a share payload for the post
  theme                   toggle light/dark
  quit"
    );
}
