//! Session command handlers.

use ripple_core::DomainError;

use crate::commands::feed;
use crate::state::AppState;

pub(crate) async fn sign_up(
    state: &mut AppState,
    name: &str,
    email: &str,
) -> Result<(), DomainError> {
    let user = state.session.sign_up(name, email).await?;
    println!("account created for {}!", user.name);
    Ok(())
}

pub(crate) async fn log_in(state: &mut AppState, email: &str) -> Result<(), DomainError> {
    let user = state.session.log_in(email).await?;
    println!("Welcome, {}!", user.name);
    // Pick up posts other instances wrote while we were away.
    feed::refresh(state).await
}

pub(crate) async fn log_out(state: &mut AppState) -> Result<(), DomainError> {
    state.session.log_out().await?;
    println!("logged out");
    Ok(())
}
