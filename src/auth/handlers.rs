use std::io::{BufRead, Write};

use tracing::{error, instrument};

use crate::auth::services::{log_in, sign_up, AuthError};
use crate::prompt::{Prompt, PromptResult};
use crate::state::AppState;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Incorrect username or password.";

/// Console sign-up: asks for credentials and registers a new user in memory.
#[instrument(skip_all)]
pub fn sign_up_flow<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    state: &mut AppState,
) -> PromptResult<()> {
    let username = prompt.ask("Enter username: ")?;
    let password = prompt.ask("Enter password: ")?;

    match sign_up(&mut state.users, &username, &password) {
        Ok(_) => prompt.say("User registered successfully."),
        Err(e) => {
            error!(error = %e, "sign up failed");
            prompt.say(&format!("Sign up failed: {e}"))
        }
    }
}

/// Console log-in: `true` when the credentials match a stored user.
#[instrument(skip_all)]
pub fn log_in_flow<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    state: &AppState,
) -> PromptResult<bool> {
    let username = prompt.ask("Enter username: ")?;
    let password = prompt.ask("Enter password: ")?;

    match log_in(&state.users, &username, &password) {
        Ok(_) => Ok(true),
        Err(AuthError::InvalidCredentials) | Err(AuthError::Hash(_)) => {
            prompt.say(LOGIN_FAILED_MESSAGE)?;
            Ok(false)
        }
    }
}
