use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use crate::auth::handlers::{log_in_flow, sign_up_flow};
use crate::prompt::{Prompt, PromptError, PromptResult};
use crate::state::AppState;
use crate::tasks::handlers::{run_task_menu, CHOICE_LABEL, EXIT_MESSAGE, INVALID_CHOICE_MESSAGE};

pub const MAIN_MENU: &str = "1. Sign Up\n2. Log In\n3. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    SignUp,
    LogIn,
    Exit,
}

impl MainMenuChoice {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::SignUp),
            2 => Some(Self::LogIn),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the console session until "Exit" or end of input.
///
/// Only "Exit" persists; closing the input abandons unsaved changes.
pub fn run<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> anyhow::Result<()> {
    match main_menu(prompt, state) {
        Ok(()) => Ok(()),
        Err(PromptError::Eof) => {
            warn!("input closed; leaving without saving");
            Ok(())
        }
        Err(PromptError::Io(e)) => Err(anyhow::Error::new(e).context("console i/o")),
    }
}

fn main_menu<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut AppState) -> PromptResult<()> {
    loop {
        prompt.say(MAIN_MENU)?;
        let choice = prompt.ask_choice(CHOICE_LABEL)?.and_then(MainMenuChoice::from_number);
        match choice {
            Some(MainMenuChoice::SignUp) => sign_up_flow(prompt, state)?,
            Some(MainMenuChoice::LogIn) => {
                if log_in_flow(prompt, state)? {
                    run_task_menu(prompt, state)?;
                }
            }
            Some(MainMenuChoice::Exit) => {
                save_all(prompt, state)?;
                prompt.say(EXIT_MESSAGE)?;
                info!("session finished");
                return Ok(());
            }
            None => {
                warn!("invalid main menu choice");
                prompt.say(INVALID_CHOICE_MESSAGE)?;
            }
        }
    }
}

// Each document is attempted even if the other one fails.
fn save_all<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &AppState) -> PromptResult<()> {
    if let Err(e) = state.save_tasks() {
        error!(error = %e, "saving tasks failed");
        prompt.say(&format!("Failed to save tasks: {e}"))?;
    }
    if let Err(e) = state.save_users() {
        error!(error = %e, "saving users failed");
        prompt.say(&format!("Failed to save users: {e}"))?;
    }
    Ok(())
}
