//! An interface to an introspection session.
//!
//! Contains commands and corresponding command handlers. Command is a some
//! sort of request to the session that define an action and a list of input
//! arguments. Command handler validate command, define what exactly the
//! session must to do and return result of it.

pub mod parser;
pub mod symbol;

use crate::inspector::error::Error;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Parsing(String),
    #[error(transparent)]
    Handle(#[from] Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// External commands that can be processed by the console.
#[derive(Debug, Clone)]
pub enum Command {
    PrintSymbol(String),
    /// Invocation of a registered plugin by name, with an optional free-text
    /// argument string.
    Plugin(String, Option<String>),
    SkipInput,
    Help {
        command: Option<String>,
        reason: Option<String>,
    },
}
