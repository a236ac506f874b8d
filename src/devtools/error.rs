use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevToolsError {
    #[error("couldn't figure out command")]
    NoCommand,

    #[error("{0} is unknown command")]
    UnknownCommand(String),

    #[error("command name {0} is registered more than once")]
    DuplicateCommand(String),

    #[error("failed to read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stat stdin: {0}")]
    StatStdin(#[source] io::Error),

    #[error("failed to read text from stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("failed to read clipboard content: {0}")]
    Clipboard(String),

    #[error("no input provided")]
    NoInput,

    #[error("failed to decode content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write data to file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output to stdout: {0}")]
    WriteStdout(#[source] io::Error),

    #[error("failed to gather random bytes: {0}")]
    Entropy(#[source] rand::Error),

    #[error("interrupted")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, DevToolsError>;
