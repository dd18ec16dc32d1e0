use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoginError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoginError {
    #[error("{0}")]
    Validation(String),

    #[error("error reading password: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("http error during login: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", remote_message(*status, body.as_deref()))]
    Remote { status: u16, body: Option<String> },

    #[error("failed to decode response from login request")]
    Decode,

    #[error("error accessing the secret store: {0}")]
    Store(#[from] keyring::Error),
}

impl LoginError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

fn remote_message(status: u16, body: Option<&str>) -> String {
    match body {
        Some(body) => format!("login failed ({status}): {body}"),
        None => format!("login failed with status code {status}"),
    }
}
