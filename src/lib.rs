pub mod client;
pub mod commands;
pub mod error;
pub mod keystore;
pub mod prompt;

pub use error::{LoginError, Result};
