pub mod login;

pub use login::{LoginArgs, LoginResult};
