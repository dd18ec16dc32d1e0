use std::io::{self, stdout, Write};

const PASSWORD_PROMPT: &str = "Enter Password: ";

/// A source for the operator's password.
pub trait PasswordReader {
    fn read_password(&self) -> io::Result<String>;
}

/// Reads the password from the terminal with echo turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPasswordReader;

impl PasswordReader for TerminalPasswordReader {
    fn read_password(&self) -> io::Result<String> {
        print!("{}", PASSWORD_PROMPT);
        stdout().flush()?;

        let pass = rpassword::read_password()?;
        println!();
        Ok(pass)
    }
}
