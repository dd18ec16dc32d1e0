use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::{
    client::{LoginClient, LOGIN_PATH},
    keystore::{store_credentials, SecretStore, AUTH_KEY},
    prompt::PasswordReader,
    LoginError, Result,
};

pub const DEFAULT_USER: &str = "nuvolaris";

/// Login to a Nuvolaris instance. If no user is specified, the default user "nuvolaris" is used.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "login",
    override_usage = "nuv login <apihost> [<user>]",
    disable_help_flag = true
)]
pub struct LoginArgs {
    /// Address of the Nuvolaris api host, e.g. https://nuvolaris.example.com
    pub apihost: Option<String>,

    /// User to log in as
    pub user: Option<String>,

    #[arg(short, long, help = "Show usage")]
    pub help: bool,
}

/// What the operator gets back after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub login: String,
    pub auth: String,
    pub api_host: String,
}

/// Parses `argv` (including the command name) and runs the login flow.
pub fn login_cmd<I, T>(
    argv: I,
    reader: &dyn PasswordReader,
    store: &dyn SecretStore,
) -> Result<Option<LoginResult>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = LoginArgs::try_parse_from(argv)?;
    run(args, reader, store)
}

/// Runs the login flow. `Ok(None)` means help was requested and nothing was done.
pub fn run(
    args: LoginArgs,
    reader: &dyn PasswordReader,
    store: &dyn SecretStore,
) -> Result<Option<LoginResult>> {
    if args.help {
        print_usage()?;
        return Ok(None);
    }

    let Some(apihost) = args.apihost else {
        print_usage()?;
        return Err(LoginError::validation("missing apihost"));
    };

    let password = reader.read_password()?;
    if password.is_empty() {
        return Err(LoginError::validation("password is empty"));
    }

    let url = format!("{}{}", apihost, LOGIN_PATH);
    let user = args.user.unwrap_or_else(|| DEFAULT_USER.to_string());
    tracing::info!(user = user.as_str(), apihost = apihost.as_str(), "Logging in user");

    let secrets = LoginClient::new().login(&url, &user, &password)?;
    store_credentials(store, &secrets)?;

    // read back from the store rather than the response
    let auth = store.get(AUTH_KEY)?;

    Ok(Some(LoginResult {
        login: user,
        auth,
        api_host: apihost,
    }))
}

fn print_usage() -> Result<()> {
    LoginArgs::command().print_help()?;
    println!();
    Ok(())
}
