use crate::config::{hostname, ConfigStore, Credential};
use crate::prompt::{value_or_prompt, Prompter};
use anyhow::{Context, Result};
use std::io::Write;

pub struct LoginArgs {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Save credentials for the server's host, prompting for anything not given.
///
/// The file is keyed by `hostname(server)`, the same derivation `status`
/// applies to the saved build target, so `--server ci:8111` and a target of
/// `ci:9090` share one credential.
pub fn run_login(
    store: &ConfigStore,
    args: LoginArgs,
    prompter: &dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    let server = value_or_prompt(args.server, prompter, "Team city Server")?;
    let host = hostname(&server)?;
    let username = value_or_prompt(args.username, prompter, "Username")?;
    let password = match args.password {
        Some(p) => p,
        None => prompter.secret("Password")?,
    };
    let path = store
        .save_credential(host, &Credential { username, password })
        .with_context(|| format!("saving credentials for {host}"))?;
    writeln!(out, "Saved credentials for {host} to {}", path.display())?;
    Ok(())
}
