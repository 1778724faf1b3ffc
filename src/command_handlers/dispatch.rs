use crate::cli::Commands;
use crate::client::HttpStatusClient;
use crate::command_handlers::configure::{self, ConfigArgs};
use crate::command_handlers::login::{self, LoginArgs};
use crate::command_handlers::status::{self, EXIT_OK};
use crate::config::ConfigStore;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// Run one command; the returned value is the process exit code.
pub fn dispatch(
    cmd: Commands,
    store: &ConfigStore,
    timeout: Duration,
    prompter: &dyn Prompter,
    out: &mut dyn Write,
) -> Result<u8> {
    match cmd {
        Commands::Status => {
            let client = HttpStatusClient::new(timeout).context("building HTTP client")?;
            status::run_status(store, &client, out)
        }
        Commands::Login {
            server,
            username,
            password,
        } => {
            let args = LoginArgs {
                server,
                username,
                password,
            };
            login::run_login(store, args, prompter, out)?;
            Ok(EXIT_OK)
        }
        Commands::Config {
            init,
            server,
            build_type_id,
        } => {
            let args = ConfigArgs {
                init,
                server,
                build_type_id,
            };
            configure::run_config(store, args, prompter, out)?;
            Ok(EXIT_OK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompter;
    use tempfile::TempDir;

    fn run(cmd: Commands, store: &ConfigStore, answers: &[&str]) -> (u8, String) {
        let mut out = Vec::<u8>::new();
        let prompter = ScriptedPrompter::new(answers);
        let code = dispatch(cmd, store, Duration::from_secs(1), &prompter, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn status_on_empty_store_needs_no_network() {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path());
        let (code, out) = run(Commands::Status, &store, &[]);
        assert_eq!(code, status::EXIT_NO_BUILD_CONFIG);
        assert!(out.starts_with("Build config missing"));
    }

    #[test]
    fn config_init_then_login_then_status_reaches_credential_check() {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path());
        let init = Commands::Config { init: true, server: None, build_type_id: None };
        run(init, &store, &["localhost:8111", "Proj_Build"]);

        let (code, out) = run(Commands::Status, &store, &[]);
        assert_eq!(code, status::EXIT_NO_LOGIN);
        assert!(out.contains("login --server localhost"), "{out}");

        let login = Commands::Login { server: None, username: None, password: None };
        let (code, _) = run(login, &store, &["localhost", "alice", "pw"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(store.load_credential("localhost").unwrap().username, "alice");

        let (code, out) = run(Commands::Config { init: false, server: None, build_type_id: None }, &store, &[]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "Server = localhost:8111\nBuild type id = Proj_Build\n");
    }
}
