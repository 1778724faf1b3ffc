use crate::client::DEFAULT_TIMEOUT_SECS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "tc",
    about = "Query TeamCity build status using locally saved build config and credentials"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding build.cfg and auth/ (defaults to ~/.tc)
    #[arg(long, global = true, env = "TC_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the build status from the team city server
    Status,
    /// Configure login credentials for a team city server
    Login {
        /// Team city server host name; a `:port` suffix is ignored (e.g. localhost)
        #[arg(long)]
        server: Option<String>,
        /// Team city username
        #[arg(long)]
        username: Option<String>,
        /// Team city password (prompted without echo when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Configure or print the build configuration
    Config {
        /// Create/overwrite the config file
        #[arg(long)]
        init: bool,
        /// Server host:port to save instead of prompting (with --init)
        #[arg(long, requires = "init")]
        server: Option<String>,
        /// Build type id to save instead of prompting (with --init)
        #[arg(long, requires = "init")]
        build_type_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn login_flags_are_optional() {
        let cli = Cli::try_parse_from(["tc", "login", "--server", "localhost:8111"]).unwrap();
        match cli.command {
            Commands::Login { server, username, password } => {
                assert_eq!(server.as_deref(), Some("localhost:8111"));
                assert!(username.is_none());
                assert!(password.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn config_server_requires_init() {
        assert!(Cli::try_parse_from(["tc", "config", "--server", "ci:8111"]).is_err());
        let cli = Cli::try_parse_from(["tc", "config", "--init", "--build-type-id", "Proj_Build"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { init: true, .. }));
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["tc", "status", "--timeout", "5", "--config-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/x")));
    }
}
