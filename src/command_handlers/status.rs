use crate::client::StatusSource;
use crate::config::{hostname, ConfigStore};
use crate::error::TcError;
use anyhow::Result;
use std::io::Write;

pub const EXIT_OK: u8 = 0;
pub const EXIT_NO_BUILD_CONFIG: u8 = 1;
pub const EXIT_NO_LOGIN: u8 = 2;
pub const EXIT_REQUEST_FAILED: u8 = 3;
pub const EXIT_INVALID_HOST: u8 = 4;
pub const EXIT_OTHER: u8 = 5;

/// Why `status` stopped before printing a body.
#[derive(Debug)]
enum Failure {
    NoBuildConfig,
    NoLogin { host: String },
    Request(TcError),
    InvalidHost(TcError),
    Other(TcError),
}

impl Failure {
    fn exit_code(&self) -> u8 {
        match self {
            Failure::NoBuildConfig => EXIT_NO_BUILD_CONFIG,
            Failure::NoLogin { .. } => EXIT_NO_LOGIN,
            Failure::Request(_) => EXIT_REQUEST_FAILED,
            Failure::InvalidHost(_) => EXIT_INVALID_HOST,
            Failure::Other(_) => EXIT_OTHER,
        }
    }

    fn message(&self) -> String {
        match self {
            Failure::NoBuildConfig => {
                "Build config missing. Create with \"config --init\" command".to_string()
            }
            Failure::NoLogin { host } => {
                format!("Login config missing. Create with \"login --server {host}\" command")
            }
            Failure::Request(TcError::RequestFailed(code)) => {
                format!("Request to team city server failed, returned error is - {code}")
            }
            Failure::Request(e) => format!("Request to team city server failed: {e}"),
            Failure::InvalidHost(e) | Failure::Other(e) => e.to_string(),
        }
    }
}

/// Print the build status, or exactly one failure line, and return the exit code.
pub fn run_status(store: &ConfigStore, source: &dyn StatusSource, out: &mut dyn Write) -> Result<u8> {
    let (line, code) = match build_status(store, source) {
        Ok(body) => (body, EXIT_OK),
        Err(failure) => {
            log::debug!("status failed: {failure:?}");
            (failure.message(), failure.exit_code())
        }
    };
    writeln!(out, "{line}")?;
    Ok(code)
}

fn build_status(store: &ConfigStore, source: &dyn StatusSource) -> Result<String, Failure> {
    let target = store.load_build_target().map_err(|e| match e {
        TcError::ConfigMissing { .. } => Failure::NoBuildConfig,
        other => Failure::Other(other),
    })?;
    let host = hostname(&target.server).map_err(Failure::InvalidHost)?;
    let credential = store.load_credential(host).map_err(|e| match e {
        TcError::ConfigMissing { .. } => Failure::NoLogin { host: host.to_string() },
        other => Failure::Other(other),
    })?;
    source
        .fetch_status(
            &target.server,
            &target.build_type_id,
            &credential.username,
            &credential.password,
        )
        .map_err(|e| match e {
            TcError::RequestFailed(_) | TcError::Transport(_) => Failure::Request(e),
            other => Failure::Other(other),
        })
}
