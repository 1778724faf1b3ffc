use crate::error::{TcError, TcResult};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can answer "what is the status of this build type".
pub trait StatusSource {
    fn fetch_status(
        &self,
        server: &str,
        build_type_id: &str,
        username: &str,
        password: &str,
    ) -> TcResult<String>;
}

pub fn status_url(server: &str, build_type_id: &str) -> String {
    format!("http://{server}/httpAuth/app/rest/builds/buildType:{build_type_id}/status")
}

/// Blocking TeamCity REST client using HTTP basic auth.
pub struct HttpStatusClient {
    client: Client,
}

impl HttpStatusClient {
    pub fn new(timeout: Duration) -> TcResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tc/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl StatusSource for HttpStatusClient {
    fn fetch_status(
        &self,
        server: &str,
        build_type_id: &str,
        username: &str,
        password: &str,
    ) -> TcResult<String> {
        let url = status_url(server, build_type_id);
        log::debug!("GET {url} as {username}");
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Querying {server}"));
        pb.enable_steady_tick(Duration::from_millis(120));
        let res = self
            .client
            .get(&url)
            .basic_auth(username, Some(password))
            .send();
        pb.finish_and_clear();
        let res = res?;
        let status = res.status();
        log::debug!("{url} -> {status}");
        if status != StatusCode::OK {
            return Err(TcError::RequestFailed(status.as_u16()));
        }
        Ok(res.text()?)
    }
}
