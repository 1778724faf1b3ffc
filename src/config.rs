use crate::error::{TcError, TcResult};
use crate::ini::Ini;
use crate::platform::platform;
use fs_err as fs;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

const BUILD_FILE: &str = "build.cfg";
const AUTH_DIR: &str = "auth";

const MAIN: &str = "main";
const MAIN_SERVER: &str = "server";
const MAIN_TYPE_ID: &str = "buildTypeId";

const AUTH: &str = "auth";
const AUTH_USER: &str = "user";
const AUTH_PASS: &str = "pass";

/// Which CI job to ask about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    /// `host[:port]`
    pub server: String,
    pub build_type_id: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Credential key for a server: everything before the first `:`.
///
/// `login` and `status` both go through this, so a credential saved for
/// `localhost:8111` is found again for `localhost` or `localhost:9090`.
pub fn hostname(server: &str) -> TcResult<&str> {
    let host = server.split(':').next().unwrap_or_default().trim();
    let invalid = |reason| TcError::InvalidHost { server: server.to_string(), reason };
    if host.is_empty() {
        return Err(invalid("empty host name"));
    }
    if host.contains(['/', '\\']) || host.contains("..") {
        return Err(invalid("host name may not contain path separators"));
    }
    Ok(host)
}

/// On-disk home of the build target and per-host credentials.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform default (`~/.tc`).
    pub fn default_location() -> Self {
        Self::new(platform().default_config_root())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn build_target_path(&self) -> PathBuf {
        self.root.join(BUILD_FILE)
    }

    pub fn credential_path(&self, hostname: &str) -> PathBuf {
        self.root.join(AUTH_DIR).join(format!("{hostname}.cfg"))
    }

    pub fn save_build_target(&self, target: &BuildTarget) -> TcResult<PathBuf> {
        let mut ini = Ini::new();
        ini.set(MAIN, MAIN_SERVER, &target.server);
        ini.set(MAIN, MAIN_TYPE_ID, &target.build_type_id);
        let path = self.build_target_path();
        write_atomic(&path, &ini.render(), false)?;
        log::info!("saved build target {} ({})", target.server, target.build_type_id);
        Ok(path)
    }

    pub fn load_build_target(&self) -> TcResult<BuildTarget> {
        let path = self.build_target_path();
        let ini = read_ini(&path)?;
        match (ini.get(MAIN, MAIN_SERVER), ini.get(MAIN, MAIN_TYPE_ID)) {
            (Some(server), Some(id)) => Ok(BuildTarget {
                server: server.to_string(),
                build_type_id: id.to_string(),
            }),
            _ => {
                log::debug!("{} lacks [{MAIN}] {MAIN_SERVER}/{MAIN_TYPE_ID}", path.display());
                Err(TcError::ConfigMissing { path })
            }
        }
    }

    pub fn save_credential(&self, hostname: &str, credential: &Credential) -> TcResult<PathBuf> {
        let mut ini = Ini::new();
        ini.set(AUTH, AUTH_USER, &credential.username);
        ini.set(AUTH, AUTH_PASS, &credential.password);
        let path = self.credential_path(hostname);
        write_atomic(&path, &ini.render(), true)?;
        log::info!("saved credential for {} as {}", hostname, credential.username);
        Ok(path)
    }

    pub fn load_credential(&self, hostname: &str) -> TcResult<Credential> {
        let path = self.credential_path(hostname);
        let ini = read_ini(&path)?;
        match (ini.get(AUTH, AUTH_USER), ini.get(AUTH, AUTH_PASS)) {
            (Some(user), Some(pass)) => Ok(Credential {
                username: user.to_string(),
                password: pass.to_string(),
            }),
            _ => {
                log::debug!("{} lacks [{AUTH}] {AUTH_USER}/{AUTH_PASS}", path.display());
                Err(TcError::ConfigMissing { path })
            }
        }
    }
}

fn read_ini(path: &Path) -> TcResult<Ini> {
    log::debug!("reading {}", path.display());
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            log::debug!("cannot read {}: {e}", path.display());
            return Err(TcError::ConfigMissing { path: path.to_path_buf() });
        }
    };
    Ini::parse(&data).map_err(|e| {
        log::debug!("cannot parse {}: {e}", path.display());
        TcError::ConfigMissing { path: path.to_path_buf() }
    })
}

/// Whole-file replace: write a sibling `.tmp`, then rename over `path`.
/// The `.tmp` is removed again if either step fails.
fn write_atomic(path: &Path, contents: &str, private: bool) -> TcResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let result = write_then_rename(&tmp, path, contents, private);
    if result.is_err() && tmp.exists() {
        if let Err(e) = fs::remove_file(&tmp) {
            log::warn!("could not remove {}: {e}", tmp.display());
        }
    }
    result
}

fn write_then_rename(tmp: &Path, path: &Path, contents: &str, private: bool) -> TcResult<()> {
    if private {
        let mut file = platform().create_private(tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
    } else {
        fs::write(tmp, contents)?;
    }
    fs::rename(tmp, path)?;
    Ok(())
}
