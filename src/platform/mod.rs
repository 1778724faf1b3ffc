pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub trait PlatformOps: Sync + Send {
    fn home_dir(&self) -> Option<PathBuf>;
    /// Default directory holding `build.cfg` and `auth/`.
    fn default_config_root(&self) -> PathBuf {
        self.home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tc")
    }
    /// Create (or truncate) a file readable only by its owner from the first byte.
    fn create_private(&self, path: &Path) -> io::Result<File>;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
