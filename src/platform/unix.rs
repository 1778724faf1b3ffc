use crate::platform::PlatformOps;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
    fn create_private(&self, path: &Path) -> io::Result<File> {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // mode only applies on creation; tighten a file that already existed
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn create_private_sets_0600() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("host.cfg");
        UNIX_PLATFORM.create_private(&file).unwrap();
        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn create_private_tightens_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("host.cfg");
        std::fs::write(&file, "old contents").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o644)).unwrap();
        UNIX_PLATFORM.create_private(&file).unwrap();
        let meta = std::fs::metadata(&file).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
        assert_eq!(meta.len(), 0);
    }
}
