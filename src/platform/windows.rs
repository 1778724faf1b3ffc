use crate::platform::PlatformOps;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn home_dir(&self) -> Option<PathBuf> { dirs::home_dir() }
    // user profile directories are already private on Windows
    fn create_private(&self, path: &Path) -> io::Result<File> { File::create(path) }
}
