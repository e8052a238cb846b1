//! Install directory, per-user roaming directory, and first-use seeding of
//! config files from the install templates.

use crate::error::{ImeError, ImeResult};
use crate::unicode_file::UnicodeFile;
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

pub const VENDOR: &str = "mockingbirdnest";
pub const PRODUCT: &str = "Xsux IME";

pub const LAYOUT_FILE: &str = "layout.txt";
pub const FONTS_FILE: &str = "fonts.txt";

static ROAMING_APP_DATA: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Two levels above the running executable, e.g. `<install>/bin/xsux-ime` -> `<install>`.
/// Empty if the executable path cannot be determined.
pub fn application_directory() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default(),
        Err(e) => {
            warn!("Could not determine the executable path: {}", e);
            PathBuf::new()
        }
    }
}

fn roaming_app_data() -> Option<&'static Path> {
    ROAMING_APP_DATA
        .get_or_init(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
        .as_deref()
}

/// `<roaming>/mockingbirdnest/Xsux IME`, created if absent.
pub fn user_app_data_directory() -> ImeResult<PathBuf> {
    let root = roaming_app_data().ok_or(ImeError::NoRoamingDirectory)?;
    let path = root.join(VENDOR).join(PRODUCT);
    ensure_directory(&path)?;
    Ok(path)
}

/// Seeds `name` into the user directory from the install directory if needed.
pub fn app_data_file(name: &str) -> ImeResult<PathBuf> {
    AppDirs::system()?.app_data_file(name)
}

fn ensure_directory(path: &Path) -> ImeResult<()> {
    if !path.exists() {
        debug!("Creating directory {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// The template directory and the live user directory, resolved together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    install_dir: PathBuf,
    user_dir: PathBuf,
}

impl AppDirs {
    pub fn new(install_dir: impl Into<PathBuf>, user_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            user_dir: user_dir.into(),
        }
    }

    pub fn system() -> ImeResult<Self> {
        Ok(Self::new(application_directory(), user_app_data_directory()?))
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// `user_dir/name`, copied from `install_dir/name` the first time it is missing.
    /// An existing user file is never overwritten.
    pub fn app_data_file(&self, name: &str) -> ImeResult<PathBuf> {
        ensure_directory(&self.user_dir)?;
        let path = self.user_dir.join(name);
        if !path.exists() {
            let template = self.install_dir.join(name);
            fs::copy(&template, &path).map_err(|source| ImeError::SeedFailed {
                name: name.to_string(),
                source_path: template.clone(),
                source,
            })?;
            debug!("Seeded {} from {}", path.display(), template.display());
        }
        Ok(path)
    }

    pub fn open_layout_file(&self) -> ImeResult<UnicodeFile> {
        Ok(UnicodeFile::open(self.app_data_file(LAYOUT_FILE)?))
    }

    pub fn open_fonts_file(&self) -> ImeResult<UnicodeFile> {
        Ok(UnicodeFile::open(self.app_data_file(FONTS_FILE)?))
    }
}
