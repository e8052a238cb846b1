use crate::error::ImeResult;
use crate::paths::{application_directory, user_app_data_directory, AppDirs};
use clap::Args;
use std::path::PathBuf;

/// Where the install templates and the user's live config files live.
/// Unset fields fall back to the executable's install directory and the
/// roaming per-user directory.
#[derive(Args, Debug, Clone, Default)]
pub struct Locations {
    /// Directory holding the template layout.txt and fonts.txt
    #[arg(global = true, long, env = "XSUX_IME_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    /// Directory holding the user's layout.txt and fonts.txt
    #[arg(global = true, long, env = "XSUX_IME_USER_DIR")]
    pub user_dir: Option<PathBuf>,
}

impl Locations {
    pub fn resolve(&self) -> ImeResult<AppDirs> {
        let install_dir = match &self.install_dir {
            Some(dir) => dir.clone(),
            None => application_directory(),
        };
        let user_dir = match &self.user_dir {
            Some(dir) => dir.clone(),
            None => user_app_data_directory()?,
        };
        Ok(AppDirs::new(install_dir, user_dir))
    }
}
