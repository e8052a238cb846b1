#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use xsux_ime::paths::{AppDirs, PRODUCT, VENDOR};

/// US-QWERTY legends in canonical key order.
pub const QWERTY: &str = "`1234567890-=qwertyuiop[]\\asdfghjkl;'zxcvbnm,./";

/// An install directory and a not-yet-created user directory under one temp root.
pub struct TestContext {
    _root: TempDir,
    pub install_dir: PathBuf,
    pub user_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let install_dir = root.path().join("install");
        let user_dir = root.path().join("roaming").join(VENDOR).join(PRODUCT);
        fs::create_dir_all(&install_dir).unwrap();
        Self {
            _root: root,
            install_dir,
            user_dir,
        }
    }

    pub fn dirs(&self) -> AppDirs {
        AppDirs::new(&self.install_dir, &self.user_dir)
    }

    pub fn write_template(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.install_dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_user(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        fs::create_dir_all(&self.user_dir).unwrap();
        let path = self.user_dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

/// 47 consecutive cuneiform signs starting at U+12000.
pub fn cuneiform_row() -> String {
    (0x12000u32..0x12000 + 47).filter_map(char::from_u32).collect()
}
