use crate::error::ImeResult;
use crate::paths::AppDirs;
use crate::unicode_file::UnicodeFile;
use serde::Serialize;
use std::io::Read;
use strum_macros::{Display, EnumIter};
use tracing::debug;

pub const DEFAULT_LATIN_FONT: &str = "Segoe UI";
pub const DEFAULT_CUNEIFORM_FONT: &str = "Segoe UI Historic";

/// A script with its own font line in `fonts.txt`, named by its ISO 15924 tag.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
pub enum FontScript {
    #[strum(to_string = "Latn")]
    Latin,
    #[strum(to_string = "Xsux")]
    Cuneiform,
}

impl FontScript {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Latin => "Latn:",
            Self::Cuneiform => "Xsux:",
        }
    }

    pub fn default_font(self) -> &'static str {
        match self {
            Self::Latin => DEFAULT_LATIN_FONT,
            Self::Cuneiform => DEFAULT_CUNEIFORM_FONT,
        }
    }
}

/// Scans line by line and returns the remainder of the first line tagged for
/// `script`. Lines end at `\r` or `\n`; the name is returned verbatim.
pub fn find_font<R: Read>(file: &mut UnicodeFile<R>, script: FontScript) -> Option<String> {
    let prefix = script.prefix();
    let mut line = String::new();
    while file.good() {
        line.clear();
        loop {
            let c = file.get();
            if !file.good() || c == '\r' || c == '\n' {
                break;
            }
            line.push(c);
        }
        if let Some(name) = line.strip_prefix(prefix) {
            return Some(name.to_string());
        }
    }
    None
}

pub fn font_or_default<R: Read>(file: &mut UnicodeFile<R>, script: FontScript) -> String {
    find_font(file, script).unwrap_or_else(|| {
        debug!("No '{}' line in fonts file, using '{}'", script, script.default_font());
        script.default_font().to_string()
    })
}

pub fn user_font(dirs: &AppDirs, script: FontScript) -> ImeResult<String> {
    let mut file = dirs.open_fonts_file()?;
    Ok(font_or_default(&mut file, script))
}

pub fn get_user_latin_font() -> ImeResult<String> {
    user_font(&AppDirs::system()?, FontScript::Latin)
}

pub fn get_user_cuneiform_font() -> ImeResult<String> {
    user_font(&AppDirs::system()?, FontScript::Cuneiform)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontPreferences {
    pub latin: String,
    pub cuneiform: String,
}

impl FontPreferences {
    pub fn load(dirs: &AppDirs) -> ImeResult<Self> {
        Ok(Self {
            latin: user_font(dirs, FontScript::Latin)?,
            cuneiform: user_font(dirs, FontScript::Cuneiform)?,
        })
    }
}
