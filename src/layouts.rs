use crate::error::ImeResult;
use crate::keycodes::{PrintableKey, ANSI_PRINTABLE_KEY_COUNT};
use crate::paths::AppDirs;
use crate::unicode_file::UnicodeFile;
use serde::Serialize;
use std::io::Read;
use std::sync::{Mutex, OnceLock, PoisonError};
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Initial value of every layout slot before the file is read.
pub const FILLER: char = 'E';

/// Table value for virtual-key codes with no assigned character.
pub const NO_CHARACTER: char = '\0';

pub const VIRTUAL_KEY_RANGE: usize = 256;

/// One character per [`PrintableKey`], in canonical key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfiguration(pub [char; ANSI_PRINTABLE_KEY_COUNT]);

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self([FILLER; ANSI_PRINTABLE_KEY_COUNT])
    }
}

impl LayoutConfiguration {
    pub fn chars(&self) -> &[char; ANSI_PRINTABLE_KEY_COUNT] {
        &self.0
    }
}

/// Reads the first 47 characters that are not `\r`, `\n` or a space.
///
/// Reading goes through [`UnicodeFile::get`], so a file with fewer than 47
/// significant characters (or no file at all) fills the remaining slots with
/// U+FFFD rather than leaving [`FILLER`] in place.
pub fn read_layout_configuration<R: Read>(file: &mut UnicodeFile<R>) -> LayoutConfiguration {
    let mut config = LayoutConfiguration::default();
    for slot in config.0.iter_mut() {
        *slot = loop {
            let c = file.get();
            if !matches!(c, '\r' | '\n' | ' ') {
                break c;
            }
        };
    }
    config
}

pub fn layout_configuration(dirs: &AppDirs) -> ImeResult<LayoutConfiguration> {
    let mut file = dirs.open_layout_file()?;
    Ok(read_layout_configuration(&mut file))
}

pub fn get_layout_configuration() -> ImeResult<LayoutConfiguration> {
    layout_configuration(&AppDirs::system()?)
}

/// Character produced by each of the 256 virtual-key codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualKeyTable([char; VIRTUAL_KEY_RANGE]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub key: String,
    pub virtual_key: u8,
    pub character: char,
}

impl VirtualKeyTable {
    /// The raw entry; [`NO_CHARACTER`] for unassigned codes.
    pub fn character(&self, virtual_key: u8) -> char {
        self.0[virtual_key as usize]
    }

    pub fn lookup(&self, virtual_key: u8) -> Option<char> {
        Some(self.character(virtual_key)).filter(|&c| c != NO_CHARACTER)
    }

    pub fn entries(&self) -> Vec<LayoutEntry> {
        PrintableKey::iter()
            .map(|key| LayoutEntry {
                key: key.to_string(),
                virtual_key: key.virtual_key(),
                character: self.character(key.virtual_key()),
            })
            .collect()
    }
}

/// Spreads the 47 configured characters over the full virtual-key range.
pub fn get_layout(config: &LayoutConfiguration) -> VirtualKeyTable {
    let mut table = [NO_CHARACTER; VIRTUAL_KEY_RANGE];
    for (key, &c) in PrintableKey::iter().zip(config.0.iter()) {
        table[key.virtual_key() as usize] = c;
    }
    VirtualKeyTable(table)
}

/// The Latin layout, read and built once on first use and kept for the life
/// of the value. Later edits to `layout.txt` are not observed.
pub struct LatinLayout {
    dirs: Option<AppDirs>,
    table: OnceLock<VirtualKeyTable>,
    init: Mutex<()>,
}

static LATIN_LAYOUT: LatinLayout = LatinLayout::system();

/// The process-wide layout backed by the system directories.
pub fn latin_layout() -> &'static LatinLayout {
    &LATIN_LAYOUT
}

impl LatinLayout {
    pub const fn system() -> Self {
        Self {
            dirs: None,
            table: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    pub fn with_dirs(dirs: AppDirs) -> Self {
        Self {
            dirs: Some(dirs),
            table: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }

    /// Builds at most once. A failed build is not cached, so the next call retries.
    pub fn table(&self) -> ImeResult<&VirtualKeyTable> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = self.table.get() {
            return Ok(table);
        }

        let config = match &self.dirs {
            Some(dirs) => layout_configuration(dirs)?,
            None => get_layout_configuration()?,
        };
        debug!("Layout characters: {}", config.0.iter().collect::<String>());
        let table = get_layout(&config);
        info!("Built Latin layout table");
        Ok(self.table.get_or_init(|| table))
    }

    pub fn get_character(&self, virtual_key: u8) -> ImeResult<char> {
        Ok(self.table()?.character(virtual_key))
    }

    pub fn lookup(&self, virtual_key: u8) -> ImeResult<Option<char>> {
        Ok(self.table()?.lookup(virtual_key))
    }
}
