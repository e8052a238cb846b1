pub mod config;
pub mod error;
pub mod fonts;
pub mod keycodes;
pub mod layouts;
pub mod paths;
pub mod unicode_file;
// cmd and reports belong to the binary (main.rs).

pub use error::{ImeError, ImeResult};
pub use layouts::{latin_layout, LatinLayout};
