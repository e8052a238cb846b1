pub mod fonts;
pub mod key;
pub mod layout;
pub mod paths;
