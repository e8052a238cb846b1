use clap::Args;
use xsux_ime::keycodes::PrintableKey;
use xsux_ime::paths::AppDirs;
use xsux_ime::{ImeResult, LatinLayout};

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Virtual-key code, decimal or 0x-prefixed hex
    #[arg(value_parser = parse_virtual_key)]
    pub code: u8,
}

fn parse_virtual_key(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("'{}' is not a virtual-key code in 0..=255: {}", s, e))
}

pub fn run(args: KeyArgs, dirs: &AppDirs) -> ImeResult<()> {
    let layout = LatinLayout::with_dirs(dirs.clone());
    let legend = PrintableKey::from_virtual_key(args.code)
        .map(|key| key.to_string())
        .unwrap_or_else(|| "-".to_string());

    match layout.lookup(args.code)? {
        Some(c) => println!("0x{:02X} [{}] -> {} (U+{:04X})", args.code, legend, c, c as u32),
        None => println!("0x{:02X} [{}] -> (no character)", args.code, legend),
    }
    Ok(())
}
