use crate::reports;
use clap::Args;
use xsux_ime::fonts::FontPreferences;
use xsux_ime::paths::AppDirs;
use xsux_ime::ImeResult;

#[derive(Args, Debug, Clone)]
pub struct FontsArgs {
    /// Print as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: FontsArgs, dirs: &AppDirs) -> ImeResult<()> {
    let fonts = FontPreferences::load(dirs)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&fonts)?);
    } else {
        reports::print_fonts(&fonts);
    }
    Ok(())
}
