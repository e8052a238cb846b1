use crate::reports;
use clap::Args;
use xsux_ime::paths::{AppDirs, LAYOUT_FILE};
use xsux_ime::{ImeResult, LatinLayout};

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Print the key assignments as JSON instead of a grid
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: LayoutArgs, dirs: &AppDirs) -> ImeResult<()> {
    let layout = LatinLayout::with_dirs(dirs.clone());
    let table = layout.table()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.entries())?);
    } else {
        reports::print_layout_grid(LAYOUT_FILE, table);
    }
    Ok(())
}
