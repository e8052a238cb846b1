use xsux_ime::paths::{AppDirs, FONTS_FILE, LAYOUT_FILE};
use xsux_ime::ImeResult;

pub fn run(dirs: &AppDirs) -> ImeResult<()> {
    println!("Install directory: {}", dirs.install_dir().display());
    println!("User directory:    {}", dirs.user_dir().display());
    println!("Layout file:       {}", dirs.app_data_file(LAYOUT_FILE)?.display());
    println!("Fonts file:        {}", dirs.app_data_file(FONTS_FILE)?.display());
    Ok(())
}
