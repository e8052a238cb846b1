use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use strum::IntoEnumIterator;
use xsux_ime::fonts::FontPreferences;
use xsux_ime::keycodes::{PrintableKey, ROW_LENGTHS};
use xsux_ime::layouts::{VirtualKeyTable, NO_CHARACTER};
use xsux_ime::unicode_file::REPLACEMENT;

fn display_char(c: char) -> String {
    match c {
        NO_CHARACTER => " ".to_string(),
        REPLACEMENT => "<?>".to_string(),
        _ => c.to_string(),
    }
}

/// Keyboard-shaped grid: each cell shows the key legend over the character it produces.
pub fn print_layout_grid(name: &str, layout: &VirtualKeyTable) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let keys: Vec<PrintableKey> = PrintableKey::iter().collect();
    let mut rest = keys.as_slice();
    for len in ROW_LENGTHS {
        let (row, tail) = rest.split_at(len);
        rest = tail;
        let cells: Vec<Cell> = row
            .iter()
            .map(|&key| {
                let c = layout.character(key.virtual_key());
                Cell::new(format!("{}\n{}", key, display_char(c)))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_fonts(fonts: &FontPreferences) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Script").add_attribute(Attribute::Bold),
        Cell::new("Font").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Latn"), Cell::new(&fonts.latin)]);
    table.add_row(vec![Cell::new("Xsux"), Cell::new(&fonts.cuneiform)]);
    println!("{}", table);
}
