mod common;

use common::TestContext;
use rstest::rstest;
use std::io::Cursor;
use xsux_ime::fonts::{
    find_font, font_or_default, user_font, FontPreferences, FontScript, DEFAULT_CUNEIFORM_FONT,
    DEFAULT_LATIN_FONT,
};
use xsux_ime::paths::FONTS_FILE;
use xsux_ime::unicode_file::UnicodeFile;
use xsux_ime::ImeError;

fn font_from(bytes: &[u8], script: FontScript) -> String {
    let mut file = UnicodeFile::from_reader(Cursor::new(bytes.to_vec()));
    font_or_default(&mut file, script)
}

#[rstest]
#[case("Xsux:NotoCuneiform\nLatn:Arial\n", FontScript::Cuneiform, "NotoCuneiform")]
#[case("Xsux:NotoCuneiform\nLatn:Arial\n", FontScript::Latin, "Arial")]
#[case("Latn:Consolas", FontScript::Latin, "Consolas")] // No trailing newline
#[case("Latn:Consolas", FontScript::Cuneiform, DEFAULT_CUNEIFORM_FONT)]
#[case("", FontScript::Latin, DEFAULT_LATIN_FONT)]
#[case("", FontScript::Cuneiform, DEFAULT_CUNEIFORM_FONT)]
#[case("latn:Arial\nLATN:Arial\n", FontScript::Latin, DEFAULT_LATIN_FONT)] // Case-sensitive
#[case(" Latn:Arial\n", FontScript::Latin, DEFAULT_LATIN_FONT)] // Prefix must start the line
#[case("Latn:First\nLatn:Second\n", FontScript::Latin, "First")]
#[case("Latn:\n", FontScript::Latin, "")] // Empty name is still a match
#[case("Latn: Padded Name  \n", FontScript::Latin, " Padded Name  ")]
#[case("Latn:Arial\r\nXsux:Segoe UI Symbol\r\n", FontScript::Cuneiform, "Segoe UI Symbol")]
#[case("comment\n\n\rXsux:𒀭 Font\n", FontScript::Cuneiform, "𒀭 Font")]
fn test_font_lookup(#[case] content: &str, #[case] script: FontScript, #[case] expected: &str) {
    assert_eq!(font_from(content.as_bytes(), script), expected);
}

#[test]
fn test_find_font_reports_absence() {
    let mut file = UnicodeFile::from_reader(Cursor::new(b"Xsux:Only\n".to_vec()));
    assert_eq!(find_font(&mut file, FontScript::Latin), None);
    assert!(!file.good());
}

#[test]
fn test_find_font_stops_at_first_match() {
    let mut file = UnicodeFile::from_reader(Cursor::new(b"Latn:Arial\nrest".to_vec()));
    assert_eq!(find_font(&mut file, FontScript::Latin).as_deref(), Some("Arial"));
    // The remaining lines are left unread.
    assert_eq!(file.get(), 'r');
}

#[test]
fn test_closed_file_yields_defaults() {
    let mut file = UnicodeFile::<Cursor<Vec<u8>>>::closed();
    assert_eq!(font_or_default(&mut file, FontScript::Latin), DEFAULT_LATIN_FONT);
    let mut file = UnicodeFile::<Cursor<Vec<u8>>>::closed();
    assert_eq!(
        font_or_default(&mut file, FontScript::Cuneiform),
        DEFAULT_CUNEIFORM_FONT
    );
}

#[test]
fn test_byte_order_mark_is_ignored() {
    assert_eq!(
        font_from("\u{FEFF}Latn:Arial\n".as_bytes(), FontScript::Latin),
        "Arial"
    );
}

#[test]
fn test_malformed_bytes_become_replacement_characters() {
    assert_eq!(font_from(b"Latn:Ar\xFFal\n", FontScript::Latin), "Ar\u{FFFD}al");
}

#[test]
fn test_user_font_seeds_and_reads_fonts_file() {
    let ctx = TestContext::new();
    ctx.write_template(FONTS_FILE, "Xsux:NotoCuneiform\nLatn:Arial\n");

    let dirs = ctx.dirs();
    assert_eq!(user_font(&dirs, FontScript::Cuneiform).unwrap(), "NotoCuneiform");
    assert_eq!(user_font(&dirs, FontScript::Latin).unwrap(), "Arial");
    assert!(ctx.user_dir.join(FONTS_FILE).exists());
}

#[test]
fn test_user_font_prefers_user_copy() {
    let ctx = TestContext::new();
    ctx.write_template(FONTS_FILE, "Latn:Template\n");
    ctx.write_user(FONTS_FILE, "Latn:Consolas");

    let prefs = FontPreferences::load(&ctx.dirs()).unwrap();
    assert_eq!(
        prefs,
        FontPreferences {
            latin: "Consolas".to_string(),
            cuneiform: DEFAULT_CUNEIFORM_FONT.to_string(),
        }
    );
}

#[test]
fn test_user_font_without_any_file_propagates_seed_error() {
    let ctx = TestContext::new();
    let err = user_font(&ctx.dirs(), FontScript::Latin).unwrap_err();
    assert!(matches!(err, ImeError::SeedFailed { .. }));
}

#[test]
fn test_script_tags() {
    assert_eq!(FontScript::Latin.to_string(), "Latn");
    assert_eq!(FontScript::Cuneiform.to_string(), "Xsux");
    assert_eq!(FontScript::Latin.prefix(), "Latn:");
    assert_eq!(FontScript::Cuneiform.prefix(), "Xsux:");
}
