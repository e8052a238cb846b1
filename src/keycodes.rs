use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter};

pub const ANSI_PRINTABLE_KEY_COUNT: usize = 47;

/// Keys per physical row, top to bottom: number row, QWERTY row, home row, bottom row.
pub const ROW_LENGTHS: [usize; 4] = [13, 13, 11, 10];

/// The printable keys of an ANSI keyboard in canonical layout order.
/// Discriminants are Windows virtual-key codes; declaration order is the
/// order in which `layout.txt` assigns characters.
#[derive(Debug, Clone, Copy, EnumIter, EnumCount, Display, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrintableKey {
    #[strum(to_string = "`")]
    Backquote = 0xC0, // VK_OEM_3
    #[strum(to_string = "1")]
    Digit1 = 0x31,
    #[strum(to_string = "2")]
    Digit2 = 0x32,
    #[strum(to_string = "3")]
    Digit3 = 0x33,
    #[strum(to_string = "4")]
    Digit4 = 0x34,
    #[strum(to_string = "5")]
    Digit5 = 0x35,
    #[strum(to_string = "6")]
    Digit6 = 0x36,
    #[strum(to_string = "7")]
    Digit7 = 0x37,
    #[strum(to_string = "8")]
    Digit8 = 0x38,
    #[strum(to_string = "9")]
    Digit9 = 0x39,
    #[strum(to_string = "0")]
    Digit0 = 0x30,
    #[strum(to_string = "-")]
    Minus = 0xBD, // VK_OEM_MINUS
    #[strum(to_string = "=")]
    Equal = 0xBB, // VK_OEM_PLUS

    Q = 0x51,
    W = 0x57,
    E = 0x45,
    R = 0x52,
    T = 0x54,
    Y = 0x59,
    U = 0x55,
    I = 0x49,
    O = 0x4F,
    P = 0x50,
    #[strum(to_string = "[")]
    BracketLeft = 0xDB, // VK_OEM_4
    #[strum(to_string = "]")]
    BracketRight = 0xDD, // VK_OEM_6
    #[strum(to_string = "\\")]
    Backslash = 0xDC, // VK_OEM_5

    A = 0x41,
    S = 0x53,
    D = 0x44,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    #[strum(to_string = ";")]
    Semicolon = 0xBA, // VK_OEM_1
    #[strum(to_string = "'")]
    Quote = 0xDE, // VK_OEM_7

    Z = 0x5A,
    X = 0x58,
    C = 0x43,
    V = 0x56,
    B = 0x42,
    N = 0x4E,
    M = 0x4D,
    #[strum(to_string = ",")]
    Comma = 0xBC, // VK_OEM_COMMA
    #[strum(to_string = ".")]
    Period = 0xBE, // VK_OEM_PERIOD
    #[strum(to_string = "/")]
    Slash = 0xBF, // VK_OEM_2
}

const _: () = assert!(<PrintableKey as EnumCount>::COUNT == ANSI_PRINTABLE_KEY_COUNT);

impl PrintableKey {
    pub const fn virtual_key(self) -> u8 {
        self as u8
    }

    pub fn from_virtual_key(code: u8) -> Option<Self> {
        Self::iter().find(|key| key.virtual_key() == code)
    }
}

pub fn ansi_printable_virtual_key_codes() -> [u8; ANSI_PRINTABLE_KEY_COUNT] {
    let mut codes = [0u8; ANSI_PRINTABLE_KEY_COUNT];
    for (slot, key) in codes.iter_mut().zip(PrintableKey::iter()) {
        *slot = key.virtual_key();
    }
    codes
}
