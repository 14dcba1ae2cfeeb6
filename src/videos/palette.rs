//! Colors shared by both videos.

use crate::foundation::core::Rgba8;

pub const BG_DEEP: Rgba8 = Rgba8::rgb(0x05, 0x0d, 0x18);
pub const BG_PRIMARY: Rgba8 = Rgba8::rgb(0x0a, 0x16, 0x28);
pub const BG_SECONDARY: Rgba8 = Rgba8::rgb(0x11, 0x1d, 0x32);
pub const BG_CARD: Rgba8 = Rgba8::rgb(0x15, 0x22, 0x38);
pub const BORDER: Rgba8 = Rgba8::rgb(0x1e, 0x3a, 0x5f);
pub const TEXT_PRIMARY: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
pub const TEXT_SECONDARY: Rgba8 = Rgba8::rgb(0x94, 0xa3, 0xb8);
pub const TEXT_MUTED: Rgba8 = Rgba8::rgb(0x64, 0x74, 0x8b);

pub const ACCENT: Rgba8 = Rgba8::rgb(0x00, 0xd4, 0xff);
pub const ACCENT_DIM: Rgba8 = Rgba8::rgba(0x00, 0xd4, 0xff, 38);
pub const ACCENT_GLOW: Rgba8 = Rgba8::rgba(0x00, 0xd4, 0xff, 102);

pub const SUCCESS: Rgba8 = Rgba8::rgb(0x22, 0xc5, 0x5e);
pub const SUCCESS_DIM: Rgba8 = Rgba8::rgba(0x22, 0xc5, 0x5e, 31);

pub const ERROR: Rgba8 = Rgba8::rgb(0xef, 0x44, 0x44);
pub const ERROR_DIM: Rgba8 = Rgba8::rgba(0xef, 0x44, 0x44, 31);

pub const WARNING: Rgba8 = Rgba8::rgb(0xf5, 0x9e, 0x0b);

pub const EXCEL_GREEN: Rgba8 = Rgba8::rgb(0x21, 0x73, 0x46);
pub const PDF_RED: Rgba8 = Rgba8::rgb(0xd9, 0x30, 0x25);
pub const TABLE_HEADER: Rgba8 = Rgba8::rgb(0x0d, 0x28, 0x47);
pub const TABLE_ROW_EVEN: Rgba8 = Rgba8::rgb(0x0f, 0x1e, 0x35);
pub const TABLE_ROW_ODD: Rgba8 = Rgba8::rgb(0x12, 0x1f, 0x36);

pub const VIOLET: Rgba8 = Rgba8::rgb(0x8b, 0x5c, 0xf6);
pub const BLUE: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
pub const CYAN: Rgba8 = Rgba8::rgb(0x06, 0xb6, 0xd4);

/// `color` with its alpha replaced by the hex suffix `suffix` (`#rrggbb` + `aa`).
pub const fn with_hex_alpha(color: Rgba8, suffix: u8) -> Rgba8 {
    Rgba8::rgba(color.r, color.g, color.b, suffix)
}
