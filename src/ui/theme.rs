use ratatui::style::Color;

pub const STOUT_CREAM: Color = Color::Rgb(0xf3, 0xe9, 0xd2);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_IDLE: Color = Color::Rgb(0xc8, 0xa9, 0x6e);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_DECREMENT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
