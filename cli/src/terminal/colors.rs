use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const MANAGER: Color = Color::BrightMagenta;
pub const ENGINEER: Color = Color::BrightBlue;
pub const INTERN: Color = Color::BrightYellow;
pub const EMAIL: Color = Color::Cyan;
