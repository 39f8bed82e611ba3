//! Console output for the roster CLI.
//!
//! Every line goes out as an event on [`PRINT_TARGET`], which the formatter in
//! `logging` writes verbatim. Line builders are kept apart from the emitters.

use std::fmt::Display;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "teamgen::print";

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    line("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title = format!("⟦ TEAMGEN v{} ⟧", env!("CARGO_PKG_VERSION"));
    line(&titled_rule('═', &title, |t| t.bright_green().bold()));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    line(&titled_rule('─', &title, |t| t.bright_green()));
}

pub fn rule() {
    line(&"═".repeat(WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn status(msg: &str) {
    line(&format!("{} {}", ">".color(colors::SEPARATOR), msg.color(colors::TEXT_DEFAULT)));
}

/// A `> key....: value` line whose key column is `width` wide.
pub fn field(key: &str, value: impl Display, width: usize) {
    status(&format!("{} {}", leader(key, width, colors::PRIMARY), value));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    line(&format!("{} {}", idx.color(colors::SEPARATOR), name.color(colors::PRIMARY)));
}

/// Detail rows under a [`tree_head`], keys padded to `width`.
pub fn tree(details: &[Detail], width: usize) {
    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i + 1 == details.len() { "└─" } else { "├─" };
        line(&format!(
            " {} {} {}",
            branch.bright_black(),
            leader(key, width, colors::TEXT_DEFAULT),
            value
        ));
    }
}

pub fn centered(msg: &str) {
    let pad = " ".repeat(WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    line(&format!("{pad}{msg}"));
}

/// Display width of the widest key, for sizing a key column.
pub fn key_width<'a>(keys: impl IntoIterator<Item = &'a str>) -> usize {
    keys.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// `key` followed by dot leaders and a colon. The colon lands one column past
/// the widest key so there is always at least one dot.
fn leader(key: &str, width: usize, key_color: Color) -> String {
    let dots = ".".repeat((width + 1).saturating_sub(key.width()));
    format!(
        "{}{}{}",
        key.color(key_color),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    )
}

/// `title` centered in a [`WIDTH`]-wide line of `fill`.
fn titled_rule(fill: char, title: &str, paint: fn(ColoredString) -> ColoredString) -> String {
    let free = WIDTH.saturating_sub(title.width());
    let left = free / 2;
    let right = free - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left).bright_black(),
        paint(title.into()),
        fill.to_string().repeat(right).bright_black()
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
