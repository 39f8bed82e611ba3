//! # Field Validation
//!
//! Pure checks applied to a single raw answer before it is accepted.
//!
//! Every validator has the same shape, `&str -> Result<(), Rejection>`, so they can be
//! stored as plain function pointers inside question descriptors. The emptiness check
//! (after trimming) always runs first; a blank answer never reaches a format check.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Longest handle GitHub accepts.
pub const GITHUB_MAX_LEN: usize = 39;

/// A refused answer, carrying the message shown to the user before the field is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Rejection {
    field: &'static str,
    message: &'static str,
}

impl Rejection {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Attribute name of the refused field, e.g. `"officeNumber"`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Signature shared by every field validator.
pub type Validator = fn(&str) -> Result<(), Rejection>;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static GITHUB_RE: OnceLock<Regex> = OnceLock::new();

/// Local part: anything but spaces and `@`.
/// Domain label: one or more alphanumerics with at most one interior hyphen.
/// Tail: one or more `.letters` groups.
fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^ @]+@[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)?(\.[a-zA-Z]+)+$")
            .expect("email pattern is valid")
    })
}

/// Alphanumeric runs joined by single hyphens. Length is checked separately.
fn github_re() -> &'static Regex {
    GITHUB_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9](?:-?[a-zA-Z0-9])*$").expect("github pattern is valid")
    })
}

fn is_empty(answer: &str) -> bool {
    answer.trim().is_empty()
}

fn is_digits(answer: &str) -> bool {
    !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit())
}

pub fn name(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("name", "Name cannot be empty!"));
    }
    Ok(())
}

pub fn id(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("id", "ID cannot be empty!"));
    }
    if !is_digits(answer) {
        return Err(Rejection::new("id", "ID can only contain numbers!"));
    }
    Ok(())
}

pub fn email(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("email", "Email cannot be empty!"));
    }
    if !email_re().is_match(answer) {
        return Err(Rejection::new("email", "Invalid email format!"));
    }
    Ok(())
}

pub fn office_number(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("officeNumber", "Office number cannot be empty!"));
    }
    if !is_digits(answer) {
        return Err(Rejection::new(
            "officeNumber",
            "Office number can only contain numbers!",
        ));
    }
    Ok(())
}

pub fn school(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("school", "School cannot be empty!"));
    }
    Ok(())
}

pub fn github(answer: &str) -> Result<(), Rejection> {
    if is_empty(answer) {
        return Err(Rejection::new("github", "GitHub username cannot be empty!"));
    }
    if answer.len() > GITHUB_MAX_LEN || !github_re().is_match(answer) {
        return Err(Rejection::new("github", "Invalid GitHub username format!"));
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
