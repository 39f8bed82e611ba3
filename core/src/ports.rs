//! # Collaborator Ports
//!
//! Traits for everything the session needs from the outside world: reading answers,
//! turning a roster into markup, and persisting that markup.
//!
//! ## Rules
//! 1. Only traits live here. Implementations are in [`crate::render`],
//!    [`crate::output`] and the CLI crate.
//! 2. Validation never leaks through [`PromptService::ask`]: a returned answer set
//!    only holds values their validators accepted.

use std::path::Path;

use async_trait::async_trait;
use teamgen_common::team::Roster;

use crate::error::Result;
use crate::questions::{Answers, FieldDescriptor};

#[async_trait]
pub trait PromptService: Send {
    /// Asks every question in order, re-asking a field until it validates.
    async fn ask(&mut self, questions: Vec<FieldDescriptor>) -> Result<Answers>;

    /// Shows a menu and returns the index of the picked choice.
    async fn choose(&mut self, message: &str, choices: &[&str]) -> Result<usize>;
}

/// Pure: the same roster always renders to the same markup.
pub trait Renderer: Send + Sync {
    fn render(&self, roster: &Roster) -> String;
}

#[async_trait]
pub trait OutputWriter: Send + Sync {
    /// Creates `path` and its parents. Succeeds if it already exists.
    async fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Creates or truncates `path`.
    async fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}
