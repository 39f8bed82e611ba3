use std::io;
use std::path::PathBuf;

use teamgen_common::team::{Rejection, RosterError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TeamError {
    /// A role name outside Manager/Engineer/Intern reached the question catalog.
    #[error("Employee role does not exist: {0}")]
    UnknownRole(String),

    #[error("no answer was collected for `{0}`")]
    MissingAnswer(&'static str),

    /// A prompt service handed back a value its validator would refuse.
    #[error("answer for `{field}` was not validated: {rejection}")]
    InvalidAnswer {
        field: &'static str,
        rejection: Rejection,
    },

    #[error("choice {0} is not on the menu")]
    InvalidChoice(usize),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("failed to read input")]
    Prompt(#[source] io::Error),

    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TeamError>;
