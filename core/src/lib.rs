//! # Team Roster Core
//!
//! The interactive part of the roster generator, kept free of any terminal code:
//!
//! * **[`questions`]**: which questions build which role, and the re-ask loop.
//! * **[`session`]**: the state machine that collects a team and hands it off.
//! * **[`ports`]**: traits for the prompt, renderer and output collaborators.
//! * **[`render`]** / **[`output`]**: the HTML page renderer and the filesystem writer.

pub mod error;
pub mod output;
pub mod ports;
pub mod questions;
pub mod render;
pub mod session;

pub use error::{Result, TeamError};
