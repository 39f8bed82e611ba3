//! End-to-end session runs against scripted collaborators.

mod session;
mod support;
