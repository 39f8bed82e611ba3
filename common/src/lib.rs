pub mod config;
pub mod macros;
pub mod team;

#[doc(hidden)]
pub use tracing;
