//! # Team Model
//!
//! Leaf types shared by every other crate: answer validation, the employee
//! record with its role variants, and the manager-first roster.

pub mod employee;
pub mod roster;
pub mod validate;

pub use employee::{Employee, EmployeeId, Role, RoleKind};
pub use roster::{Roster, RosterError};
pub use validate::{Rejection, Validator};
