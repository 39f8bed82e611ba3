//! # Employee Model
//!
//! A team member is one [`Employee`] record whose [`Role`] arm carries the single
//! field that distinguishes a manager, an engineer and an intern.
//!
//! Records are only built from answers that already passed validation, and are
//! never mutated afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::team::validate::{self, Rejection};

/// Role discriminator, used wherever only the *kind* of employee matters
/// (question selection, menus, headers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    Manager,
    Engineer,
    Intern,
}

impl RoleKind {
    pub const ALL: [RoleKind; 3] = [RoleKind::Manager, RoleKind::Engineer, RoleKind::Intern];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Manager => "Manager",
            RoleKind::Engineer => "Engineer",
            RoleKind::Intern => "Intern",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = String;

    /// Parses a role from its display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// Role-specific data. Exactly one extra field per arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Manager { office_number: String },
    Engineer { github: String },
    Intern { school: String },
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Manager { .. } => RoleKind::Manager,
            Role::Engineer { .. } => RoleKind::Engineer,
            Role::Intern { .. } => RoleKind::Intern,
        }
    }
}

/// Digits-only identifier with no upper bound.
///
/// The text is kept as typed for display, but identity is numeric: `"007"` and `"7"`
/// are the same id. Comparison works on the digits without leading zeros, so ids
/// longer than any integer type still order correctly.
#[derive(Debug, Clone)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(raw: impl Into<String>) -> Result<Self, Rejection> {
        let raw = raw.into();
        validate::id(&raw)?;
        Ok(Self(raw))
    }

    /// The id exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical digits: leading zeros removed, `"0"` for an all-zero id.
    pub fn value(&self) -> &str {
        match self.0.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        }
    }
}

impl PartialEq for EmployeeId {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for EmployeeId {}

impl Hash for EmployeeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl Ord for EmployeeId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.value(), other.value());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl PartialOrd for EmployeeId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    id: EmployeeId,
    email: String,
    role: Role,
}

impl Employee {
    /// Builds an employee, re-checking every field against its validator.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, Rejection> {
        let name = name.into();
        let email = email.into();

        validate::name(&name)?;
        let id = EmployeeId::new(id)?;
        validate::email(&email)?;
        match &role {
            Role::Manager { office_number } => validate::office_number(office_number)?,
            Role::Engineer { github } => validate::github(github)?,
            Role::Intern { school } => validate::school(school)?,
        }

        Ok(Self {
            name,
            id,
            email,
            role,
        })
    }

    pub fn manager(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        office_number: impl Into<String>,
    ) -> Result<Self, Rejection> {
        let office_number = office_number.into();
        Self::new(name, id, email, Role::Manager { office_number })
    }

    pub fn engineer(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        github: impl Into<String>,
    ) -> Result<Self, Rejection> {
        let github = github.into();
        Self::new(name, id, email, Role::Engineer { github })
    }

    pub fn intern(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        school: impl Into<String>,
    ) -> Result<Self, Rejection> {
        let school = school.into();
        Self::new(name, id, email, Role::Intern { school })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name of the role, e.g. `"Engineer"`.
    pub fn role(&self) -> &'static str {
        self.role.kind().as_str()
    }

    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn role_data(&self) -> &Role {
        &self.role
    }

    pub fn office_number(&self) -> Option<&str> {
        match &self.role {
            Role::Manager { office_number } => Some(office_number),
            _ => None,
        }
    }

    pub fn github(&self) -> Option<&str> {
        match &self.role {
            Role::Engineer { github } => Some(github),
            _ => None,
        }
    }

    pub fn school(&self) -> Option<&str> {
        match &self.role {
            Role::Intern { school } => Some(school),
            _ => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
