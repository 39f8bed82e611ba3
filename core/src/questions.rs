//! # Question Catalog
//!
//! Maps a role to the ordered questions needed to build that role's [`Employee`].
//!
//! The base questions (name, id, email) always come first and in that order; the
//! role-specific question is appended last. Every call builds a brand new list, so a
//! caller is free to reorder or extend what it gets back.

use std::collections::HashMap;
use std::fmt;

use teamgen_common::team::{Employee, Rejection, Role, RoleKind, Validator, validate};

use crate::error::{Result, TeamError};

/// A single piece of information collected for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Id,
    Email,
    OfficeNumber,
    School,
    Github,
}

impl Field {
    /// Attribute name the answer is stored under.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Id => "id",
            Field::Email => "email",
            Field::OfficeNumber => "officeNumber",
            Field::School => "school",
            Field::Github => "github",
        }
    }

    pub fn validator(&self) -> Validator {
        match self {
            Field::Name => validate::name,
            Field::Id => validate::id,
            Field::Email => validate::email,
            Field::OfficeNumber => validate::office_number,
            Field::School => validate::school,
            Field::Github => validate::github,
        }
    }

    fn message(&self, role: RoleKind) -> String {
        match self {
            Field::Name => format!("What is the {role}'s name?"),
            Field::Id => format!("What is the {role}'s id?"),
            Field::Email => format!("What is the {role}'s email?"),
            Field::OfficeNumber => format!("What is the {role}'s office number?"),
            Field::School => format!("What school is the {role} currently attending?"),
            Field::Github => format!("What is the {role}'s GitHub username?"),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One question: what to store, what to ask, and how to check the answer.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub field: Field,
    pub message: String,
    pub validator: Option<Validator>,
}

impl FieldDescriptor {
    pub fn new(field: Field, role: RoleKind) -> Self {
        Self {
            field,
            message: field.message(role),
            validator: Some(field.validator()),
        }
    }

    /// Accepts anything when no validator is attached.
    pub fn validate(&self, answer: &str) -> std::result::Result<(), Rejection> {
        match self.validator {
            Some(validator) => validator(answer),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("field", &self.field)
            .field("message", &self.message)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

fn role_field(role: RoleKind) -> Field {
    match role {
        RoleKind::Manager => Field::OfficeNumber,
        RoleKind::Engineer => Field::Github,
        RoleKind::Intern => Field::School,
    }
}

/// Returns the ordered questions for `role`.
pub fn questions_for(role: RoleKind) -> Vec<FieldDescriptor> {
    [Field::Name, Field::Id, Field::Email, role_field(role)]
        .into_iter()
        .map(|field| FieldDescriptor::new(field, role))
        .collect()
}

/// Same as [`questions_for`], for a role given by name.
pub fn questions_for_name(role: &str) -> Result<Vec<FieldDescriptor>> {
    let kind: RoleKind = role.parse().map_err(TeamError::UnknownRole)?;
    Ok(questions_for(kind))
}

/// Validated answers keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<Field, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn cloned(&self, field: Field) -> Result<String> {
        self.get(field)
            .map(str::to_string)
            .ok_or(TeamError::MissingAnswer(field.key()))
    }
}

impl FromIterator<(Field, String)> for Answers {
    fn from_iter<T: IntoIterator<Item = (Field, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Folds a complete answer set into an employee of the given role.
///
/// Validation happens once, in [`Employee::new`]; a refused value is reported under
/// the field that refused it.
pub fn build_employee(role: RoleKind, answers: &Answers) -> Result<Employee> {
    let name = answers.cloned(Field::Name)?;
    let id = answers.cloned(Field::Id)?;
    let email = answers.cloned(Field::Email)?;
    let role_data = match role {
        RoleKind::Manager => Role::Manager {
            office_number: answers.cloned(Field::OfficeNumber)?,
        },
        RoleKind::Engineer => Role::Engineer {
            github: answers.cloned(Field::Github)?,
        },
        RoleKind::Intern => Role::Intern {
            school: answers.cloned(Field::School)?,
        },
    };

    Employee::new(name, id, email, role_data).map_err(|rejection| TeamError::InvalidAnswer {
        field: rejection.field(),
        rejection,
    })
}

/// Asks one question until its validator accepts.
///
/// `next_input` supplies each attempt and `on_reject` is told about every refusal.
/// Nothing from a refused attempt is kept.
pub fn ask_until_valid<I, R>(
    descriptor: &FieldDescriptor,
    mut next_input: I,
    mut on_reject: R,
) -> Result<String>
where
    I: FnMut(&FieldDescriptor) -> Result<String>,
    R: FnMut(&FieldDescriptor, &Rejection),
{
    loop {
        let answer = next_input(descriptor)?;
        match descriptor.validate(&answer) {
            Ok(()) => return Ok(answer),
            Err(rejection) => on_reject(descriptor, &rejection),
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
