use colored::*;
use teamgen_common::team::{Employee, Role, RoleKind};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn role_color(kind: RoleKind) -> Color {
    match kind {
        RoleKind::Manager => colors::MANAGER,
        RoleKind::Engineer => colors::ENGINEER,
        RoleKind::Intern => colors::INTERN,
    }
}

/// Key/value rows shown under an employee's name in the roster tree.
pub fn employee_to_details(employee: &Employee) -> Vec<Detail> {
    let role: ColoredString = employee.role().color(role_color(employee.kind())).bold();
    let extra: Detail = match employee.role_data() {
        Role::Manager { office_number } => ("Office".to_string(), office_number.normal()),
        Role::Engineer { github } => ("GitHub".to_string(), github.normal()),
        Role::Intern { school } => ("School".to_string(), school.normal()),
    };

    vec![
        ("Role".to_string(), role),
        ("ID".to_string(), employee.id().to_string().normal()),
        ("Email".to_string(), employee.email().color(colors::EMAIL)),
        extra,
    ]
}
