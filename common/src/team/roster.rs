use thiserror::Error;

use crate::team::employee::{Employee, RoleKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A roster can only be founded by a manager.
    #[error("a roster must start with a Manager, got {0}")]
    NotAManager(RoleKind),
    /// The founding manager is the only one a roster ever holds.
    #[error("the roster already has a Manager")]
    DuplicateManager,
}

/// Team members in arrival order. Index 0 is always the manager.
///
/// Append-only: nothing is ever removed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Employee>,
}

impl Roster {
    pub fn new(manager: Employee) -> Result<Self, RosterError> {
        match manager.kind() {
            RoleKind::Manager => Ok(Self {
                members: vec![manager],
            }),
            other => Err(RosterError::NotAManager(other)),
        }
    }

    pub fn push(&mut self, member: Employee) -> Result<(), RosterError> {
        if member.kind() == RoleKind::Manager {
            return Err(RosterError::DuplicateManager);
        }
        self.members.push(member);
        Ok(())
    }

    pub fn manager(&self) -> &Employee {
        &self.members[0]
    }

    pub fn members(&self) -> &[Employee] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.members.iter()
    }

    /// Never zero.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: the founding manager can't be removed.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn count_of(&self, kind: RoleKind) -> usize {
        self.members.iter().filter(|e| e.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Employee {
        Employee::manager("Ada", "1", "ada@x.com", "100").unwrap()
    }

    #[test]
    fn manager_is_always_first() {
        let mut roster = Roster::new(ada()).unwrap();
        roster
            .push(Employee::intern("Bo", "2", "bo@y.com", "MIT").unwrap())
            .unwrap();
        roster
            .push(Employee::engineer("Cy", "3", "cy@z.com", "cy-dev").unwrap())
            .unwrap();

        let names: Vec<&str> = roster.iter().map(Employee::name).collect();
        assert_eq!(names, ["Ada", "Bo", "Cy"]);
        assert_eq!(roster.manager().name(), "Ada");
        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
        assert_eq!(roster.count_of(RoleKind::Intern), 1);
        assert_eq!(roster.count_of(RoleKind::Engineer), 1);
    }

    #[test]
    fn roster_cannot_start_without_a_manager() {
        let bo = Employee::intern("Bo", "2", "bo@y.com", "MIT").unwrap();
        assert_eq!(
            Roster::new(bo),
            Err(RosterError::NotAManager(RoleKind::Intern))
        );
    }

    #[test]
    fn second_manager_is_refused() {
        let mut roster = Roster::new(ada()).unwrap();
        let other = Employee::manager("Grace", "9", "grace@x.com", "200").unwrap();

        assert_eq!(roster.push(other), Err(RosterError::DuplicateManager));
        assert_eq!(roster.len(), 1);
    }
}
