//! Role/skill requirement reference data.
//!
//! The catalog is immutable once loaded. It is built at startup and handed
//! to consumers behind an `Arc` so tests can substitute fixtures instead of
//! reaching into a process-wide table.

pub mod levels;
pub mod loader;

pub use levels::{Importance, Proficiency};

/// One required skill for one role, as read from the roles dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequirement {
    pub role: String,
    pub skill: String,
    pub required: Proficiency,
    pub importance: Importance,
}

/// Read-only table of skill requirements, keyed by (role, skill).
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    requirements: Vec<SkillRequirement>,
}

impl RoleCatalog {
    pub fn new(requirements: Vec<SkillRequirement>) -> Self {
        Self { requirements }
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Unique role names in first-seen order. Drives the dropdown on the
    /// interactive form.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for req in &self.requirements {
            if !roles.contains(&req.role.as_str()) {
                roles.push(&req.role);
            }
        }
        roles
    }

    /// Requirements for one role, in dataset order. Empty when the role is
    /// unknown; callers decide whether that is an error.
    pub fn requirements_for(&self, role: &str) -> Vec<&SkillRequirement> {
        self.requirements
            .iter()
            .filter(|r| r.role == role)
            .collect()
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.requirements.iter().any(|r| r.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RoleCatalog {
        RoleCatalog::new(vec![
            SkillRequirement {
                role: "Data Analyst".to_string(),
                skill: "SQL".to_string(),
                required: Proficiency::Expert,
                importance: Importance::High,
            },
            SkillRequirement {
                role: "Data Analyst".to_string(),
                skill: "Python".to_string(),
                required: Proficiency::Intermediate,
                importance: Importance::Medium,
            },
            SkillRequirement {
                role: "Web Developer".to_string(),
                skill: "JavaScript".to_string(),
                required: Proficiency::Expert,
                importance: Importance::High,
            },
        ])
    }

    #[test]
    fn test_roles_unique_in_first_seen_order() {
        let catalog = fixture();
        assert_eq!(catalog.roles(), vec!["Data Analyst", "Web Developer"]);
    }

    #[test]
    fn test_requirements_for_preserves_dataset_order() {
        let catalog = fixture();
        let reqs = catalog.requirements_for("Data Analyst");
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].skill, "SQL");
        assert_eq!(reqs[1].skill, "Python");
    }

    #[test]
    fn test_unknown_role_yields_no_requirements() {
        let catalog = fixture();
        assert!(catalog.requirements_for("Astronaut").is_empty());
        assert!(!catalog.contains_role("Astronaut"));
    }
}
