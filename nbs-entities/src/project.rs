use std::{borrow::Borrow, fmt, str::FromStr};

use uuid::Uuid;

use crate::{geometry::Position, solution::Solution};

/// Public project identifier with a string representation.
///
/// Generated identifiers take the form `proj-<8 hex chars>`.
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    const PREFIX: &'static str = "proj-";

    pub fn new() -> Self {
        let uuid = Uuid::new_v4().as_simple().to_string();
        Self(format!("{}{}", Self::PREFIX, &uuid[..8]))
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for ProjectId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ProjectId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ProjectId> for String {
    fn from(from: ProjectId) -> Self {
        from.0
    }
}

impl FromStr for ProjectId {
    type Err = ();
    fn from_str(s: &str) -> Result<ProjectId, Self::Err> {
        Ok(s.into())
    }
}

impl Borrow<str> for ProjectId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// Map display configuration, passed through unchanged by conversions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapSettings {
    /// Map center, lon/lat.
    pub center: Option<Position>,
    pub zoom: Option<f64>,
    pub base_layer: Option<String>,
}

/// A named collection of solutions with shared settings and targets.
///
/// `settings` and `targets` are free-form trees whose schema is externally
/// owned; internally every key is snake_case at every depth. `areas` are
/// shared references: removing a solution from a project does not delete
/// the solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub settings: Option<serde_json::Value>,
    pub targets: Option<serde_json::Value>,
    pub map: Option<MapSettings>,
    pub areas: Vec<Solution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_prefix_and_length() {
        let id = ProjectId::new();
        assert!(id.as_str().starts_with("proj-"));
        assert_eq!(id.as_str().len(), "proj-".len() + 8);
        assert!(id.is_valid());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
    }
}
