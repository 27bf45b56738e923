//! Parsed representation of an object path.

use std::fmt;
use std::str::FromStr;

use super::error::PathError;
use super::parser::Parser;

/// One `Name[index]` link of a component chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentStep {
    pub name: String,
    /// Occurrence index among same-named components of the owning actor.
    pub index: usize,
}

impl ComponentStep {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for ComponentStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.index)
    }
}

/// A complete object path.
///
/// Records are plain values: they never reference live scene objects. The
/// `Default` record has empty names and is what the resolver falls back to
/// when a path fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathRecord {
    pub world_name: String,
    pub level_name: String,
    /// Occurrence index among same-named levels of the world.
    pub level_index: usize,
    pub actor_name: String,
    /// Occurrence index among same-named actors of the level.
    pub actor_index: usize,
    pub component_steps: Vec<ComponentStep>,
}

impl PathRecord {
    /// Creates a record addressing the first occurrence of each name, with no
    /// component chain.
    pub fn new(
        world_name: impl Into<String>,
        level_name: impl Into<String>,
        actor_name: impl Into<String>,
    ) -> Self {
        Self {
            world_name: world_name.into(),
            level_name: level_name.into(),
            actor_name: actor_name.into(),
            ..Self::default()
        }
    }

    pub fn with_level_index(mut self, index: usize) -> Self {
        self.level_index = index;
        self
    }

    pub fn with_actor_index(mut self, index: usize) -> Self {
        self.actor_index = index;
        self
    }

    /// Appends a step to the component chain.
    pub fn with_component(mut self, name: impl Into<String>, index: usize) -> Self {
        self.component_steps.push(ComponentStep::new(name, index));
        self
    }

    /// Parses a path string. See [`Parser`] for the grammar.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        Parser::parse(path)
    }

    /// The `world@level[i]:/actor[j]` prefix, without the component chain.
    pub fn actor_path(&self) -> String {
        format!(
            "{}@{}[{}]:/{}[{}]",
            self.world_name, self.level_name, self.level_index, self.actor_name, self.actor_index
        )
    }
}

impl fmt::Display for PathRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.actor_path())?;
        for (position, step) in self.component_steps.iter().enumerate() {
            f.write_str(if position == 0 { "->" } else { "/" })?;
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for PathRecord {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_components() {
        let record = PathRecord::new("W", "L", "A")
            .with_level_index(2)
            .with_actor_index(1);
        assert_eq!(record.to_string(), "W@L[2]:/A[1]");
    }

    #[test]
    fn test_display_component_chain() {
        let record = PathRecord::new("W", "L", "A")
            .with_component("Root", 0)
            .with_component("Arm", 1)
            .with_component("Hand", 0);
        assert_eq!(record.to_string(), "W@L[0]:/A[0]->Root[0]/Arm[1]/Hand[0]");
    }

    #[test]
    fn test_actor_path_ignores_components() {
        let record = PathRecord::new("W", "L", "A").with_component("Mesh", 3);
        assert_eq!(record.actor_path(), "W@L[0]:/A[0]");
    }

    #[test]
    fn test_from_str() {
        let record: PathRecord = "W@L[0]:/A[4]".parse().unwrap();
        assert_eq!(record, PathRecord::new("W", "L", "A").with_actor_index(4));
    }

    #[test]
    fn test_default_is_empty() {
        let record = PathRecord::default();
        assert!(record.world_name.is_empty());
        assert!(record.component_steps.is_empty());
    }
}
