//! Object path parser.
//!
//! The grammar is linear, so parsing is a single left-to-right pass driven by
//! a mode register that says which field is currently being filled. Every
//! character either triggers a mode transition or is appended to the buffer
//! of the current mode.
//!
//! | Trigger | Mode      | Effect                                               |
//! |---------|-----------|------------------------------------------------------|
//! | `@`     | any       | commit world name, enter `Level`                     |
//! | `:/`    | any       | commit level name and level index, enter `Actor`     |
//! | `->`    | any       | enter `Component`                                    |
//! | `[` `]` | guarded   | enter / leave the index of the current field         |
//! | `]`     | ActorIndex| also commits actor name and actor index              |
//! | `/`     | Component | commit a component step, stay in `Component`         |

use std::mem;

use super::error::{IndexField, PathError};
use super::record::{ComponentStep, PathRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    World,
    Level,
    LevelIndex,
    Actor,
    ActorIndex,
    Component,
    ComponentIndex,
}

/// Text accumulated for each mode since its last commit.
#[derive(Debug, Default)]
struct Buffers {
    world: String,
    level: String,
    level_index: String,
    actor: String,
    actor_index: String,
    component: String,
    component_index: String,
}

/// Fields committed so far. Component names and indices are kept apart until
/// the end so an unterminated index can be reported.
#[derive(Debug, Default)]
struct Committed {
    world_name: String,
    level_name: String,
    level_index: usize,
    actor_name: String,
    actor_index: usize,
    component_names: Vec<String>,
    component_indices: Vec<usize>,
}

/// Parser for object path strings.
pub struct Parser {
    input: Vec<char>,
    position: usize,
    mode: Mode,
    buffers: Buffers,
    committed: Committed,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(path: &str) -> Self {
        Self {
            input: path.chars().collect(),
            position: 0,
            mode: Mode::World,
            buffers: Buffers::default(),
            committed: Committed::default(),
        }
    }

    /// Parses the path string into a PathRecord.
    pub fn parse(path: &str) -> Result<PathRecord, PathError> {
        Parser::new(path).run()
    }

    fn run(mut self) -> Result<PathRecord, PathError> {
        while let Some(ch) = self.next() {
            self.step(ch)?;
        }
        self.finish()
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Returns the current character and advances.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn step(&mut self, ch: char) -> Result<(), PathError> {
        match ch {
            '@' => {
                self.committed.world_name = self.buffers.world.clone();
                self.mode = Mode::Level;
            }
            ':' if self.peek() == Some('/') => {
                self.next();
                self.committed.level_name = self.buffers.level.clone();
                self.committed.level_index =
                    parse_index(IndexField::Level, &self.buffers.level_index)?;
                self.mode = Mode::Actor;
            }
            '-' if self.peek() == Some('>') => {
                self.next();
                self.mode = Mode::Component;
            }
            '[' if self.mode == Mode::Level => self.mode = Mode::LevelIndex,
            ']' if self.mode == Mode::LevelIndex => self.mode = Mode::Level,
            '[' if self.mode == Mode::Actor => self.mode = Mode::ActorIndex,
            ']' if self.mode == Mode::ActorIndex => {
                self.committed.actor_name = self.buffers.actor.clone();
                self.committed.actor_index =
                    parse_index(IndexField::Actor, &self.buffers.actor_index)?;
                self.mode = Mode::Actor;
            }
            '[' if self.mode == Mode::Component => self.mode = Mode::ComponentIndex,
            ']' if self.mode == Mode::ComponentIndex => self.mode = Mode::Component,
            '/' if self.mode == Mode::Component => self.commit_component_step()?,
            _ => self.active_buffer().push(ch),
        }
        Ok(())
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.mode {
            Mode::World => &mut self.buffers.world,
            Mode::Level => &mut self.buffers.level,
            Mode::LevelIndex => &mut self.buffers.level_index,
            Mode::Actor => &mut self.buffers.actor,
            Mode::ActorIndex => &mut self.buffers.actor_index,
            Mode::Component => &mut self.buffers.component,
            Mode::ComponentIndex => &mut self.buffers.component_index,
        }
    }

    fn commit_component_step(&mut self) -> Result<(), PathError> {
        let name = mem::take(&mut self.buffers.component);
        let index_text = mem::take(&mut self.buffers.component_index);
        self.committed.component_names.push(name);
        let index = parse_index(IndexField::Component, &index_text)?;
        self.committed.component_indices.push(index);
        Ok(())
    }

    fn finish(mut self) -> Result<PathRecord, PathError> {
        match self.mode {
            Mode::Component if !self.buffers.component.is_empty() => {
                self.commit_component_step()?
            }
            // `[` was opened but never closed: the name is known, its index is not.
            Mode::ComponentIndex => {
                let name = mem::take(&mut self.buffers.component);
                self.committed.component_names.push(name);
            }
            _ => {}
        }

        let Committed {
            world_name,
            level_name,
            level_index,
            actor_name,
            actor_index,
            component_names,
            component_indices,
        } = self.committed;

        if world_name.is_empty() || level_name.is_empty() || actor_name.is_empty() {
            return Err(PathError::MissingComponents);
        }
        if component_names.len() != component_indices.len() {
            return Err(PathError::ComponentCountMismatch {
                names: component_names.len(),
                indices: component_indices.len(),
            });
        }
        if component_names.iter().any(String::is_empty) {
            return Err(PathError::MissingComponents);
        }

        let component_steps = component_names
            .into_iter()
            .zip(component_indices)
            .map(|(name, index)| ComponentStep { name, index })
            .collect();

        Ok(PathRecord {
            world_name,
            level_name,
            level_index,
            actor_name,
            actor_index,
            component_steps,
        })
    }
}

/// Parses a decimal index. Only ASCII digits are accepted; an empty buffer is 0.
fn parse_index(field: IndexField, text: &str) -> Result<usize, PathError> {
    text.chars()
        .try_fold(0usize, |value, ch| {
            let digit = ch.to_digit(10)?;
            value.checked_mul(10)?.checked_add(digit as usize)
        })
        .ok_or_else(|| PathError::InvalidIndex {
            field,
            text: text.to_string(),
        })
}
