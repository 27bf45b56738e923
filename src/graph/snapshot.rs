//! In-memory scene graph built from a [`SceneDocument`].
//!
//! All objects live in flat arenas and are addressed by small copyable ids,
//! which serve as the handle types of the [`GraphQuery`] implementation.

use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

use super::document::{ActorEntry, LevelEntry, SceneDocument};
use super::GraphQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

/// Inconsistencies found while building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("actor '{actor}' has more than one component with id {id}")]
    DuplicateComponentId { actor: String, id: u64 },

    #[error("component {id} of actor '{actor}' attaches to unknown component {parent}")]
    UnknownAttachParent { actor: String, id: u64, parent: u64 },

    #[error("component {id} of actor '{actor}' attaches to non-scene component {parent}")]
    AttachParentNotScene { actor: String, id: u64, parent: u64 },

    #[error("component {id} of actor '{actor}' is part of an attachment cycle")]
    AttachmentCycle { actor: String, id: u64 },
}

#[derive(Debug)]
struct WorldNode {
    name: String,
    levels: Vec<LevelId>,
}

#[derive(Debug)]
struct LevelNode {
    name: String,
    world: WorldId,
    actors: Vec<ActorId>,
}

#[derive(Debug)]
struct ActorNode {
    name: String,
    level: LevelId,
    components: Vec<ComponentId>,
}

#[derive(Debug)]
struct ComponentNode {
    name: String,
    unique_id: u64,
    owner: ActorId,
    scene: bool,
    attach_parent: Option<ComponentId>,
}

/// A frozen scene graph.
#[derive(Debug, Default)]
pub struct SceneSnapshot {
    worlds: Vec<WorldNode>,
    levels: Vec<LevelNode>,
    actors: Vec<ActorNode>,
    components: Vec<ComponentNode>,
    /// First world loaded under each name.
    worlds_by_name: IndexMap<String, WorldId>,
}

impl SceneSnapshot {
    /// Builds a snapshot, validating component ids and attachments per actor.
    pub fn from_document(document: &SceneDocument) -> Result<Self, SnapshotError> {
        let mut snapshot = Self::default();
        for entry in &document.worlds {
            let world = WorldId(snapshot.worlds.len());
            snapshot.worlds.push(WorldNode {
                name: entry.name.clone(),
                levels: Vec::new(),
            });
            snapshot
                .worlds_by_name
                .entry(entry.name.clone())
                .or_insert(world);

            for level in std::iter::once(&entry.persistent_level).chain(&entry.streaming_levels) {
                snapshot.add_level(world, level)?;
            }
        }
        Ok(snapshot)
    }

    /// Names of all loaded worlds, in load order.
    pub fn world_names(&self) -> impl Iterator<Item = &str> {
        self.worlds.iter().map(|world| world.name.as_str())
    }

    /// All loaded worlds, in load order.
    pub fn worlds(&self) -> Vec<WorldId> {
        (0..self.worlds.len()).map(WorldId).collect()
    }

    /// Total number of actors across all worlds.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Total number of components across all worlds.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Finds a component of `actor` by its unique id.
    pub fn component_by_unique_id(&self, actor: ActorId, unique_id: u64) -> Option<ComponentId> {
        self.actors[actor.0]
            .components
            .iter()
            .copied()
            .find(|component| self.components[component.0].unique_id == unique_id)
    }

    fn add_level(&mut self, world: WorldId, entry: &LevelEntry) -> Result<(), SnapshotError> {
        let level = LevelId(self.levels.len());
        self.levels.push(LevelNode {
            name: entry.name.clone(),
            world,
            actors: Vec::new(),
        });
        self.worlds[world.0].levels.push(level);

        for actor in &entry.actors {
            self.add_actor(level, actor)?;
        }
        Ok(())
    }

    fn add_actor(&mut self, level: LevelId, entry: &ActorEntry) -> Result<(), SnapshotError> {
        let actor = ActorId(self.actors.len());
        self.actors.push(ActorNode {
            name: entry.name.clone(),
            level,
            components: Vec::new(),
        });
        self.levels[level.0].actors.push(actor);

        let mut by_unique_id = HashMap::new();
        for component in &entry.components {
            let id = ComponentId(self.components.len());
            if by_unique_id.insert(component.id, id).is_some() {
                return Err(SnapshotError::DuplicateComponentId {
                    actor: entry.name.clone(),
                    id: component.id,
                });
            }
            self.components.push(ComponentNode {
                name: component.name.clone(),
                unique_id: component.id,
                owner: actor,
                scene: component.scene || component.attach_parent.is_some(),
                attach_parent: None,
            });
            self.actors[actor.0].components.push(id);
        }

        for component in &entry.components {
            let Some(parent_unique_id) = component.attach_parent else {
                continue;
            };
            let parent = *by_unique_id.get(&parent_unique_id).ok_or_else(|| {
                SnapshotError::UnknownAttachParent {
                    actor: entry.name.clone(),
                    id: component.id,
                    parent: parent_unique_id,
                }
            })?;
            if !self.components[parent.0].scene {
                return Err(SnapshotError::AttachParentNotScene {
                    actor: entry.name.clone(),
                    id: component.id,
                    parent: parent_unique_id,
                });
            }
            let child = by_unique_id[&component.id];
            self.components[child.0].attach_parent = Some(parent);
        }

        self.check_attachment_cycles(actor, &entry.name)
    }

    fn check_attachment_cycles(&self, actor: ActorId, actor_name: &str) -> Result<(), SnapshotError> {
        let components = &self.actors[actor.0].components;
        for &start in components {
            let mut current = start;
            let mut hops = 0;
            while let Some(parent) = self.components[current.0].attach_parent {
                hops += 1;
                if parent == start || hops > components.len() {
                    return Err(SnapshotError::AttachmentCycle {
                        actor: actor_name.to_string(),
                        id: self.components[start.0].unique_id,
                    });
                }
                current = parent;
            }
        }
        Ok(())
    }
}

impl GraphQuery for SceneSnapshot {
    type World = WorldId;
    type Level = LevelId;
    type Actor = ActorId;
    type Component = ComponentId;

    fn lookup_world_by_name(&self, name: &str) -> Option<WorldId> {
        self.worlds_by_name.get(name).copied()
    }

    fn levels_of(&self, world: &WorldId) -> Vec<LevelId> {
        self.worlds[world.0].levels.clone()
    }

    fn actors_of(&self, level: &LevelId) -> Vec<ActorId> {
        self.levels[level.0].actors.clone()
    }

    fn components_of(&self, actor: &ActorId) -> Vec<ComponentId> {
        self.actors[actor.0].components.clone()
    }

    fn unique_id_of(&self, component: &ComponentId) -> u64 {
        self.components[component.0].unique_id
    }

    fn world_name(&self, world: &WorldId) -> String {
        self.worlds[world.0].name.clone()
    }

    fn level_name(&self, level: &LevelId) -> String {
        self.levels[level.0].name.clone()
    }

    fn actor_name(&self, actor: &ActorId) -> String {
        self.actors[actor.0].name.clone()
    }

    fn component_name(&self, component: &ComponentId) -> String {
        self.components[component.0].name.clone()
    }

    fn world_of_actor(&self, actor: &ActorId) -> Option<WorldId> {
        let level = self.actors[actor.0].level;
        Some(self.levels[level.0].world)
    }

    fn level_of_actor(&self, actor: &ActorId) -> Option<LevelId> {
        Some(self.actors[actor.0].level)
    }

    fn world_of_component(&self, component: &ComponentId) -> Option<WorldId> {
        self.world_of_actor(&self.components[component.0].owner)
    }

    fn level_of_component(&self, component: &ComponentId) -> Option<LevelId> {
        self.level_of_actor(&self.components[component.0].owner)
    }

    fn owner_of(&self, component: &ComponentId) -> Option<ActorId> {
        Some(self.components[component.0].owner)
    }

    fn is_scene_component(&self, component: &ComponentId) -> bool {
        self.components[component.0].scene
    }

    fn attach_parent(&self, component: &ComponentId) -> Option<ComponentId> {
        self.components[component.0].attach_parent
    }
}
