use std::fmt;

use super::diagnostics::Diagnostics;
use super::index::occurrence_index;
use super::Navigator;
use crate::graph::{sorted_components, GraphQuery, SceneComponent};
use crate::path::sentinel;

/// An index that may not have been found; written as `-1` when missing.
struct PathIndex(Option<usize>);

impl fmt::Display for PathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{}", index),
            None => f.write_str("-1"),
        }
    }
}

impl<'g, G: GraphQuery + ?Sized, D: Diagnostics> Navigator<'g, G, D> {
    /// Formats `world@level[i]:/actor[j]` for an actor, or an `[invalid ...]`
    /// sentinel for the first missing prerequisite.
    ///
    /// The level index is the level's position among all levels of the
    /// world; the actor index is the position of the level that contains
    /// the actor. Neither is an occurrence index.
    pub fn path_of_actor(&self, actor: Option<&G::Actor>) -> String {
        let Some(actor) = actor else {
            return sentinel::INVALID_ACTOR.to_string();
        };
        let Some(world) = self.graph.world_of_actor(actor) else {
            return sentinel::INVALID_WORLD.to_string();
        };
        let Some(level) = self.graph.level_of_actor(actor) else {
            return sentinel::INVALID_LEVEL.to_string();
        };
        self.actor_prefix(&world, &level, actor)
    }

    /// Formats the path of a component. Scene components are written with
    /// their full attach chain, as [`path_of_scene_component`] does.
    ///
    /// [`path_of_scene_component`]: Navigator::path_of_scene_component
    pub fn path_of_component(&self, component: Option<&G::Component>) -> String {
        let Some(component) = component else {
            return sentinel::INVALID_COMPONENT.to_string();
        };
        let Some(world) = self.graph.world_of_component(component) else {
            return sentinel::INVALID_WORLD.to_string();
        };
        let Some(level) = self.graph.level_of_component(component) else {
            return sentinel::INVALID_LEVEL.to_string();
        };
        let Some(actor) = self.graph.owner_of(component) else {
            return sentinel::INVALID_ACTOR.to_string();
        };
        if let Some(scene_component) = self.graph.as_scene_component(component) {
            return self.path_of_scene_component(Some(&scene_component));
        }

        format!(
            "{}->{}",
            self.actor_prefix(&world, &level, &actor),
            self.component_link(component)
        )
    }

    /// Formats `<actor path>->Root[i]/.../Self[k]`, the attach chain written
    /// root first. Missing prerequisites yield the `[null ...]` sentinels.
    pub fn path_of_scene_component(&self, component: Option<&SceneComponent<G::Component>>) -> String {
        let Some(scene_component) = component else {
            return sentinel::NULL_COMPONENT.to_string();
        };
        let component = scene_component.component();
        let Some(world) = self.graph.world_of_component(component) else {
            return sentinel::NULL_WORLD.to_string();
        };
        let Some(level) = self.graph.level_of_component(component) else {
            return sentinel::NULL_LEVEL.to_string();
        };
        let Some(actor) = self.graph.owner_of(component) else {
            return sentinel::NULL_ACTOR.to_string();
        };

        format!(
            "{}->{}",
            self.actor_prefix(&world, &level, &actor),
            self.attach_chain(scene_component).join("/")
        )
    }

    fn actor_prefix(&self, world: &G::World, level: &G::Level, actor: &G::Actor) -> String {
        let levels = self.graph.levels_of(world);
        let level_index = levels.iter().position(|candidate| candidate == level);
        let actor_index = levels
            .iter()
            .position(|candidate| self.graph.actors_of(candidate).contains(actor));

        format!(
            "{}@{}[{}]:/{}[{}]",
            self.graph.world_name(world),
            self.graph.level_name(level),
            PathIndex(level_index),
            self.graph.actor_name(actor),
            PathIndex(actor_index)
        )
    }

    /// `Name[i]`, where `i` counts same-named components of the owner in
    /// unique-id order.
    fn component_link(&self, component: &G::Component) -> String {
        let index = self.graph.owner_of(component).and_then(|owner| {
            occurrence_index(
                &sorted_components(self.graph, &owner),
                component,
                |candidate| self.graph.component_name(candidate),
            )
        });
        format!("{}[{}]", self.graph.component_name(component), PathIndex(index))
    }

    fn attach_chain(&self, component: &SceneComponent<G::Component>) -> Vec<String> {
        let mut visited = vec![component.component().clone()];
        let mut current = component.clone();
        while let Some(parent) = self.graph.attach_parent_of(&current) {
            if visited.contains(parent.component()) {
                tracing::warn!(
                    component = %self.graph.component_name(component.component()),
                    "attachment cycle while formatting path"
                );
                break;
            }
            visited.push(parent.component().clone());
            current = parent;
        }

        visited
            .iter()
            .rev()
            .map(|link| self.component_link(link))
            .collect()
    }
}
