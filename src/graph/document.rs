//! Serializable scene dump.
//!
//! A `SceneDocument` is the on-disk form of a scene graph: worlds, their
//! levels, the actors in each level and the components of each actor. It can
//! be captured from any live [`GraphQuery`] host and loaded back as a
//! [`SceneSnapshot`](super::SceneSnapshot), so paths found in logs can be
//! resolved after the fact.
//!
//! # Example
//!
//! ```
//! use worldnav::graph::SceneDocument;
//!
//! let doc: SceneDocument = serde_yaml::from_str(r#"
//! worlds:
//!   - name: W
//!     persistent_level:
//!       name: L
//!       actors:
//!         - name: A
//!           components:
//!             - { name: Root, id: 1, scene: true }
//! "#).unwrap();
//! assert_eq!(doc.worlds[0].persistent_level.actors[0].components[0].name, "Root");
//! ```

use serde::{Deserialize, Serialize};

use super::{sorted_components, GraphQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub worlds: Vec<WorldEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEntry {
    pub name: String,
    pub persistent_level: LevelEntry,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub streaming_levels: Vec<LevelEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub name: String,
    #[serde(default)]
    pub actors: Vec<ActorEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorEntry {
    pub name: String,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub name: String,
    /// Stable unique id; components are ordered by it.
    pub id: u64,
    /// Scene components take part in the attachment tree.
    #[serde(default, skip_serializing_if = "is_false")]
    pub scene: bool,
    /// Id of the attach parent within the same actor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_parent: Option<u64>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SceneDocument {
    /// Captures the given worlds from a live host.
    ///
    /// The first level a world reports becomes the persistent level. Worlds
    /// without any level are skipped. Components are written in unique-id
    /// order.
    pub fn capture<G: GraphQuery + ?Sized>(graph: &G, worlds: &[G::World]) -> Self {
        let worlds = worlds
            .iter()
            .filter_map(|world| capture_world(graph, world))
            .collect();
        Self { worlds }
    }
}

fn capture_world<G: GraphQuery + ?Sized>(graph: &G, world: &G::World) -> Option<WorldEntry> {
    let mut levels = graph
        .levels_of(world)
        .into_iter()
        .map(|level| capture_level(graph, &level));
    let persistent_level = levels.next()?;
    Some(WorldEntry {
        name: graph.world_name(world),
        persistent_level,
        streaming_levels: levels.collect(),
    })
}

fn capture_level<G: GraphQuery + ?Sized>(graph: &G, level: &G::Level) -> LevelEntry {
    let actors = graph
        .actors_of(level)
        .iter()
        .map(|actor| ActorEntry {
            name: graph.actor_name(actor),
            components: sorted_components(graph, actor)
                .iter()
                .map(|component| capture_component(graph, component))
                .collect(),
        })
        .collect();
    LevelEntry {
        name: graph.level_name(level),
        actors,
    }
}

fn capture_component<G: GraphQuery + ?Sized>(graph: &G, component: &G::Component) -> ComponentEntry {
    let scene = graph.is_scene_component(component);
    let attach_parent = if scene {
        graph
            .attach_parent(component)
            .map(|parent| graph.unique_id_of(&parent))
    } else {
        None
    };
    ComponentEntry {
        name: graph.component_name(component),
        id: graph.unique_id_of(component),
        scene,
        attach_parent,
    }
}
