//! Read-only view of a host scene graph.
//!
//! The navigator never owns scene state. Everything it knows about worlds,
//! levels, actors and components comes through [`GraphQuery`], so any host
//! that can answer these questions can be navigated. [`SceneSnapshot`] is an
//! in-memory host loaded from a scene dump.

pub mod document;
pub mod snapshot;

pub use document::SceneDocument;
pub use snapshot::{SceneSnapshot, SnapshotError};

/// Query surface a host exposes to the navigator.
///
/// Handles are opaque to the navigator and only compared for identity. They
/// are held for the duration of a single resolve or format call; callers must
/// not mutate the host graph meanwhile.
pub trait GraphQuery {
    type World: Clone + PartialEq;
    type Level: Clone + PartialEq;
    type Actor: Clone + PartialEq;
    type Component: Clone + PartialEq;

    /// Finds a loaded world by exact name.
    fn lookup_world_by_name(&self, name: &str) -> Option<Self::World>;

    /// The persistent level first, then streaming levels in declared order.
    fn levels_of(&self, world: &Self::World) -> Vec<Self::Level>;

    /// Actors of a level in the host's natural order.
    fn actors_of(&self, level: &Self::Level) -> Vec<Self::Actor>;

    /// Components of an actor in no particular order. Use
    /// [`sorted_components`] for the deterministic order paths rely on.
    fn components_of(&self, actor: &Self::Actor) -> Vec<Self::Component>;

    /// Stable per-object identifier used to order an actor's components.
    fn unique_id_of(&self, component: &Self::Component) -> u64;

    fn world_name(&self, world: &Self::World) -> String;
    fn level_name(&self, level: &Self::Level) -> String;
    fn actor_name(&self, actor: &Self::Actor) -> String;
    fn component_name(&self, component: &Self::Component) -> String;

    fn world_of_actor(&self, actor: &Self::Actor) -> Option<Self::World>;
    fn level_of_actor(&self, actor: &Self::Actor) -> Option<Self::Level>;
    fn world_of_component(&self, component: &Self::Component) -> Option<Self::World>;
    fn level_of_component(&self, component: &Self::Component) -> Option<Self::Level>;
    fn owner_of(&self, component: &Self::Component) -> Option<Self::Actor>;

    /// Whether the component takes part in the attachment tree.
    fn is_scene_component(&self, component: &Self::Component) -> bool;

    /// Immediate attach parent of a scene component; `None` at the root.
    fn attach_parent(&self, component: &Self::Component) -> Option<Self::Component>;

    /// Looks an actor up by name inside the named level of `world`, without
    /// occurrence indexing. Hosts with a name index should override this.
    fn find_actor_by_name(
        &self,
        world: &Self::World,
        level_name: &str,
        actor_name: &str,
    ) -> Option<Self::Actor> {
        let level = self
            .levels_of(world)
            .into_iter()
            .find(|level| self.level_name(level) == level_name)?;
        self.actors_of(&level)
            .into_iter()
            .find(|actor| self.actor_name(actor) == actor_name)
    }

    /// Capability check: wraps the component if it is a scene component.
    fn as_scene_component(
        &self,
        component: &Self::Component,
    ) -> Option<SceneComponent<Self::Component>> {
        self.is_scene_component(component)
            .then(|| SceneComponent(component.clone()))
    }

    /// Attach parent of a scene component, as a scene component.
    fn attach_parent_of(
        &self,
        component: &SceneComponent<Self::Component>,
    ) -> Option<SceneComponent<Self::Component>> {
        self.attach_parent(component.component())
            .map(SceneComponent)
    }
}

/// A component known to support the scene capability.
///
/// Only obtainable through [`GraphQuery::as_scene_component`] or
/// [`GraphQuery::attach_parent_of`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneComponent<C>(C);

impl<C> SceneComponent<C> {
    /// The underlying component handle.
    pub fn component(&self) -> &C {
        &self.0
    }

    pub fn into_inner(self) -> C {
        self.0
    }
}

/// Components of `actor` ordered by ascending unique id.
pub fn sorted_components<G: GraphQuery + ?Sized>(graph: &G, actor: &G::Actor) -> Vec<G::Component> {
    let mut components = graph.components_of(actor);
    components.sort_by_key(|component| graph.unique_id_of(component));
    components
}
