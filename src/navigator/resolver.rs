use super::diagnostics::Diagnostics;
use super::error::NavigatorError;
use super::index::nth_named;
use super::Navigator;
use crate::graph::{sorted_components, GraphQuery, SceneComponent};
use crate::path::{sentinel, PathRecord};

impl<'g, G: GraphQuery + ?Sized, D: Diagnostics> Navigator<'g, G, D> {
    /// Finds the actor a path designates. Any component chain is ignored.
    ///
    /// When both indices are 0 the host's direct name lookup is used;
    /// otherwise the level and actor are located by occurrence index.
    pub fn find_actor(&self, path: &str) -> Option<G::Actor> {
        let record = self.prepare(path)?;
        let world = self.lookup_world(&record)?;

        if record.level_index == 0 && record.actor_index == 0 {
            let actor =
                self.graph
                    .find_actor_by_name(&world, &record.level_name, &record.actor_name);
            if actor.is_none() {
                self.trace_miss("actor", &record.actor_name, 0);
            }
            return actor;
        }

        let level = self.locate_level(&world, &record)?;
        self.locate_actor(&level, &record)
    }

    /// Finds the component a single-step path designates.
    ///
    /// Returns an error if the path does not have exactly one component step.
    pub fn find_actor_component(&self, path: &str) -> Result<Option<G::Component>, NavigatorError> {
        let Some(record) = self.prepare(path) else {
            return Ok(None);
        };
        let Some(actor) = self.resolve_actor(&record) else {
            return Ok(None);
        };

        let [step] = record.component_steps.as_slice() else {
            return Err(NavigatorError::ExpectedSingleComponent {
                found: record.component_steps.len(),
            });
        };

        let component = nth_named(
            sorted_components(self.graph, &actor),
            &step.name,
            step.index,
            |component| self.graph.component_name(component),
        );
        if component.is_none() {
            self.trace_miss("component", &step.name, step.index);
        }
        Ok(component)
    }

    /// Finds the scene component at the end of a component chain.
    ///
    /// Each step is matched against the owning actor's scene components as a
    /// flat list, not against the children of the previous step. Returns an
    /// error if the path has no component steps.
    pub fn find_scene_component(
        &self,
        path: &str,
    ) -> Result<Option<SceneComponent<G::Component>>, NavigatorError> {
        let Some(record) = self.prepare(path) else {
            return Ok(None);
        };
        let Some(actor) = self.resolve_actor(&record) else {
            return Ok(None);
        };

        if record.component_steps.is_empty() {
            return Err(NavigatorError::MissingComponentChain);
        }

        let scene_components: Vec<SceneComponent<G::Component>> =
            sorted_components(self.graph, &actor)
                .iter()
                .filter_map(|component| self.graph.as_scene_component(component))
                .collect();

        let mut matched = None;
        for step in &record.component_steps {
            let found = nth_named(&scene_components, &step.name, step.index, |component| {
                self.graph.component_name(component.component())
            });
            match found {
                Some(component) => matched = Some(component.clone()),
                None => {
                    self.trace_miss("scene component", &step.name, step.index);
                    return Ok(None);
                }
            }
        }
        Ok(matched)
    }

    /// Rejects empty and sentinel paths, then parses. A parse failure is
    /// reported and replaced by an empty record that matches nothing.
    fn prepare(&self, path: &str) -> Option<PathRecord> {
        if sentinel::is_silenced(path) {
            return None;
        }
        match PathRecord::parse(path) {
            Ok(record) => Some(record),
            Err(error) => {
                if self.config.report_parse_errors {
                    self.diagnostics.parse_failed(path, &error);
                }
                Some(PathRecord::default())
            }
        }
    }

    fn lookup_world(&self, record: &PathRecord) -> Option<G::World> {
        // An empty name only comes from a failed parse.
        if record.world_name.is_empty() {
            return None;
        }
        let world = self.graph.lookup_world_by_name(&record.world_name);
        if world.is_none() {
            self.trace_miss("world", &record.world_name, 0);
        }
        world
    }

    fn locate_level(&self, world: &G::World, record: &PathRecord) -> Option<G::Level> {
        let level = nth_named(
            self.graph.levels_of(world),
            &record.level_name,
            record.level_index,
            |level| self.graph.level_name(level),
        );
        if level.is_none() {
            self.trace_miss("level", &record.level_name, record.level_index);
        }
        level
    }

    fn locate_actor(&self, level: &G::Level, record: &PathRecord) -> Option<G::Actor> {
        let actor = nth_named(
            self.graph.actors_of(level),
            &record.actor_name,
            record.actor_index,
            |actor| self.graph.actor_name(actor),
        );
        if actor.is_none() {
            self.trace_miss("actor", &record.actor_name, record.actor_index);
        }
        actor
    }

    fn resolve_actor(&self, record: &PathRecord) -> Option<G::Actor> {
        let world = self.lookup_world(record)?;
        let level = self.locate_level(&world, record)?;
        self.locate_actor(&level, record)
    }

    fn trace_miss(&self, step: &str, name: &str, index: usize) {
        if self.config.trace_lookups {
            tracing::debug!(step, name, index, "object path lookup missed");
        }
    }
}
