//! Resolving object paths against a live scene graph, and formatting paths
//! for live objects.
//!
//! A [`Navigator`] borrows a [`GraphQuery`] host for the duration of each
//! call and never caches or mutates anything.
//!
//! # Example
//!
//! ```
//! use worldnav::file::loader::parse_scene_yaml;
//! use worldnav::navigator::Navigator;
//!
//! let scene = parse_scene_yaml(r#"
//! worlds:
//!   - name: MyWorld
//!     persistent_level:
//!       name: Main
//!       actors:
//!         - name: Player
//!           components:
//!             - { name: Mesh, id: 7 }
//! "#).unwrap();
//!
//! let navigator = Navigator::new(&scene);
//! let mesh = navigator
//!     .find_actor_component("MyWorld@Main[0]:/Player[0]->Mesh[0]")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(
//!     navigator.path_of_component(Some(&mesh)),
//!     "MyWorld@Main[0]:/Player[0]->Mesh[0]"
//! );
//! ```

pub mod diagnostics;
pub mod error;
pub mod index;

mod formatter;
mod resolver;

pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::NavigatorError;

use crate::config::Config;
use crate::graph::GraphQuery;

/// Resolver and formatter bound to one scene graph host.
pub struct Navigator<'g, G: ?Sized, D = TracingDiagnostics> {
    graph: &'g G,
    diagnostics: D,
    config: Config,
}

impl<'g, G: GraphQuery + ?Sized> Navigator<'g, G> {
    /// Creates a navigator with default settings that logs parse failures
    /// through `tracing`.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            diagnostics: TracingDiagnostics,
            config: Config::default(),
        }
    }
}

impl<'g, G: GraphQuery + ?Sized, D: Diagnostics> Navigator<'g, G, D> {
    /// Replaces the diagnostics sink.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> Navigator<'g, G, E> {
        Navigator {
            graph: self.graph,
            diagnostics,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
