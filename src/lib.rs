//! worldnav - object paths for scene graphs
//!
//! Names any actor or component of a running World → Level → Actor →
//! Component scene with a readable path such as
//! `MyWorld@Main[0]:/Player[0]->Root[0]/Mesh[1]`, resolves such paths back to
//! live objects, and formats paths for live objects.

pub mod config;
pub mod file;
pub mod graph;
pub mod navigator;
pub mod path;

pub use config::Config;
pub use graph::{GraphQuery, SceneComponent, SceneSnapshot};
pub use navigator::{Navigator, NavigatorError};
pub use path::{ComponentStep, PathError, PathRecord};
