//! Object path grammar for scene graphs.
//!
//! An object path names one actor or component in a running scene:
//!
//! ```text
//! <world>@<level>[<levelIndex>]:/<actor>[<actorIndex>]->Comp[<i>]/Comp[<j>]...
//! ```
//!
//! # Examples
//!
//! ```
//! use worldnav::path::{ComponentStep, PathRecord};
//!
//! let record = PathRecord::parse("MyWorld@Main[0]:/Player[0]->Mesh[0]").unwrap();
//! assert_eq!(record.world_name, "MyWorld");
//! assert_eq!(record.component_steps, vec![ComponentStep::new("Mesh", 0)]);
//! assert_eq!(record.to_string(), "MyWorld@Main[0]:/Player[0]->Mesh[0]");
//! ```

pub mod error;
pub mod parser;
pub mod record;
pub mod sentinel;

pub use error::{IndexField, PathError};
pub use parser::Parser;
pub use record::{ComponentStep, PathRecord};
