//! File I/O for scene dumps.
//!
//! Scene dumps are YAML or JSON, optionally gzip-compressed. The format is
//! chosen from the file name: a trailing `.gz` means compressed, and the
//! extension before it selects JSON (`.json`) or YAML (anything else).

pub mod loader;
pub mod saver;

use std::path::Path;

/// Serialization format of a scene dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Yaml,
    Json,
}

impl SceneFormat {
    /// Determines the format from a file name, looking past a `.gz` suffix.
    ///
    /// - `scene.json` → Json
    /// - `scene.json.gz` → Json
    /// - `scene.yaml`, `scene.yml`, `scene.dump` → Yaml
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);
        if base.ends_with(".json") {
            SceneFormat::Json
        } else {
            SceneFormat::Yaml
        }
    }
}

/// Whether the path names a gzip-compressed file.
fn is_gzipped<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}
