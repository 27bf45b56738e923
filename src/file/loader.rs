//! Scene dump loading.
//!
//! This module reads scene dumps from files or strings and builds
//! [`SceneSnapshot`]s that the navigator can resolve paths against.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{is_gzipped, SceneFormat};
use crate::graph::{SceneDocument, SceneSnapshot};

/// Loads a scene dump from the filesystem and builds a snapshot.
///
/// # Arguments
///
/// * `path` - Path to a `.yaml`, `.yml` or `.json` dump, optionally ending in `.gz`
///
/// # Examples
///
/// ```no_run
/// use worldnav::file::loader::load_scene_file;
/// use worldnav::navigator::Navigator;
///
/// let scene = load_scene_file("crash-dump.yaml.gz").unwrap();
/// let navigator = Navigator::new(&scene);
/// let actor = navigator.find_actor("MyWorld@Main[0]:/Player[0]");
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read or decompressed
/// - The contents are not a valid scene dump
/// - The dump is inconsistent (see [`SnapshotError`](crate::graph::SnapshotError))
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> Result<SceneSnapshot> {
    let document = load_scene_document(path)?;
    SceneSnapshot::from_document(&document).context("Invalid scene dump")
}

/// Loads a scene dump without building a snapshot.
pub fn load_scene_document<P: AsRef<Path>>(path: P) -> Result<SceneDocument> {
    let path_ref = path.as_ref();

    let content = if is_gzipped(path_ref) {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read scene file {}", path_ref.display()))?
    };

    match SceneFormat::from_path(path_ref) {
        SceneFormat::Json => serde_json::from_str(&content).context("Failed to parse scene JSON"),
        SceneFormat::Yaml => serde_yaml::from_str(&content).context("Failed to parse scene YAML"),
    }
}

/// Parses a YAML scene dump into a snapshot.
pub fn parse_scene_yaml(content: &str) -> Result<SceneSnapshot> {
    let document: SceneDocument =
        serde_yaml::from_str(content).context("Failed to parse scene YAML")?;
    SceneSnapshot::from_document(&document).context("Invalid scene dump")
}

/// Parses a JSON scene dump into a snapshot.
pub fn parse_scene_json(content: &str) -> Result<SceneSnapshot> {
    let document: SceneDocument =
        serde_json::from_str(content).context("Failed to parse scene JSON")?;
    SceneSnapshot::from_document(&document).context("Invalid scene dump")
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphQuery;

    #[test]
    fn test_parse_scene_yaml() {
        let scene = parse_scene_yaml(
            r#"
worlds:
  - name: W
    persistent_level:
      name: L
      actors:
        - name: A
"#,
        )
        .unwrap();
        assert!(scene.lookup_world_by_name("W").is_some());
        assert_eq!(scene.actor_count(), 1);
    }

    #[test]
    fn test_parse_scene_json() {
        let scene = parse_scene_json(
            r#"{"worlds":[{"name":"W","persistent_level":{"name":"L","actors":[
                {"name":"A","components":[{"name":"C","id":4}]}]}}]}"#,
        )
        .unwrap();
        assert_eq!(scene.component_count(), 1);
    }

    #[test]
    fn test_parse_empty_document() {
        let scene = parse_scene_yaml("{}").unwrap();
        assert_eq!(scene.world_names().count(), 0);
    }

    #[test]
    fn test_missing_required_field_fails() {
        // A world without a persistent level is not a valid dump.
        assert!(parse_scene_yaml("worlds:\n  - name: W\n").is_err());
    }

    #[test]
    fn test_inconsistent_dump_fails() {
        let err = parse_scene_yaml(
            r#"
worlds:
  - name: W
    persistent_level:
      name: L
      actors:
        - name: A
          components:
            - { name: C, id: 1 }
            - { name: D, id: 1 }
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("more than one component with id 1"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_scene_file("/nonexistent/scene.yaml").is_err());
    }
}
