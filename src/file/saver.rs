//! Scene dump saving.
//!
//! Dumps are written atomically: the serialized document goes to a temporary
//! file that is then renamed over the target.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::{is_gzipped, SceneFormat};
use crate::graph::SceneDocument;

/// Saves a scene dump, choosing format and compression from the file name.
///
/// # Examples
///
/// ```no_run
/// use worldnav::file::saver::save_scene_file;
/// use worldnav::graph::SceneDocument;
/// use worldnav::file::loader::load_scene_file;
///
/// let scene = load_scene_file("scene.yaml").unwrap();
/// let document = SceneDocument::capture(&scene, &scene.worlds());
/// save_scene_file("scene.json.gz", &document).unwrap();
/// ```
pub fn save_scene_file<P: AsRef<Path>>(path: P, document: &SceneDocument) -> Result<()> {
    let path = path.as_ref();

    let serialized = match SceneFormat::from_path(path) {
        SceneFormat::Json => {
            let mut json = serde_json::to_string_pretty(document)
                .context("Failed to serialize scene as JSON")?;
            json.push('\n');
            json
        }
        SceneFormat::Yaml => {
            serde_yaml::to_string(document).context("Failed to serialize scene as YAML")?
        }
    };

    write_file_atomic(path, serialized.as_bytes(), is_gzipped(path))
}

/// Writes data to a file atomically, optionally compressing with gzip.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
