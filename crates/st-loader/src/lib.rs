mod convert;
mod document;
mod validate;

use std::fs;
use std::path::Path;

use st_core::{SceneGraph, StoryError};

pub use document::{StoryDocument, DocChoice, DocScene, DocValidation};

/// Parses a content document and returns the validated scene graph.
///
/// Fails fast on malformed documents and bad scene ids; structural
/// violations across the whole graph are collected and reported together.
pub fn load_story_from_str(source: &str) -> Result<SceneGraph, StoryError> {
    let document: StoryDocument = serde_json::from_str(source)
        .map_err(|error| StoryError::new("DOC_PARSE", error.to_string()))?;

    let mut scenes = Vec::with_capacity(document.scenes.len());
    for doc_scene in document.scenes {
        scenes.push(convert::convert_scene(doc_scene)?);
    }

    let graph = SceneGraph::from_scenes(scenes);
    validate::validate_scene_graph(&graph)?;
    Ok(graph)
}

pub fn load_story_from_path(path: &Path) -> Result<SceneGraph, StoryError> {
    let source = fs::read_to_string(path).map_err(|error| {
        StoryError::new(
            "DOC_READ",
            format!("failed to read {}: {}", path.display(), error),
        )
    })?;
    load_story_from_str(&source)
}
