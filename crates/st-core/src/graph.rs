use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Immutable scene collection with by-id lookup. Built once by the loader;
/// no mutation is exposed afterwards, so shared references are safe across
/// concurrent readers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    scenes: Vec<Scene>,
    index: BTreeMap<String, usize>,
}

impl SceneGraph {
    pub fn from_scenes(scenes: Vec<Scene>) -> Self {
        let index = scenes
            .iter()
            .enumerate()
            .map(|(position, scene)| (scene.id.clone(), position))
            .collect();
        Self { scenes, index }
    }

    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.index.get(id).map(|position| &self.scenes[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
