use serde::{Deserialize, Serialize};

use st_core::{Scene, SceneGraph, StoryError, ThreadType, TERMINAL_SCENE_ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInput {
    pub scene_id: String,
    pub choice_index: Option<usize>,
    pub free_text: Option<String>,
}

impl TurnInput {
    pub fn choice(scene_id: impl Into<String>, choice_index: usize) -> Self {
        Self {
            scene_id: scene_id.into(),
            choice_index: Some(choice_index),
            free_text: None,
        }
    }

    pub fn text(scene_id: impl Into<String>, free_text: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            choice_index: None,
            free_text: Some(free_text.into()),
        }
    }

    pub fn advance(scene_id: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            choice_index: None,
            free_text: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TurnOutcome {
    /// Player moves to a new scene.
    Advance { scene: Scene, feedback: String },
    /// Open response fell short; the same scene is re-presented.
    Retry { scene: Scene, feedback: String },
    /// The story reached the terminal "0" reference.
    End,
}

/// Resolves one player action at a time against the immutable scene graph.
pub struct StoryEngine {
    graph: SceneGraph,
}

impl StoryEngine {
    pub fn new(graph: SceneGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn resolve_turn(&self, input: &TurnInput) -> Result<TurnOutcome, StoryError> {
        let scene = self.graph.get(&input.scene_id).ok_or_else(|| {
            StoryError::new(
                "SCENE_NOT_FOUND",
                format!("scene '{}' does not exist", input.scene_id),
            )
        })?;

        let (next_id, feedback) = match scene.thread_type {
            ThreadType::Multi => {
                let index = input.choice_index.ok_or_else(|| {
                    StoryError::new(
                        "INPUT_INVALID",
                        format!("scene '{}' requires a choice index", scene.id),
                    )
                })?;
                let choice = scene.choices.get(index).ok_or_else(|| {
                    StoryError::new(
                        "INPUT_INVALID",
                        format!(
                            "choice index {} out of range for scene '{}' ({} choices)",
                            index,
                            scene.id,
                            scene.choices.len()
                        ),
                    )
                })?;
                (choice.next.clone(), format!("You chose: {}", choice.text))
            }
            ThreadType::Open => {
                let free_text = input.free_text.as_deref().unwrap_or_default();
                if free_text.chars().count() < scene.min_length {
                    return Ok(TurnOutcome::Retry {
                        scene: scene.clone(),
                        feedback: format!(
                            "Please provide at least {} characters.",
                            scene.min_length
                        ),
                    });
                }
                (scene.next.clone(), "Response recorded.".to_string())
            }
            ThreadType::Affirmative => (scene.next.clone(), String::new()),
            ThreadType::Finisher => {
                // Real-time tokenization is not implemented; finisher falls
                // through to a plain continue until it is.
                (scene.next.clone(), String::new())
            }
        };

        if next_id == TERMINAL_SCENE_ID {
            return Ok(TurnOutcome::End);
        }

        // Load-time validation should make this unreachable, but a reference
        // that escaped it must not panic the resolver.
        let next_scene = self.graph.get(&next_id).ok_or_else(|| {
            StoryError::new(
                "BROKEN_NEXT",
                format!(
                    "scene '{}' points at '{}', which does not resolve to a scene",
                    scene.id, next_id
                ),
            )
        })?;

        Ok(TurnOutcome::Advance {
            scene: next_scene.clone(),
            feedback,
        })
    }
}
