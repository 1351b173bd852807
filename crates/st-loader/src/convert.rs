use st_core::{format, Choice, Scene, StoryError, ThreadType};

use crate::document::DocScene;

pub(crate) fn convert_scene(doc_scene: DocScene) -> Result<Scene, StoryError> {
    if !format::is_valid_scene_id(&doc_scene.id) {
        return Err(StoryError::new(
            "SCENE_ID_FORMAT",
            format!(
                "invalid scene id '{}': must be segment.number:slug (e.g. preface.0:dream-start)",
                doc_scene.id
            ),
        ));
    }

    let choices = doc_scene
        .choices
        .into_iter()
        .map(|doc_choice| Choice {
            text: doc_choice.text,
            next: doc_choice.next,
            impact: doc_choice.impact.unwrap_or_default(),
        })
        .collect();

    // The length gate only applies to open responses.
    let min_length = match (doc_scene.thread_type, doc_scene.validation) {
        (ThreadType::Open, Some(validation)) => validation.min_length,
        _ => 0,
    };

    Ok(Scene {
        id: doc_scene.id,
        thread_type: doc_scene.thread_type,
        text: doc_scene.text.trim().to_string(),
        choices,
        next: doc_scene.next.unwrap_or_default(),
        min_length,
    })
}
