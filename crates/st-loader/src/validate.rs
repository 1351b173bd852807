use std::collections::BTreeSet;

use st_core::{format, Scene, SceneGraph, StoryError, ThreadType, TERMINAL_SCENE_ID};

/// Whole-graph structural validation. Collects every violation before
/// reporting so authors get a complete fix list in one pass.
pub(crate) fn validate_scene_graph(graph: &SceneGraph) -> Result<(), StoryError> {
    let mut violations = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for scene in graph.scenes() {
        if !seen_ids.insert(scene.id.as_str()) {
            violations.push(format!("scene {}: duplicate scene id", scene.id));
        }

        match scene.thread_type {
            ThreadType::Multi => {
                if scene.choices.is_empty() {
                    violations.push(format!(
                        "scene {}: thread_type 'multi' requires at least one choice",
                        scene.id
                    ));
                }
                for (index, choice) in scene.choices.iter().enumerate() {
                    if let Err(reason) = check_next(&choice.next, graph) {
                        violations.push(format!(
                            "scene {} choice {}: {}",
                            scene.id, index, reason
                        ));
                    }
                }
            }
            ThreadType::Open | ThreadType::Affirmative | ThreadType::Finisher => {
                if scene.next.is_empty() {
                    violations.push(format!(
                        "scene {}: thread_type '{}' requires 'next' field at scene level",
                        scene.id,
                        scene.thread_type.as_str()
                    ));
                } else if let Err(reason) = check_next(&scene.next, graph) {
                    violations.push(format!("scene {}: {}", scene.id, reason));
                }
            }
        }

        check_impacts(scene, &mut violations);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(StoryError::graph_invalid(&violations))
    }
}

fn check_next(next: &str, graph: &SceneGraph) -> Result<(), String> {
    if next == TERMINAL_SCENE_ID {
        return Ok(());
    }

    // Negative values are reserved for error states and always accepted.
    if next.starts_with('-') {
        return Ok(());
    }

    if !graph.contains(next) {
        return Err(format!("next '{}' references non-existent scene", next));
    }

    Ok(())
}

fn check_impacts(scene: &Scene, violations: &mut Vec<String>) {
    for (index, choice) in scene.choices.iter().enumerate() {
        if choice.impact.is_empty() {
            continue;
        }
        if !format::is_valid_impact(&choice.impact) {
            violations.push(format!(
                "scene {} choice {}: invalid impact format: '{}' must be entity.attribute+/-value (e.g. player.strength+2)",
                scene.id, index, choice.impact
            ));
        }
    }
}
