use std::sync::OnceLock;

use regex::Regex;

use crate::scene::TERMINAL_SCENE_ID;

pub fn is_valid_scene_id(id: &str) -> bool {
    // "0" is the reserved terminal id and skips the format check.
    if id == TERMINAL_SCENE_ID {
        return true;
    }
    scene_id_regex().is_match(id)
}

pub fn is_valid_impact(impact: &str) -> bool {
    impact_regex().is_match(impact)
}

fn scene_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+\.[0-9]+(\.[0-9]+)?:[a-z0-9-]+$").expect("scene id regex")
    })
}

fn impact_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z_]+(\.[a-z_]+)*[+-]\d+$").expect("impact regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_id_accepts_segment_number_slug() {
        assert!(is_valid_scene_id("preface.0:dream-start"));
        assert!(is_valid_scene_id("chapter1.5:boss-fight"));
        assert!(is_valid_scene_id("chapter1.5.2:boss-fight"));
    }

    #[test]
    fn scene_id_accepts_terminal_marker() {
        assert!(is_valid_scene_id("0"));
    }

    #[test]
    fn scene_id_rejects_bad_shapes() {
        assert!(!is_valid_scene_id(""));
        assert!(!is_valid_scene_id("preface:dream-start"));
        assert!(!is_valid_scene_id("Preface.0:dream-start"));
        assert!(!is_valid_scene_id("preface.0:Dream Start"));
        assert!(!is_valid_scene_id("preface.0.1.2:too-deep"));
        assert!(!is_valid_scene_id("1"));
    }

    #[test]
    fn impact_accepts_nested_attributes() {
        assert!(is_valid_impact("player.strength+2"));
        assert!(is_valid_impact("npc.teacher.trust-5"));
        assert!(is_valid_impact("world.chaos+10"));
    }

    #[test]
    fn impact_rejects_bad_shapes() {
        assert!(!is_valid_impact(""));
        assert!(!is_valid_impact("player.strength"));
        assert!(!is_valid_impact("player.strength*2"));
        assert!(!is_valid_impact("Player.strength+2"));
        assert!(!is_valid_impact("player.strength+2.5"));
    }
}
