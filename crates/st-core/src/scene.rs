use serde::{Deserialize, Serialize};

pub const TERMINAL_SCENE_ID: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadType {
    Multi,
    Open,
    Affirmative,
    Finisher,
}

impl ThreadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadType::Multi => "multi",
            ThreadType::Open => "open",
            ThreadType::Affirmative => "affirmative",
            ThreadType::Finisher => "finisher",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub thread_type: ThreadType,
    pub text: String,
    pub choices: Vec<Choice>,
    pub next: String,
    pub min_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub next: String,
    pub impact: String,
}
