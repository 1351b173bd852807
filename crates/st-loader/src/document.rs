use serde::Deserialize;

use st_core::ThreadType;

/// Top-level shape of an authored content document.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDocument {
    pub scenes: Vec<DocScene>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocScene {
    pub id: String,
    pub thread_type: ThreadType,
    pub text: String,
    #[serde(default)]
    pub choices: Vec<DocChoice>,
    #[serde(default)]
    pub validation: Option<DocValidation>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocChoice {
    pub text: String,
    pub next: String,
    #[serde(default)]
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocValidation {
    #[serde(default)]
    pub min_length: usize,
}
