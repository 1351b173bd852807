use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Mental,
    Physical,
    Emotional,
    Magic,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Mental => "mental",
            KeywordCategory::Physical => "physical",
            KeywordCategory::Emotional => "emotional",
            KeywordCategory::Magic => "magic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub category: KeywordCategory,
    pub learned: bool,
}

/// Display text plus the concept keywords to highlight inside it.
/// Built per render call; owns its keyword list and is never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedText {
    pub raw: String,
    pub keywords: Vec<Keyword>,
}

struct Replacement {
    start: usize,
    end: usize,
    markup: String,
}

impl AnnotatedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            raw: text.into(),
            keywords: Vec::new(),
        }
    }

    pub fn add_keyword(mut self, text: impl Into<String>, category: KeywordCategory) -> Self {
        self.keywords.push(Keyword {
            text: text.into(),
            category,
            learned: false,
        });
        self
    }

    pub fn add_learned_keyword(
        mut self,
        text: impl Into<String>,
        category: KeywordCategory,
    ) -> Self {
        self.keywords.push(Keyword {
            text: text.into(),
            category,
            learned: true,
        });
        self
    }

    /// Renders the text with every non-overlapping case-insensitive keyword
    /// occurrence wrapped in a styling mark. Longer keywords claim their
    /// spans first so a phrase is never fragmented by one of its words.
    pub fn render(&self) -> String {
        if self.keywords.is_empty() {
            return self.raw.clone();
        }

        let mut sorted = self.keywords.clone();
        sorted.sort_by(|a, b| b.text.len().cmp(&a.text.len()));

        let lower_text = self.raw.to_lowercase();
        let mut replacements: Vec<Replacement> = Vec::new();

        for keyword in &sorted {
            let lower_keyword = keyword.text.to_lowercase();
            if lower_keyword.is_empty() {
                continue;
            }

            let mut search_start = 0usize;
            while let Some(found) = lower_text[search_start..].find(&lower_keyword) {
                let start = search_start + found;
                let end = start + lower_keyword.len();

                let overlaps = replacements
                    .iter()
                    .any(|existing| start < existing.end && end > existing.start);

                if !overlaps {
                    // Offsets come from the lowercased text; guard the slice
                    // in case lowercasing shifted byte positions.
                    if let Some(original) = self.raw.get(start..end) {
                        replacements.push(Replacement {
                            start,
                            end,
                            markup: format!(
                                "<mark class=\"kw kw-{}{}\" data-concept=\"{}\">{}</mark>",
                                keyword.category.as_str(),
                                learned_class(keyword.learned),
                                keyword.text,
                                original,
                            ),
                        });
                    }
                }

                // Rescan from the next char so overlapping occurrences are
                // still considered (and rejected by the overlap check).
                search_start = start + 1;
                while search_start < lower_text.len() && !lower_text.is_char_boundary(search_start)
                {
                    search_start += 1;
                }
            }
        }

        if replacements.is_empty() {
            return self.raw.clone();
        }

        replacements.sort_by_key(|replacement| replacement.start);

        let mut result = String::with_capacity(self.raw.len());
        let mut last_end = 0usize;
        for replacement in &replacements {
            result.push_str(&self.raw[last_end..replacement.start]);
            result.push_str(&replacement.markup);
            last_end = replacement.end;
        }
        result.push_str(&self.raw[last_end..]);
        result
    }

    pub fn render_plain(&self) -> &str {
        &self.raw
    }

    pub fn has_keyword(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| keyword.text.to_lowercase() == lower)
    }

    pub fn mark_as_learned(&mut self, text: &str) {
        let lower = text.to_lowercase();
        for keyword in &mut self.keywords {
            if keyword.text.to_lowercase() == lower {
                keyword.learned = true;
            }
        }
    }
}

fn learned_class(learned: bool) -> &'static str {
    if learned {
        " kw-learned"
    } else {
        ""
    }
}

/// Highlights matched response keywords in the player's own input,
/// word-boundary-safe and case-insensitive. Longer keywords are applied
/// first so they are not fragmented by shorter ones.
pub fn annotate_matches(input: &str, matches: &[String]) -> String {
    if matches.is_empty() {
        return input.to_string();
    }

    let mut sorted = matches.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut result = input.to_string();
    for keyword in &sorted {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
        let re = Regex::new(&pattern).expect("keyword pattern regex");
        result = re
            .replace_all(&result, |caps: &regex::Captures<'_>| {
                format!("<mark class=\"match-correct\">{}</mark>", &caps[0])
            })
            .into_owned();
    }

    result
}
