use serde::{Deserialize, Serialize};

use crate::annotate::annotate_matches;

const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub correct: bool,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: f64,
    pub annotated_input: String,
}

/// Scores free-text answers against a set of accepted keywords.
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    pub accepted_keywords: Vec<String>,
    pub required_count: usize,
    pub case_sensitive: bool,
    pub allow_partial: bool,
}

impl ResponseValidator {
    pub fn new(keywords: Vec<String>, required: usize) -> Self {
        Self {
            accepted_keywords: keywords,
            required_count: required,
            case_sensitive: false,
            allow_partial: false,
        }
    }

    pub fn validate(&self, input: &str) -> ValidationResult {
        if self.accepted_keywords.is_empty() {
            return ValidationResult {
                correct: true,
                score: 1.0,
                ..ValidationResult::default()
            };
        }

        let normalized = normalize(input, self.case_sensitive);

        let mut matched = Vec::new();
        let mut missing = Vec::new();

        for keyword in &self.accepted_keywords {
            let normalized_keyword = normalize(keyword, self.case_sensitive);

            let found = if self.allow_partial {
                normalized.contains(&normalized_keyword)
            } else {
                contains_word(&normalized, &normalized_keyword)
            };

            if found {
                matched.push(keyword.clone());
            } else {
                missing.push(keyword.clone());
            }
        }

        let score = matched.len() as f64 / self.accepted_keywords.len() as f64;
        let correct = matched.len() >= self.required_count;
        let annotated_input = annotate_matches(input, &matched);

        ValidationResult {
            correct,
            matched,
            missing,
            score,
            annotated_input,
        }
    }
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let folded = if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    };
    folded.trim_matches(EDGE_PUNCTUATION).to_string()
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split_whitespace()
        .any(|candidate| candidate.trim_end_matches(EDGE_PUNCTUATION) == word)
}

/// Accepts any input whose parsed value is within tolerance of an accepted
/// value. Unparsable input is a normal rejection, not an error.
#[derive(Debug, Clone)]
pub struct NumericValidator {
    pub accepted_values: Vec<f64>,
    pub tolerance: f64,
}

impl NumericValidator {
    pub fn validate_numeric(&self, input: &str) -> ValidationResult {
        let trimmed = input.trim();

        let Ok(value) = trimmed.parse::<f64>() else {
            return ValidationResult::default();
        };

        for accepted in &self.accepted_values {
            if (value - accepted).abs() <= self.tolerance {
                return ValidationResult {
                    correct: true,
                    score: 1.0,
                    annotated_input: trimmed.to_string(),
                    ..ValidationResult::default()
                };
            }
        }

        ValidationResult::default()
    }
}

#[derive(Debug, Clone)]
pub struct MultipleChoiceValidator {
    pub correct_indices: Vec<usize>,
    pub allow_multiple: bool,
}

impl MultipleChoiceValidator {
    pub fn validate_choice(&self, selected: &[usize]) -> ValidationResult {
        if !self.allow_multiple && selected.len() > 1 {
            return ValidationResult::default();
        }

        let mut match_count = 0usize;
        for selection in selected {
            if self.correct_indices.contains(selection) {
                match_count += 1;
            } else {
                // Any wrong selection fails outright, without partial credit.
                return ValidationResult::default();
            }
        }

        if self.allow_multiple && match_count != self.correct_indices.len() {
            return ValidationResult {
                score: match_count as f64 / self.correct_indices.len() as f64,
                ..ValidationResult::default()
            };
        }

        ValidationResult {
            correct: true,
            score: 1.0,
            ..ValidationResult::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_single_keyword() {
        let validator = ResponseValidator::new(vec!["1914".to_string()], 1);
        let result = validator.validate("1914");
        assert!(result.correct);
        assert_eq!(result.matched, vec!["1914"]);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn keyword_found_inside_a_sentence() {
        let validator = ResponseValidator::new(vec!["division".to_string()], 1);
        let result = validator.validate("I think the answer is division");
        assert!(result.correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn partial_match_scores_fraction_and_fails_threshold() {
        let validator = ResponseValidator::new(
            vec![
                "math".to_string(),
                "division".to_string(),
                "algebra".to_string(),
            ],
            3,
        );
        let result = validator.validate("Math uses division");
        assert!(!result.correct);
        assert_eq!(result.matched.len(), 2);
        assert_eq!(result.missing, vec!["algebra"]);
        assert!((result.score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn required_count_below_total_allows_partial_credit_pass() {
        let validator = ResponseValidator::new(
            vec![
                "math".to_string(),
                "division".to_string(),
                "algebra".to_string(),
            ],
            2,
        );
        let result = validator.validate("Math and division");
        assert!(result.correct);
        assert_eq!(result.matched.len(), 2);
    }

    #[test]
    fn matching_ignores_case_and_trailing_punctuation() {
        let validator = ResponseValidator::new(vec!["division".to_string()], 1);
        assert!(validator.validate("DIVISION").correct);
        assert!(validator.validate("The answer is: division.").correct);
    }

    #[test]
    fn whole_token_matching_rejects_substrings_by_default() {
        let validator = ResponseValidator::new(vec!["division".to_string()], 1);
        assert!(!validator.validate("subdivision").correct);

        let mut partial = ResponseValidator::new(vec!["division".to_string()], 1);
        partial.allow_partial = true;
        assert!(partial.validate("subdivision").correct);
    }

    #[test]
    fn no_keywords_matched_scores_zero() {
        let validator = ResponseValidator::new(vec!["division".to_string()], 1);
        let result = validator.validate("I don't know");
        assert!(!result.correct);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, vec!["division"]);
        assert_eq!(result.annotated_input, "I don't know");
    }

    #[test]
    fn empty_keyword_list_accepts_anything() {
        let validator = ResponseValidator::new(Vec::new(), 0);
        let result = validator.validate("whatever");
        assert!(result.correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn matched_keywords_are_highlighted_in_the_input() {
        let validator = ResponseValidator::new(vec!["division".to_string()], 1);
        let result = validator.validate("Math uses division");
        assert_eq!(
            result.annotated_input,
            "Math uses <mark class=\"match-correct\">division</mark>"
        );
    }

    #[test]
    fn numeric_within_tolerance_is_correct() {
        let validator = NumericValidator {
            accepted_values: vec![3.14],
            tolerance: 0.01,
        };
        let result = validator.validate_numeric("3.15");
        assert!(result.correct);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.annotated_input, "3.15");
    }

    #[test]
    fn numeric_outside_tolerance_is_incorrect() {
        let validator = NumericValidator {
            accepted_values: vec![3.14],
            tolerance: 0.01,
        };
        let result = validator.validate_numeric("3.2");
        assert!(!result.correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn unparsable_numeric_input_is_a_normal_rejection() {
        let validator = NumericValidator {
            accepted_values: vec![3.14],
            tolerance: 0.01,
        };
        let result = validator.validate_numeric("about three");
        assert!(!result.correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn numeric_input_is_trimmed_before_parsing() {
        let validator = NumericValidator {
            accepted_values: vec![42.0],
            tolerance: 0.0,
        };
        assert!(validator.validate_numeric("  42  ").correct);
    }

    #[test]
    fn choice_all_correct_selections_pass() {
        let validator = MultipleChoiceValidator {
            correct_indices: vec![1, 3],
            allow_multiple: true,
        };
        let result = validator.validate_choice(&[1, 3]);
        assert!(result.correct);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn choice_any_wrong_selection_fails_with_zero_score() {
        let validator = MultipleChoiceValidator {
            correct_indices: vec![1, 3],
            allow_multiple: true,
        };
        let result = validator.validate_choice(&[1, 2, 3]);
        assert!(!result.correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn choice_missing_a_correct_selection_earns_partial_score() {
        let validator = MultipleChoiceValidator {
            correct_indices: vec![1, 3],
            allow_multiple: true,
        };
        let result = validator.validate_choice(&[1]);
        assert!(!result.correct);
        assert!((result.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn choice_single_selection_mode_rejects_multiple_picks() {
        let validator = MultipleChoiceValidator {
            correct_indices: vec![1],
            allow_multiple: false,
        };
        let result = validator.validate_choice(&[1, 3]);
        assert!(!result.correct);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn choice_single_correct_selection_passes() {
        let validator = MultipleChoiceValidator {
            correct_indices: vec![2],
            allow_multiple: false,
        };
        let result = validator.validate_choice(&[2]);
        assert!(result.correct);
        assert_eq!(result.score, 1.0);
    }
}
