pub mod annotate;
pub mod resolver;
pub mod validate;

pub use annotate::{AnnotatedText, Keyword, KeywordCategory};
pub use resolver::{StoryEngine, TurnInput, TurnOutcome};
pub use validate::{
    MultipleChoiceValidator, NumericValidator, ResponseValidator, ValidationResult,
};
