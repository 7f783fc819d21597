// Quality scoring: weighted eight-category score, grade and suggestions.

pub mod keywords;
pub mod report;
pub mod scorer;
pub mod types;

pub use report::format_score_display;
pub use scorer::{DEFAULT_MAX_SUGGESTIONS, QualityScorer};
pub use types::*;
