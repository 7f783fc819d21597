#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

//! Character-image prompt engine: coherence validation of categorical
//! selections, scene-aware prompt enrichment and weighted quality scoring.
//!
//! The free functions below run against a default [`PromptEngine`]. Build one
//! with [`PromptEngine::from_config`] to use loaded settings instead.

pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use config::Config;
pub use crate::core::engine::{AssembleRequest, AssembledPrompt, DEFAULT_ENGINE, PromptEngine};
pub use error::{ConfigError, InputError, Result, VisageError};

use crate::core::coherence::{CoherenceResult, SelectionInput};
use crate::core::context::{ContextEnhancement, EnhanceOptions, SceneContext, SceneSummary};
use crate::core::quality::{PromptQualityScore, QuickRatingResult, ScoringInput};

pub fn validate_coherence(input: &SelectionInput) -> CoherenceResult {
    DEFAULT_ENGINE.validate_coherence(input)
}

/// Expression ids whose category is compatible with the given pose.
pub fn get_compatible_expressions(pose: &str) -> Vec<String> {
    DEFAULT_ENGINE.get_compatible_expressions(pose)
}

/// Pose ids whose category is compatible with the given expression.
pub fn get_compatible_poses(expression: &str) -> Vec<String> {
    DEFAULT_ENGINE.get_compatible_poses(expression)
}

/// Outfit ids whose category is compatible with the given scene.
pub fn get_compatible_outfits(scene: &str) -> Vec<String> {
    DEFAULT_ENGINE.get_compatible_outfits(scene)
}

pub fn get_scene_context(scene_id: &str) -> Option<SceneContext> {
    DEFAULT_ENGINE.get_scene_context(scene_id)
}

/// Uses the thread-local RNG for the activity pick. Call
/// [`PromptEngine::apply_context_enhancements`] to supply your own source.
pub fn apply_context_enhancements(scene_id: &str, options: &EnhanceOptions) -> ContextEnhancement {
    DEFAULT_ENGINE.apply_context_enhancements(scene_id, options, &mut rand::rng())
}

pub fn list_scene_contexts() -> Vec<SceneSummary> {
    DEFAULT_ENGINE.list_scene_contexts()
}

pub fn score_prompt(input: &ScoringInput) -> PromptQualityScore {
    DEFAULT_ENGINE.score_prompt(input)
}

pub fn get_quick_rating(prompt: &str) -> QuickRatingResult {
    DEFAULT_ENGINE.get_quick_rating(prompt)
}

pub fn format_score_display(score: &PromptQualityScore) -> String {
    DEFAULT_ENGINE.format_score_display(score)
}
