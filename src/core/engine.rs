use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::Config;
use crate::core::coherence::{CoherenceResult, CoherenceValidator, SelectionInput};
use crate::core::context::{
    ContextEnhancement, ContextEnhancer, EnhanceOptions, RandomSource, SceneContext, SceneSummary,
};
use crate::core::quality::{
    PromptQualityScore, QualityScorer, QuickRatingResult, ScoringInput,
    format_score_display as render_score,
};

/// Engine with default options; backs the crate-level free functions.
pub static DEFAULT_ENGINE: LazyLock<PromptEngine> = LazyLock::new(PromptEngine::default);

/// Bundles the three components with caller-tunable defaults.
///
/// Every operation is total: unknown identifiers produce empty results rather
/// than errors, and nothing here performs I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEngine {
    enhance_options: EnhanceOptions,
    scorer: QualityScorer,
}

/// Input to [`PromptEngine::assemble`]: the selection plus the caller's base
/// prompt text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembleRequest {
    #[serde(default)]
    pub selection: SelectionInput,
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub has_realism: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledPrompt {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub coherence: CoherenceResult,
    pub enhancement: ContextEnhancement,
    pub score: PromptQualityScore,
}

impl PromptEngine {
    pub fn new(enhance_options: EnhanceOptions, scorer: QualityScorer) -> Self {
        Self {
            enhance_options,
            scorer,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.context.enhance_options(),
            QualityScorer::new(config.scoring.max_suggestions),
        )
    }

    pub fn enhance_options(&self) -> EnhanceOptions {
        self.enhance_options
    }

    // ── Coherence ────────────────────────────────────────────────────────

    pub fn validate_coherence(&self, input: &SelectionInput) -> CoherenceResult {
        CoherenceValidator::validate(input)
    }

    pub fn get_compatible_expressions(&self, pose: &str) -> Vec<String> {
        CoherenceValidator::compatible_expressions_for(pose)
    }

    pub fn get_compatible_poses(&self, expression: &str) -> Vec<String> {
        CoherenceValidator::compatible_poses_for(expression)
    }

    pub fn get_compatible_outfits(&self, scene: &str) -> Vec<String> {
        CoherenceValidator::compatible_outfits_for(scene)
    }

    // ── Context ──────────────────────────────────────────────────────────

    pub fn get_scene_context(&self, scene_id: &str) -> Option<SceneContext> {
        ContextEnhancer::get_context(scene_id)
    }

    pub fn apply_context_enhancements<R: RandomSource + ?Sized>(
        &self,
        scene_id: &str,
        options: &EnhanceOptions,
        rng: &mut R,
    ) -> ContextEnhancement {
        ContextEnhancer::enhance(scene_id, options, rng)
    }

    pub fn list_scene_contexts(&self) -> Vec<SceneSummary> {
        ContextEnhancer::list_contexts()
    }

    // ── Quality ──────────────────────────────────────────────────────────

    pub fn score_prompt(&self, input: &ScoringInput) -> PromptQualityScore {
        self.scorer.score(input)
    }

    pub fn get_quick_rating(&self, prompt: &str) -> QuickRatingResult {
        QualityScorer::quick_rating(prompt)
    }

    pub fn format_score_display(&self, score: &PromptQualityScore) -> String {
        render_score(score)
    }

    // ── Pipeline ─────────────────────────────────────────────────────────

    /// Validate, enhance with the engine's options, append the fragments to
    /// the caller's prompts, then score the result.
    ///
    /// Additions and the suggested lighting are appended comma-separated in
    /// that order; avoid terms are appended to the negative prompt, which is
    /// created if the caller supplied none and the scene has any.
    pub fn assemble<R: RandomSource + ?Sized>(
        &self,
        request: &AssembleRequest,
        rng: &mut R,
    ) -> AssembledPrompt {
        let selection = &request.selection;
        let coherence = self.validate_coherence(selection);

        let enhancement = match selection.scene.as_deref() {
            Some(scene) => self.apply_context_enhancements(scene, &self.enhance_options, rng),
            None => ContextEnhancement::default(),
        };

        let prompt = join_fragments(
            Some(request.prompt.as_str()),
            enhancement
                .prompt_additions
                .iter()
                .chain(enhancement.suggested_lighting.iter()),
        );
        let negative_prompt = match &request.negative_prompt {
            None if enhancement.negative_additions.is_empty() => None,
            base => Some(join_fragments(
                base.as_deref(),
                enhancement.negative_additions.iter(),
            )),
        };

        let score = self.score_prompt(&ScoringInput {
            prompt: prompt.clone(),
            negative_prompt: negative_prompt.clone(),
            has_realism: request.has_realism,
            has_context_enhancement: !enhancement.is_empty(),
            has_scene: selection.scene.is_some(),
            has_expression: selection.expression.is_some(),
            has_pose: selection.pose.is_some(),
            coherence_warnings: coherence.warning_count,
        });

        tracing::debug!(
            warnings = coherence.warning_count,
            additions = enhancement.prompt_additions.len(),
            overall = score.overall,
            "assembled prompt"
        );

        AssembledPrompt {
            prompt,
            negative_prompt,
            coherence,
            enhancement,
            score,
        }
    }
}

fn join_fragments<'a>(base: Option<&'a str>, extra: impl Iterator<Item = &'a String>) -> String {
    base.map(str::trim)
        .filter(|s| !s.is_empty())
        .into_iter()
        .chain(extra.map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ")
}
