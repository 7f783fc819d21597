//! Prompt quality scorer: eight independent sub-scores summed to 0..=100.
//!
//! Evaluation order is fixed (subject clarity → specificity → realism →
//! token ordering → negative prompt → scene context → coherence → conflicts)
//! and determines the order suggestions are reported in.

use super::keywords::{
    AI_ARTIFACT_KEYWORDS, ANTI_AI_NEGATIVE_TERMS, LEAD_IN_PHRASES, QUALITY_KEYWORDS,
    REALISM_KEYWORDS, any_present, count_present, first_conflict, has_age, starts_with_age,
};
use super::types::{
    Grade, PromptQualityScore, QualityBreakdown, QuickRating, QuickRatingResult, ScoringInput,
};

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Suggestions and strengths collected while scoring.
#[derive(Debug, Default)]
struct Findings {
    suggestions: Vec<String>,
    strengths: Vec<String>,
}

impl Findings {
    fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    fn strength(&mut self, message: impl Into<String>) {
        self.strengths.push(message.into());
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QualityScorer {
    max_suggestions: usize,
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUGGESTIONS)
    }
}

impl QualityScorer {
    /// `max_suggestions` is clamped to `1..=DEFAULT_MAX_SUGGESTIONS`.
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            max_suggestions: max_suggestions.clamp(1, DEFAULT_MAX_SUGGESTIONS),
        }
    }

    pub fn score(&self, input: &ScoringInput) -> PromptQualityScore {
        let prompt = input.prompt.as_str();
        let lowered = prompt.to_lowercase();
        let mut findings = Findings::default();

        let breakdown = QualityBreakdown {
            subject_clarity: subject_clarity(prompt, &lowered, &mut findings),
            specificity: specificity(prompt, &lowered, &mut findings),
            realism_potential: realism_potential(input, &lowered, &mut findings),
            token_ordering: token_ordering(input, &lowered, &mut findings),
            negative_prompt_quality: negative_prompt_quality(
                input.negative_prompt.as_deref(),
                &mut findings,
            ),
            scene_context: scene_context(input, &mut findings),
            coherence: coherence(input.coherence_warnings, &mut findings),
            no_conflicts: no_conflicts(&lowered, &mut findings),
        };

        let overall = breakdown.total().min(100);
        let Findings {
            mut suggestions,
            strengths,
        } = findings;
        suggestions.truncate(self.max_suggestions);

        tracing::debug!(overall, warnings = input.coherence_warnings, "prompt scored");

        PromptQualityScore {
            overall,
            grade: Grade::from_score(overall),
            breakdown,
            suggestions,
            strengths,
        }
    }

    /// Coarse 0..=100 rating for free text with no structured metadata:
    /// word count, realism cues, quality cues and token ordering, 25 each.
    pub fn quick_rating(prompt: &str) -> QuickRatingResult {
        let lowered = prompt.to_lowercase();
        let mut score = 0;

        if prompt.split_whitespace().count() >= 20 {
            score += 25;
        }
        if any_present(&lowered, REALISM_KEYWORDS) {
            score += 25;
        }
        if any_present(&lowered, QUALITY_KEYWORDS) {
            score += 25;
        }
        if leads_with_subject(&lowered) {
            score += 25;
        }

        QuickRatingResult {
            rating: QuickRating::from_score(score),
            score,
        }
    }
}

// ── Sub-scores ───────────────────────────────────────────────────────────────

fn subject_clarity(prompt: &str, lowered: &str, findings: &mut Findings) -> u32 {
    let mut points = 0;

    if has_age(prompt) {
        points += 5;
        findings.strength("Specific age stated");
    } else {
        findings.suggest("Add a specific age (e.g. \"25-year-old\") to anchor the subject");
    }

    for (feature, strength, suggestion) in [
        ("hair", "Hair described", "Describe hair color, length or style"),
        ("eyes", "Eyes described", "Describe eye color or shape"),
        ("skin", "Skin described", "Mention skin tone or texture"),
    ] {
        if lowered.contains(feature) {
            points += 5;
            findings.strength(strength);
        } else {
            findings.suggest(suggestion);
        }
    }

    points
}

fn specificity(prompt: &str, lowered: &str, findings: &mut Findings) -> u32 {
    let mut points = 0;

    let word_count = prompt.split_whitespace().count();
    if word_count >= 30 {
        points += 5;
        findings.strength("Rich, detailed description");
    } else if word_count >= 20 {
        points += 3;
    } else {
        findings.suggest("Add more descriptive detail (aim for 30+ words)");
    }

    let comma_count = prompt.matches(',').count();
    if comma_count >= 5 {
        points += 5;
        findings.strength("Descriptors clearly separated");
    } else if comma_count >= 3 {
        points += 3;
    } else {
        findings.suggest("Separate descriptors with commas");
    }

    if count_present(lowered, QUALITY_KEYWORDS) >= 2 {
        points += 5;
        findings.strength("Quality keywords present");
    } else {
        findings.suggest("Add quality keywords such as \"detailed\" or \"8k\"");
    }

    points
}

fn realism_potential(input: &ScoringInput, lowered: &str, findings: &mut Findings) -> u32 {
    let mut points: u32 = 0;

    if input.has_realism {
        points += 8;
        findings.strength("Realism mode enabled");
    } else {
        findings.suggest("Enable realism mode for photographic results");
    }

    let realism_cues = count_present(lowered, REALISM_KEYWORDS);
    if realism_cues >= 3 {
        points += 7;
        findings.strength("Strong realism cues");
    } else if realism_cues >= 1 {
        points += 4;
        findings.strength("Some realism cues");
    } else {
        findings.suggest("Add realism cues such as \"candid\" or \"skin texture\"");
    }

    if any_present(lowered, AI_ARTIFACT_KEYWORDS) {
        points = points.saturating_sub(3);
        findings.suggest("Remove AI-artifact terms like \"perfect\" or \"flawless\"");
    }

    points
}

fn token_ordering(input: &ScoringInput, lowered: &str, findings: &mut Findings) -> u32 {
    let mut points = 0;

    if leads_with_subject(lowered) {
        points += 10;
        findings.strength("Subject leads the prompt");
    } else {
        findings.suggest("Lead with the subject (an age or \"photo of ...\")");
    }
    if input.has_expression {
        points += 2;
    }
    if input.has_pose {
        points += 3;
    }

    points
}

fn negative_prompt_quality(negative: Option<&str>, findings: &mut Findings) -> u32 {
    let Some(negative) = negative.filter(|n| !n.trim().is_empty()) else {
        findings.suggest("Add a negative prompt to steer away from common defects");
        return 0;
    };

    let segments = negative
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .count();
    let mut points = match segments {
        15.. => 10,
        10..=14 => 7,
        5..=9 => 4,
        _ => 0,
    };
    if segments >= 15 {
        findings.strength("Comprehensive negative prompt");
    } else if segments < 10 {
        findings.suggest("Expand the negative prompt (aim for 10+ terms)");
    }

    if any_present(&negative.to_lowercase(), ANTI_AI_NEGATIVE_TERMS) {
        points = (points + 2).min(QualityBreakdown::MAX_NEGATIVE_PROMPT_QUALITY);
        findings.strength("Negative prompt targets AI artifacts");
    } else {
        findings.suggest("Add anti-AI terms like \"plastic\" or \"waxy\" to the negative prompt");
    }

    points
}

fn scene_context(input: &ScoringInput, findings: &mut Findings) -> u32 {
    let mut points = 0;
    if input.has_context_enhancement {
        points += 8;
        findings.strength("Scene context applied");
    } else {
        findings.suggest("Apply scene context enhancement");
    }
    if input.has_scene {
        points += 2;
    }
    points
}

fn coherence(warnings: usize, findings: &mut Findings) -> u32 {
    match warnings {
        0 => {
            findings.strength("No coherence warnings");
            10
        }
        n => {
            findings.suggest(format!("Resolve {n} coherence warning(s)"));
            match n {
                1 => 6,
                2 => 3,
                _ => 0,
            }
        }
    }
}

fn no_conflicts(lowered: &str, findings: &mut Findings) -> u32 {
    match first_conflict(lowered) {
        None => {
            findings.strength("No contradictory terms");
            QualityBreakdown::MAX_NO_CONFLICTS
        }
        Some((left, right)) => {
            findings.suggest(format!("Remove contradictory terms \"{left}\" / \"{right}\""));
            0
        }
    }
}

fn leads_with_subject(lowered: &str) -> bool {
    let trimmed = lowered.trim_start();
    starts_with_age(trimmed) || LEAD_IN_PHRASES.iter().any(|p| trimmed.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(prompt: &str) -> ScoringInput {
        ScoringInput {
            prompt: prompt.into(),
            ..ScoringInput::default()
        }
    }

    const NEGATIVE_16: &str = "blurry, deformed, extra limbs, bad anatomy, watermark, text, \
        logo, lowres, jpeg artifacts, cropped, duplicate, mutated hands, disfigured, \
        out of frame, cartoon, plastic";

    // -- subject clarity ---------------------------------------------------

    #[test]
    fn subject_clarity_full_marks() {
        let mut f = Findings::default();
        let points = subject_clarity(
            "30 year old man, short hair, green eyes, tan skin",
            "30 year old man, short hair, green eyes, tan skin",
            &mut f,
        );
        assert_eq!(points, 20);
        assert!(f.suggestions.is_empty());
        assert_eq!(f.strengths.len(), 4);
    }

    #[test]
    fn subject_clarity_missing_everything() {
        let mut f = Findings::default();
        assert_eq!(subject_clarity("a cat", "a cat", &mut f), 0);
        assert_eq!(f.suggestions.len(), 4);
    }

    // -- specificity -------------------------------------------------------

    #[test]
    fn specificity_mid_tier() {
        let prompt = "one two three four five six seven eight nine ten, eleven twelve, \
                      thirteen fourteen, fifteen sixteen seventeen eighteen nineteen twenty";
        let mut f = Findings::default();
        assert_eq!(specificity(prompt, &prompt.to_lowercase(), &mut f), 3 + 3);
    }

    // -- realism -----------------------------------------------------------

    #[test]
    fn realism_penalty_floors_at_zero() {
        let mut f = Findings::default();
        let points = realism_potential(&input("flawless"), "flawless", &mut f);
        assert_eq!(points, 0);
    }

    #[test]
    fn realism_strong_cues_with_mode() {
        let lowered = "candid, skin texture, film grain";
        let scoring = ScoringInput {
            has_realism: true,
            ..input(lowered)
        };
        let mut f = Findings::default();
        assert_eq!(realism_potential(&scoring, lowered, &mut f), 15);
    }

    #[test]
    fn realism_artifact_penalty_applies_after_bonus() {
        let lowered = "candid, perfect face";
        let scoring = ScoringInput {
            has_realism: true,
            ..input(lowered)
        };
        let mut f = Findings::default();
        assert_eq!(realism_potential(&scoring, lowered, &mut f), 8 + 4 - 3);
    }

    // -- token ordering ----------------------------------------------------

    #[test]
    fn token_ordering_lead_ins() {
        for prompt in ["a woman", "photo of a man", "Portrait of a chef", "close-up face"] {
            let mut f = Findings::default();
            let lowered = prompt.to_lowercase();
            assert_eq!(token_ordering(&input(prompt), &lowered, &mut f), 10, "{prompt}");
        }
    }

    #[test]
    fn token_ordering_flags_add_points() {
        let scoring = ScoringInput {
            has_expression: true,
            has_pose: true,
            ..input("woman standing")
        };
        let mut f = Findings::default();
        assert_eq!(token_ordering(&scoring, "woman standing", &mut f), 5);
    }

    // -- negative prompt ---------------------------------------------------

    #[test]
    fn negative_missing_scores_zero_with_suggestion() {
        let mut f = Findings::default();
        assert_eq!(negative_prompt_quality(None, &mut f), 0);
        assert_eq!(f.suggestions.len(), 1);

        let mut f = Findings::default();
        assert_eq!(negative_prompt_quality(Some("   "), &mut f), 0);
        assert_eq!(f.suggestions.len(), 1);
    }

    #[test]
    fn negative_bonus_is_capped() {
        let mut f = Findings::default();
        assert_eq!(negative_prompt_quality(Some(NEGATIVE_16), &mut f), 10);
    }

    #[test]
    fn negative_tiers() {
        let ten = "a, b, c, d, e, f, g, h, i, j";
        let five = "a, b, c, d, e";
        let four = "a, b, c, d";
        let mut f = Findings::default();
        assert_eq!(negative_prompt_quality(Some(ten), &mut f), 7);
        assert_eq!(negative_prompt_quality(Some(five), &mut f), 4);
        assert_eq!(negative_prompt_quality(Some(four), &mut f), 0);
        assert_eq!(negative_prompt_quality(Some("a, b, waxy"), &mut f), 2);
    }

    // -- coherence / conflicts --------------------------------------------

    #[test]
    fn coherence_mapping() {
        let mut f = Findings::default();
        assert_eq!(coherence(0, &mut f), 10);
        assert_eq!(coherence(1, &mut f), 6);
        assert_eq!(coherence(2, &mut f), 3);
        assert_eq!(coherence(3, &mut f), 0);
        assert_eq!(coherence(12, &mut f), 0);
    }

    #[test]
    fn conflicting_terms_zero_the_category() {
        let mut f = Findings::default();
        assert_eq!(no_conflicts("happy but sad", &mut f), 0);
        assert_eq!(no_conflicts("happy and calm", &mut f), 5);
    }

    // -- full score --------------------------------------------------------

    #[test]
    fn suggestions_capped_at_five() {
        let score = QualityScorer::default().score(&input("cat"));
        assert_eq!(score.suggestions.len(), 5);
        assert_eq!(
            score.suggestions[0],
            "Add a specific age (e.g. \"25-year-old\") to anchor the subject"
        );
    }

    #[test]
    fn suggestion_cap_never_exceeds_five() {
        let score = QualityScorer::new(9).score(&input("cat"));
        assert_eq!(score.suggestions.len(), 5);
        let score = QualityScorer::new(0).score(&input("cat"));
        assert_eq!(score.suggestions.len(), 1);
    }

    #[test]
    fn suggestion_cap_is_configurable() {
        let score = QualityScorer::new(2).score(&input("cat"));
        assert_eq!(score.suggestions.len(), 2);
    }

    #[test]
    fn overall_is_sum_of_breakdown() {
        let score = QualityScorer::default().score(&ScoringInput {
            negative_prompt: Some(NEGATIVE_16.into()),
            has_realism: true,
            has_scene: true,
            coherence_warnings: 1,
            ..input("photo of a 40-year-old man, grey hair, candid, detailed, 8k")
        });
        assert_eq!(score.overall, score.breakdown.total());
        assert!(score.overall <= 100);
    }

    #[test]
    fn empty_prompt_scores_low_but_valid() {
        let score = QualityScorer::default().score(&input(""));
        assert_eq!(score.overall, score.breakdown.total());
        assert_eq!(score.breakdown.coherence, 10);
        assert_eq!(score.breakdown.no_conflicts, 5);
        assert_eq!(score.grade, Grade::F);
    }

    // -- quick rating ------------------------------------------------------

    #[test]
    fn quick_rating_poor_for_bare_text() {
        let result = QualityScorer::quick_rating("cat");
        assert_eq!(result.score, 0);
        assert_eq!(result.rating, QuickRating::Poor);
    }

    #[test]
    fn quick_rating_excellent_for_rich_prompt() {
        let prompt = "photo of a 28-year-old woman with long dark hair and hazel eyes, \
                      candid street portrait, natural skin texture, soft window light, \
                      detailed, 8k, shallow depth of field, city background";
        let result = QualityScorer::quick_rating(prompt);
        assert_eq!(result.score, 100);
        assert_eq!(result.rating, QuickRating::Excellent);
    }
}
