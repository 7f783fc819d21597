use serde::{Deserialize, Serialize};
use strum::Display;

// ScoringInput: the assembled prompt plus what the caller knows about it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct ScoringInput {
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub has_realism: bool,
    #[serde(default)]
    pub has_context_enhancement: bool,
    #[serde(default)]
    pub has_scene: bool,
    #[serde(default)]
    pub has_expression: bool,
    #[serde(default)]
    pub has_pose: bool,
    #[serde(default)]
    pub coherence_warnings: usize,
}

/// Per-category points. Maxima: subject clarity 20, specificity 15,
/// realism potential 15, token ordering 15, negative prompt 10,
/// scene context 10, coherence 10, no conflicts 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityBreakdown {
    pub subject_clarity: u32,
    pub specificity: u32,
    pub realism_potential: u32,
    pub token_ordering: u32,
    pub negative_prompt_quality: u32,
    pub scene_context: u32,
    pub coherence: u32,
    pub no_conflicts: u32,
}

impl QualityBreakdown {
    pub const MAX_SUBJECT_CLARITY: u32 = 20;
    pub const MAX_SPECIFICITY: u32 = 15;
    pub const MAX_REALISM_POTENTIAL: u32 = 15;
    pub const MAX_TOKEN_ORDERING: u32 = 15;
    pub const MAX_NEGATIVE_PROMPT_QUALITY: u32 = 10;
    pub const MAX_SCENE_CONTEXT: u32 = 10;
    pub const MAX_COHERENCE: u32 = 10;
    pub const MAX_NO_CONFLICTS: u32 = 5;

    pub fn total(&self) -> u32 {
        self.subject_clarity
            + self.specificity
            + self.realism_potential
            + self.token_ordering
            + self.negative_prompt_quality
            + self.scene_context
            + self.coherence
            + self.no_conflicts
    }

    /// `(label, points, maximum)` rows in evaluation order.
    pub fn rows(&self) -> [(&'static str, u32, u32); 8] {
        [
            ("Subject clarity", self.subject_clarity, Self::MAX_SUBJECT_CLARITY),
            ("Specificity", self.specificity, Self::MAX_SPECIFICITY),
            ("Realism potential", self.realism_potential, Self::MAX_REALISM_POTENTIAL),
            ("Token ordering", self.token_ordering, Self::MAX_TOKEN_ORDERING),
            (
                "Negative prompt",
                self.negative_prompt_quality,
                Self::MAX_NEGATIVE_PROMPT_QUALITY,
            ),
            ("Scene context", self.scene_context, Self::MAX_SCENE_CONTEXT),
            ("Coherence", self.coherence, Self::MAX_COHERENCE),
            ("No conflicts", self.no_conflicts, Self::MAX_NO_CONFLICTS),
        ]
    }
}

// Grade: letter grade for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            85.. => Self::A,
            70..=84 => Self::B,
            55..=69 => Self::C,
            40..=54 => Self::D,
            _ => Self::F,
        }
    }
}

// PromptQualityScore: full scoring result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptQualityScore {
    pub overall: u32,
    pub grade: Grade,
    pub breakdown: QualityBreakdown,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
}

// QuickRating: coarse rating for free-text prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuickRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QuickRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            75.. => Self::Excellent,
            50..=74 => Self::Good,
            25..=49 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickRatingResult {
    pub rating: QuickRating,
    pub score: u32,
}
