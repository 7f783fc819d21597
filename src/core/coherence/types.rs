use serde::{Deserialize, Serialize};
use strum::Display;

// SelectionInput: the categorical choices a caller made for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub pose: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default)]
    pub outfit: Option<String>,
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
}

// Severity: how strongly a pairing is expected to look wrong
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

// CoherenceWarningKind: which rule produced a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CoherenceWarningKind {
    ExpressionPoseConflict,
    SceneOutfitConflict,
    GymOutfitMismatch,
    WatersideFormalMismatch,
}

// CoherenceWarning: one incompatible pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceWarning {
    #[serde(rename = "type")]
    pub kind: CoherenceWarningKind,
    pub message: String,
    pub severity: Severity,
    pub elements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

// CoherenceResult: all findings for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoherenceResult {
    pub valid: bool,
    pub warning_count: usize,
    pub warnings: Vec<CoherenceWarning>,
    pub suggestions: Vec<String>,
}

impl CoherenceResult {
    /// Builds a result from warnings, deriving `valid`, the count and the
    /// flattened suggestion list (deduplicated, first occurrence wins).
    pub fn from_warnings(warnings: Vec<CoherenceWarning>) -> Self {
        let valid = !warnings.iter().any(|w| w.severity == Severity::High);

        let mut suggestions: Vec<String> = Vec::new();
        for suggestion in warnings
            .iter()
            .filter_map(|w| w.suggestions.as_ref())
            .flatten()
        {
            if !suggestions.contains(suggestion) {
                suggestions.push(suggestion.clone());
            }
        }

        Self {
            valid,
            warning_count: warnings.len(),
            warnings,
            suggestions,
        }
    }

    pub fn has_severity(&self, severity: Severity) -> bool {
        self.warnings.iter().any(|w| w.severity == severity)
    }
}
