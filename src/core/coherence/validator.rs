//! Coherence validator: flags selections that look visually wrong together.
//!
//! Four independent checks run on every selection:
//! - Expression ↔ pose category matrix (medium)
//! - Scene ↔ outfit category matrix (low)
//! - Gym scene without athletic wear (high, substring rule)
//! - Beach/pool scene with formal or business wear (high, substring rule)
//!
//! The two substring rules read raw identifier text and fire in addition to
//! the matrix check; overlapping findings are kept as separate warnings.

use crate::core::taxonomy::{
    EXPRESSIONS, OUTFITS, POSES, SCENES, leaf_name, outfits_for_scene, poses_for_expression,
};

use super::types::{
    CoherenceResult, CoherenceWarning, CoherenceWarningKind, SelectionInput, Severity,
};

const MAX_MATRIX_SUGGESTIONS: usize = 2;

const GYM_MARKER: &str = "gym";
const GYM_OUTFIT_MARKERS: &[&str] = &["athletic", "gym", "yoga"];
const GYM_SUGGESTIONS: &[&str] = &["athletic.leggings", "athletic.yogaSet"];

const WATERSIDE_MARKERS: &[&str] = &["beach", "pool"];
const WATERSIDE_FORBIDDEN_MARKERS: &[&str] = &["formal", "business"];
const WATERSIDE_SUGGESTIONS: &[&str] = &["casual.sundress", "athletic.swimwear"];

pub struct CoherenceValidator;

impl CoherenceValidator {
    pub fn validate(input: &SelectionInput) -> CoherenceResult {
        if input.lighting.is_some() || input.activity.is_some() {
            tracing::trace!(
                lighting = input.lighting.as_deref(),
                activity = input.activity.as_deref(),
                "coherence: lighting/activity carried without checks"
            );
        }

        let expression = input.expression.as_deref();
        let pose = input.pose.as_deref();
        let scene = input.scene.as_deref();
        let outfit = input.outfit.as_deref();

        let warnings: Vec<CoherenceWarning> = [
            check_expression_pose(expression, pose),
            check_scene_outfit(scene, outfit),
            check_gym_outfit(scene, outfit),
            check_waterside_outfit(scene, outfit),
        ]
        .into_iter()
        .flatten()
        .inspect(|w| {
            tracing::debug!(kind = %w.kind, severity = %w.severity, "coherence warning");
        })
        .collect();

        CoherenceResult::from_warnings(warnings)
    }

    /// Every expression whose category permits the pose's category.
    pub fn compatible_expressions_for(pose: &str) -> Vec<String> {
        let Some(pose_category) = POSES.category_of(pose) else {
            return Vec::new();
        };
        EXPRESSIONS.ids_where(|category| poses_for_expression(category).contains(&pose_category))
    }

    /// Every pose whose category the expression's category permits.
    pub fn compatible_poses_for(expression: &str) -> Vec<String> {
        let Some(expression_category) = EXPRESSIONS.category_of(expression) else {
            return Vec::new();
        };
        let allowed = poses_for_expression(expression_category);
        POSES.ids_where(|category| allowed.contains(&category))
    }

    /// Every outfit whose category the scene's category permits.
    pub fn compatible_outfits_for(scene: &str) -> Vec<String> {
        let Some(scene_category) = SCENES.category_of(scene) else {
            return Vec::new();
        };
        let allowed = outfits_for_scene(scene_category);
        OUTFITS.ids_where(|category| allowed.contains(&category))
    }
}

// ── Matrix checks ────────────────────────────────────────────────────────────

fn check_expression_pose(
    expression: Option<&str>,
    pose: Option<&str>,
) -> Option<CoherenceWarning> {
    let (expression, pose) = (expression?, pose?);
    // Unmapped identifiers are unknown, not conflicting.
    let expression_category = EXPRESSIONS.category_of(expression)?;
    let pose_category = POSES.category_of(pose)?;

    if poses_for_expression(expression_category).contains(&pose_category) {
        return None;
    }

    let mut suggestions: Vec<String> = Vec::new();
    for (id, category) in EXPRESSIONS.entries() {
        if suggestions.len() == MAX_MATRIX_SUGGESTIONS {
            break;
        }
        if !poses_for_expression(*category).contains(&pose_category) {
            continue;
        }
        let suggestion = format!("try {} expression", leaf_name(id));
        if !suggestions.contains(&suggestion) {
            suggestions.push(suggestion);
        }
    }

    Some(CoherenceWarning {
        kind: CoherenceWarningKind::ExpressionPoseConflict,
        message: format!(
            "A {} expression ({expression_category}) rarely reads well with a {} pose ({pose_category})",
            leaf_name(expression),
            leaf_name(pose),
        ),
        severity: Severity::Medium,
        elements: vec![expression.to_string(), pose.to_string()],
        suggestions: non_empty(suggestions),
    })
}

fn check_scene_outfit(scene: Option<&str>, outfit: Option<&str>) -> Option<CoherenceWarning> {
    let (scene, outfit) = (scene?, outfit?);
    let scene_category = SCENES.category_of(scene)?;
    let outfit_category = OUTFITS.category_of(outfit)?;

    let allowed = outfits_for_scene(scene_category);
    if allowed.contains(&outfit_category) {
        return None;
    }

    let mut suggestions: Vec<String> = Vec::new();
    for (id, category) in OUTFITS.entries() {
        if suggestions.len() == MAX_MATRIX_SUGGESTIONS {
            break;
        }
        if allowed.contains(category) {
            let suggestion = outfit_suggestion(id);
            if !suggestions.contains(&suggestion) {
                suggestions.push(suggestion);
            }
        }
    }

    Some(CoherenceWarning {
        kind: CoherenceWarningKind::SceneOutfitConflict,
        message: format!(
            "{outfit} ({outfit_category}) is unusual for a {scene_category} scene like {}",
            leaf_name(scene),
        ),
        severity: Severity::Low,
        elements: vec![scene.to_string(), outfit.to_string()],
        suggestions: non_empty(suggestions),
    })
}

// ── Substring rules ──────────────────────────────────────────────────────────

fn check_gym_outfit(scene: Option<&str>, outfit: Option<&str>) -> Option<CoherenceWarning> {
    let (scene, outfit) = (scene?, outfit?);
    if !scene.contains(GYM_MARKER) {
        return None;
    }
    if GYM_OUTFIT_MARKERS.iter().any(|marker| outfit.contains(marker)) {
        return None;
    }

    Some(CoherenceWarning {
        kind: CoherenceWarningKind::GymOutfitMismatch,
        message: format!("Gym scenes need athletic wear; {outfit} will look out of place"),
        severity: Severity::High,
        elements: vec![scene.to_string(), outfit.to_string()],
        suggestions: Some(GYM_SUGGESTIONS.iter().map(|id| outfit_suggestion(id)).collect()),
    })
}

fn check_waterside_outfit(scene: Option<&str>, outfit: Option<&str>) -> Option<CoherenceWarning> {
    let (scene, outfit) = (scene?, outfit?);
    if !WATERSIDE_MARKERS.iter().any(|marker| scene.contains(marker)) {
        return None;
    }
    if !WATERSIDE_FORBIDDEN_MARKERS
        .iter()
        .any(|marker| outfit.contains(marker))
    {
        return None;
    }

    Some(CoherenceWarning {
        kind: CoherenceWarningKind::WatersideFormalMismatch,
        message: format!("{outfit} is too formal for a beach or pool scene"),
        severity: Severity::High,
        elements: vec![scene.to_string(), outfit.to_string()],
        suggestions: Some(
            WATERSIDE_SUGGESTIONS
                .iter()
                .map(|id| outfit_suggestion(id))
                .collect(),
        ),
    })
}

fn outfit_suggestion(id: &str) -> String {
    format!("try {id} outfit")
}

fn non_empty(suggestions: Vec<String>) -> Option<Vec<String>> {
    if suggestions.is_empty() {
        None
    } else {
        Some(suggestions)
    }
}
