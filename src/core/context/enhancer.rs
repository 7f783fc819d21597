use crate::core::taxonomy::leaf_name;

use super::rng::RandomSource;
use super::scenes::{INDOOR_SCENES, OUTDOOR_SCENES, all_scenes};
use super::types::{ContextEnhancement, EnhanceOptions, SceneContext, SceneProfile, SceneSummary};

/// Scene-aware prompt enrichment backed by the static knowledge base.
pub struct ContextEnhancer;

impl ContextEnhancer {
    pub fn get_context(scene_id: &str) -> Option<SceneContext> {
        find_profile(scene_id).map(SceneContext::from)
    }

    /// Prompt and negative-prompt fragments for a scene.
    ///
    /// Unknown scenes yield an empty enhancement. `rng` is consulted only when
    /// an activity is requested and the scene has activity suggestions.
    ///
    /// The activity is appended after atmosphere additions are truncated to
    /// `max_additions`, so `prompt_additions` may hold `max_additions + 1`
    /// entries when `include_activity` is set.
    pub fn enhance<R: RandomSource + ?Sized>(
        scene_id: &str,
        options: &EnhanceOptions,
        rng: &mut R,
    ) -> ContextEnhancement {
        let Some(profile) = find_profile(scene_id) else {
            tracing::debug!(scene_id, "context: no knowledge-base entry");
            return ContextEnhancement::default();
        };

        let mut prompt_additions: Vec<String> = if options.include_atmosphere {
            profile
                .additions
                .iter()
                .take(options.max_additions)
                .map(|s| (*s).to_string())
                .collect()
        } else {
            Vec::new()
        };

        if options.include_activity && !profile.activities.is_empty() {
            let index = rng.pick(profile.activities.len());
            if let Some(activity) = profile.activities.get(index) {
                prompt_additions.push((*activity).to_string());
            }
        }

        ContextEnhancement {
            prompt_additions,
            negative_additions: profile.avoid.iter().map(|s| (*s).to_string()).collect(),
            suggested_lighting: if options.include_lighting {
                profile.suggested_lighting.map(str::to_string)
            } else {
                None
            },
        }
    }

    pub fn list_contexts() -> Vec<SceneSummary> {
        all_scenes()
            .map(|profile| SceneSummary {
                id: profile.id.to_string(),
                name: profile.name.to_string(),
                category: profile.setting,
                suggested_time: profile.suggested_time.map(str::to_string),
            })
            .collect()
    }
}

/// Exact identifier first; otherwise the bare final segment under the
/// indoor table, then the outdoor table.
fn find_profile(scene_id: &str) -> Option<&'static SceneProfile> {
    if let Some(profile) = all_scenes().find(|p| p.id == scene_id) {
        return Some(profile);
    }

    let bare = leaf_name(scene_id);
    let indoor = format!("indoor.{bare}");
    let outdoor = format!("outdoor.{bare}");
    INDOOR_SCENES
        .iter()
        .find(|p| p.id == indoor)
        .or_else(|| OUTDOOR_SCENES.iter().find(|p| p.id == outdoor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::rng::{DeterministicRng, FixedPick};

    // -- get_context -------------------------------------------------------

    #[test]
    fn exact_id_lookup() {
        let ctx = ContextEnhancer::get_context("indoor.gym").unwrap();
        assert_eq!(ctx.scene_id, "indoor.gym");
        assert_eq!(ctx.name, "Gym");
    }

    #[test]
    fn prefixed_id_falls_back_to_bare_name() {
        let ctx = ContextEnhancer::get_context("scene.outdoor.beach").unwrap();
        assert_eq!(ctx.scene_id, "outdoor.beach");
    }

    #[test]
    fn bare_name_lookup() {
        let ctx = ContextEnhancer::get_context("library").unwrap();
        assert_eq!(ctx.scene_id, "indoor.library");
    }

    #[test]
    fn bare_name_under_wrong_setting_still_resolves() {
        let ctx = ContextEnhancer::get_context("indoor.beach").unwrap();
        assert_eq!(ctx.scene_id, "outdoor.beach");
    }

    #[test]
    fn unknown_scene_is_none() {
        assert!(ContextEnhancer::get_context("nonexistent.scene").is_none());
        assert!(ContextEnhancer::get_context("").is_none());
    }

    // -- enhance -----------------------------------------------------------

    #[test]
    fn additions_truncated_to_max() {
        let options = EnhanceOptions::default();
        let out = ContextEnhancer::enhance("indoor.gym", &options, &mut FixedPick(0));
        assert_eq!(out.prompt_additions.len(), 3);
        assert_eq!(out.prompt_additions[0], "gym equipment in background");
    }

    #[test]
    fn negative_additions_never_truncated() {
        let options = EnhanceOptions {
            max_additions: 1,
            ..EnhanceOptions::default()
        };
        let out = ContextEnhancer::enhance("indoor.gym", &options, &mut FixedPick(0));
        assert_eq!(out.prompt_additions.len(), 1);
        assert_eq!(out.negative_additions.len(), 4);
    }

    #[test]
    fn atmosphere_off_leaves_only_negatives() {
        let options = EnhanceOptions {
            include_atmosphere: false,
            ..EnhanceOptions::default()
        };
        let out = ContextEnhancer::enhance("outdoor.park", &options, &mut FixedPick(0));
        assert!(out.prompt_additions.is_empty());
        assert!(!out.negative_additions.is_empty());
    }

    #[test]
    fn activity_appended_after_additions() {
        let options = EnhanceOptions {
            include_activity: true,
            ..EnhanceOptions::default()
        };
        let out = ContextEnhancer::enhance("indoor.gym", &options, &mut FixedPick(2));
        assert_eq!(out.prompt_additions.len(), 4);
        assert_eq!(out.prompt_additions[3], "resting between sets");
    }

    #[test]
    fn activity_not_added_unless_requested() {
        let options = EnhanceOptions::default();
        let out = ContextEnhancer::enhance("indoor.gym", &options, &mut FixedPick(0));
        let ctx = ContextEnhancer::get_context("indoor.gym").unwrap();
        let activities = ctx.activity_suggestions.unwrap();
        assert!(
            out.prompt_additions
                .iter()
                .all(|addition| !activities.contains(addition))
        );
    }

    #[test]
    fn seeded_activity_choice_is_reproducible() {
        let options = EnhanceOptions {
            include_activity: true,
            ..EnhanceOptions::default()
        };
        let first =
            ContextEnhancer::enhance("outdoor.beach", &options, &mut DeterministicRng::new(7));
        let second =
            ContextEnhancer::enhance("outdoor.beach", &options, &mut DeterministicRng::new(7));
        assert_eq!(first, second);
    }

    #[test]
    fn lighting_surfaced_only_when_requested() {
        let on = ContextEnhancer::enhance("outdoor.beach", &EnhanceOptions::default(), &mut FixedPick(0));
        assert_eq!(on.suggested_lighting.as_deref(), Some("golden hour sunlight"));

        let options = EnhanceOptions {
            include_lighting: false,
            ..EnhanceOptions::default()
        };
        let off = ContextEnhancer::enhance("outdoor.beach", &options, &mut FixedPick(0));
        assert!(off.suggested_lighting.is_none());
    }

    #[test]
    fn unknown_scene_yields_empty_enhancement() {
        let options = EnhanceOptions {
            include_activity: true,
            ..EnhanceOptions::default()
        };
        let out = ContextEnhancer::enhance("nonexistent.scene", &options, &mut FixedPick(0));
        assert!(out.is_empty());
        assert!(out.suggested_lighting.is_none());
    }

    // -- list_contexts -----------------------------------------------------

    #[test]
    fn listing_covers_every_scene_indoor_first() {
        let list = ContextEnhancer::list_contexts();
        assert_eq!(list.len(), INDOOR_SCENES.len() + OUTDOOR_SCENES.len());
        assert_eq!(list[0].id, "indoor.gym");
        assert!(list.iter().any(|s| s.id == "outdoor.rooftop"));
    }
}
