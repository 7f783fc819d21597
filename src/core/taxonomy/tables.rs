//! Static taxonomy tables and compatibility matrices.
//!
//! Identifiers are stored without their taxonomy prefix; `Taxonomy::category_of`
//! accepts both forms. The matrices are directional lookups and are read one
//! way only.

use super::types::{
    ExpressionCategory, OutfitCategory, PoseCategory, SceneCategory, Taxonomy,
};

// ── Expressions ──────────────────────────────────────────────────────────────

pub static EXPRESSIONS: Taxonomy<ExpressionCategory> = Taxonomy::new(
    "expression",
    &[
        ("happy.smiling", ExpressionCategory::Joyful),
        ("happy.laughing", ExpressionCategory::Joyful),
        ("happy.grinning", ExpressionCategory::Joyful),
        ("calm.serene", ExpressionCategory::Calm),
        ("calm.neutral", ExpressionCategory::Calm),
        ("calm.dreamy", ExpressionCategory::Calm),
        ("serious.focused", ExpressionCategory::Serious),
        ("serious.confident", ExpressionCategory::Serious),
        ("serious.determined", ExpressionCategory::Serious),
        ("playful.winking", ExpressionCategory::Playful),
        ("playful.smirking", ExpressionCategory::Playful),
        ("playful.cheeky", ExpressionCategory::Playful),
        ("intense.fierce", ExpressionCategory::Intense),
        ("intense.smoldering", ExpressionCategory::Intense),
        ("sad.pensive", ExpressionCategory::Melancholic),
        ("sad.melancholic", ExpressionCategory::Melancholic),
    ],
);

// ── Poses ────────────────────────────────────────────────────────────────────

pub static POSES: Taxonomy<PoseCategory> = Taxonomy::new(
    "pose",
    &[
        ("active.running", PoseCategory::Active),
        ("active.stretching", PoseCategory::Active),
        ("active.lifting", PoseCategory::Active),
        ("relaxed.sitting", PoseCategory::Relaxed),
        ("relaxed.lounging", PoseCategory::Relaxed),
        ("relaxed.leaning", PoseCategory::Relaxed),
        ("professional.armsCrossed", PoseCategory::Professional),
        ("professional.standingTall", PoseCategory::Professional),
        ("professional.handsOnDesk", PoseCategory::Professional),
        ("dynamic.jumping", PoseCategory::Dynamic),
        ("dynamic.dancing", PoseCategory::Dynamic),
        ("dynamic.spinning", PoseCategory::Dynamic),
        ("intimate.lyingDown", PoseCategory::Intimate),
        ("intimate.overShoulder", PoseCategory::Intimate),
        ("intimate.closeUp", PoseCategory::Intimate),
    ],
);

// ── Scenes ───────────────────────────────────────────────────────────────────

pub static SCENES: Taxonomy<SceneCategory> = Taxonomy::new(
    "scene",
    &[
        ("indoor.gym", SceneCategory::Athletic),
        ("indoor.yogaStudio", SceneCategory::Athletic),
        ("indoor.bedroom", SceneCategory::Domestic),
        ("indoor.livingRoom", SceneCategory::Domestic),
        ("indoor.kitchen", SceneCategory::Domestic),
        ("indoor.office", SceneCategory::Professional),
        ("indoor.library", SceneCategory::Professional),
        ("indoor.cafe", SceneCategory::Urban),
        ("indoor.ballroom", SceneCategory::Formal),
        ("indoor.nightclub", SceneCategory::Nightlife),
        ("outdoor.beach", SceneCategory::Waterside),
        ("outdoor.pool", SceneCategory::Waterside),
        ("outdoor.park", SceneCategory::Nature),
        ("outdoor.forest", SceneCategory::Nature),
        ("outdoor.mountain", SceneCategory::Nature),
        ("outdoor.garden", SceneCategory::Nature),
        ("outdoor.cityStreet", SceneCategory::Urban),
        ("outdoor.rooftop", SceneCategory::Nightlife),
    ],
);

// ── Outfits ──────────────────────────────────────────────────────────────────

pub static OUTFITS: Taxonomy<OutfitCategory> = Taxonomy::new(
    "outfit",
    &[
        ("athletic.leggings", OutfitCategory::Athletic),
        ("athletic.tracksuit", OutfitCategory::Athletic),
        ("athletic.yogaSet", OutfitCategory::Athletic),
        ("athletic.swimwear", OutfitCategory::Swimwear),
        ("casual.jeansTee", OutfitCategory::Casual),
        ("casual.sundress", OutfitCategory::Casual),
        ("casual.hoodie", OutfitCategory::Casual),
        ("casual.sweater", OutfitCategory::Casual),
        ("formal.eveningGown", OutfitCategory::Formal),
        ("formal.cocktailDress", OutfitCategory::Formal),
        ("formal.tuxedo", OutfitCategory::Formal),
        ("business.suit", OutfitCategory::Business),
        ("business.blazer", OutfitCategory::Business),
        ("business.pencilSkirt", OutfitCategory::Business),
        ("lounge.pajamas", OutfitCategory::Loungewear),
        ("lounge.robe", OutfitCategory::Loungewear),
        ("outdoor.hikingGear", OutfitCategory::Outdoor),
        ("outdoor.rainJacket", OutfitCategory::Outdoor),
    ],
);

// ── Compatibility matrices ───────────────────────────────────────────────────

/// Pose categories an expression category may be paired with.
pub fn poses_for_expression(category: ExpressionCategory) -> &'static [PoseCategory] {
    use PoseCategory::{Active, Dynamic, Intimate, Professional, Relaxed};
    match category {
        ExpressionCategory::Joyful => &[Active, Relaxed, Dynamic, Intimate],
        ExpressionCategory::Calm => &[Relaxed, Professional, Intimate],
        ExpressionCategory::Serious => &[Professional, Active],
        ExpressionCategory::Playful => &[Dynamic, Relaxed, Intimate, Active],
        ExpressionCategory::Intense => &[Active, Dynamic, Professional, Intimate],
        ExpressionCategory::Melancholic => &[Relaxed, Intimate],
    }
}

/// Outfit categories a scene category may be paired with.
pub fn outfits_for_scene(category: SceneCategory) -> &'static [OutfitCategory] {
    use OutfitCategory::{Athletic, Business, Casual, Formal, Loungewear, Outdoor, Swimwear};
    match category {
        SceneCategory::Athletic => &[Athletic],
        SceneCategory::Waterside => &[Swimwear, Casual],
        SceneCategory::Domestic => &[Casual, Loungewear],
        SceneCategory::Urban => &[Casual, Business],
        SceneCategory::Professional => &[Business, Formal],
        SceneCategory::Formal => &[Formal],
        SceneCategory::Nature => &[Casual, Outdoor, Athletic],
        SceneCategory::Nightlife => &[Formal, Casual],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(ids: impl Iterator<Item = &'static str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate identifier {id}");
        }
    }

    #[test]
    fn identifiers_are_unique_within_each_taxonomy() {
        assert_unique(EXPRESSIONS.entries().iter().map(|(id, _)| *id));
        assert_unique(POSES.entries().iter().map(|(id, _)| *id));
        assert_unique(SCENES.entries().iter().map(|(id, _)| *id));
        assert_unique(OUTFITS.entries().iter().map(|(id, _)| *id));
    }

    #[test]
    fn every_expression_category_permits_some_mapped_pose() {
        for (_, category) in EXPRESSIONS.entries() {
            let allowed = poses_for_expression(*category);
            assert!(
                POSES.entries().iter().any(|(_, pose)| allowed.contains(pose)),
                "{category} has no reachable pose"
            );
        }
    }

    #[test]
    fn every_scene_category_permits_some_mapped_outfit() {
        for (_, category) in SCENES.entries() {
            let allowed = outfits_for_scene(*category);
            assert!(
                OUTFITS.entries().iter().any(|(_, outfit)| allowed.contains(outfit)),
                "{category} has no reachable outfit"
            );
        }
    }

    #[test]
    fn waterside_rejects_formal_outfits() {
        assert!(!outfits_for_scene(SceneCategory::Waterside).contains(&OutfitCategory::Formal));
    }

    #[test]
    fn prefixed_and_bare_scene_ids_agree() {
        assert_eq!(
            SCENES.category_of("scene.indoor.gym"),
            SCENES.category_of("indoor.gym")
        );
    }
}
