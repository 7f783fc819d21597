// Scene knowledge base: per-scene prompt additions, things to avoid,
// lighting/time hints and activity ideas. Indoor and outdoor scenes are kept
// in separate tables; bare-name lookups check indoor first.

use super::types::{SceneProfile, SceneSetting};

pub static INDOOR_SCENES: &[SceneProfile] = &[
    SceneProfile {
        id: "indoor.gym",
        name: "Gym",
        setting: SceneSetting::Indoor,
        additions: &[
            "gym equipment in background",
            "rubber floor mats",
            "mirrored walls",
            "light sheen of sweat",
            "chalk dust in the air",
        ],
        avoid: &["formal wear", "high heels", "empty gym", "dirty equipment"],
        suggested_lighting: Some("bright overhead fluorescent lighting"),
        suggested_time: Some("morning"),
        activities: &[
            "lifting dumbbells",
            "stretching on a mat",
            "resting between sets",
            "drinking from a water bottle",
        ],
    },
    SceneProfile {
        id: "indoor.yogaStudio",
        name: "Yoga Studio",
        setting: SceneSetting::Indoor,
        additions: &[
            "wooden floor",
            "yoga mats laid out",
            "large windows with soft daylight",
            "potted plants",
        ],
        avoid: &["street shoes", "cluttered room", "harsh lighting"],
        suggested_lighting: Some("soft diffused daylight"),
        suggested_time: Some("early morning"),
        activities: &["holding a yoga pose", "meditating", "rolling out a mat"],
    },
    SceneProfile {
        id: "indoor.bedroom",
        name: "Bedroom",
        setting: SceneSetting::Indoor,
        additions: &[
            "unmade bed with linen sheets",
            "bedside lamp",
            "personal items on nightstand",
            "curtains partly drawn",
        ],
        avoid: &["hotel room look", "perfectly staged bed", "showroom furniture"],
        suggested_lighting: Some("warm lamp light"),
        suggested_time: Some("evening"),
        activities: &["reading in bed", "getting ready", "looking out the window"],
    },
    SceneProfile {
        id: "indoor.livingRoom",
        name: "Living Room",
        setting: SceneSetting::Indoor,
        additions: &[
            "comfortable sofa with throw pillows",
            "bookshelf in background",
            "coffee table with mugs",
            "rug on hardwood floor",
        ],
        avoid: &["catalog staging", "empty room", "showroom furniture"],
        suggested_lighting: Some("warm ambient lighting"),
        suggested_time: Some("afternoon"),
        activities: &["curled up with a book", "watching a movie", "sipping tea"],
    },
    SceneProfile {
        id: "indoor.kitchen",
        name: "Kitchen",
        setting: SceneSetting::Indoor,
        additions: &[
            "kitchen counter with ingredients",
            "pots on the stove",
            "tiled backsplash",
            "steam rising",
        ],
        avoid: &["spotless showroom kitchen", "floating utensils"],
        suggested_lighting: Some("natural window light"),
        suggested_time: Some("morning"),
        activities: &["chopping vegetables", "stirring a pot", "pouring coffee"],
    },
    SceneProfile {
        id: "indoor.office",
        name: "Office",
        setting: SceneSetting::Indoor,
        additions: &[
            "desk with laptop and papers",
            "office chair",
            "city view through window",
            "coffee cup on desk",
        ],
        avoid: &["empty desk", "stock photo look", "casual beachwear"],
        suggested_lighting: Some("cool office lighting"),
        suggested_time: Some("midday"),
        activities: &["typing on a laptop", "on a phone call", "reviewing documents"],
    },
    SceneProfile {
        id: "indoor.library",
        name: "Library",
        setting: SceneSetting::Indoor,
        additions: &[
            "tall bookshelves",
            "reading table with open books",
            "green banker's lamp",
            "quiet atmosphere",
        ],
        avoid: &["blurry book spines", "illegible floating text"],
        suggested_lighting: Some("warm reading lamp light"),
        suggested_time: Some("afternoon"),
        activities: &["browsing a shelf", "reading at a table", "taking notes"],
    },
    SceneProfile {
        id: "indoor.cafe",
        name: "Cafe",
        setting: SceneSetting::Indoor,
        additions: &[
            "coffee cup on small table",
            "espresso machine in background",
            "other patrons softly blurred",
            "chalkboard menu",
        ],
        avoid: &["empty cafe", "distorted cups", "duplicate patrons"],
        suggested_lighting: Some("warm pendant lighting"),
        suggested_time: Some("morning"),
        activities: &["sipping a latte", "working on a laptop", "chatting with a friend"],
    },
    SceneProfile {
        id: "indoor.ballroom",
        name: "Ballroom",
        setting: SceneSetting::Indoor,
        additions: &[
            "crystal chandeliers",
            "polished marble floor",
            "elegant guests in background",
            "gilded details",
        ],
        avoid: &["casual clothing", "sneakers", "empty hall"],
        suggested_lighting: Some("warm chandelier glow"),
        suggested_time: Some("night"),
        activities: &["dancing a waltz", "holding a champagne flute", "descending a staircase"],
    },
    SceneProfile {
        id: "indoor.nightclub",
        name: "Nightclub",
        setting: SceneSetting::Indoor,
        additions: &[
            "colored stage lights",
            "crowd on dance floor",
            "haze in the air",
            "bar in background",
        ],
        avoid: &["daylight", "empty dance floor", "overexposed faces"],
        suggested_lighting: Some("neon and strobe lighting"),
        suggested_time: Some("late night"),
        activities: &["dancing", "ordering at the bar", "laughing with friends"],
    },
];

pub static OUTDOOR_SCENES: &[SceneProfile] = &[
    SceneProfile {
        id: "outdoor.beach",
        name: "Beach",
        setting: SceneSetting::Outdoor,
        additions: &[
            "sand texture",
            "ocean waves in background",
            "sea breeze in hair",
            "footprints in the sand",
        ],
        avoid: &["formal wear", "snow", "indoor lighting", "dry hair"],
        suggested_lighting: Some("golden hour sunlight"),
        suggested_time: Some("sunset"),
        activities: &["walking along the shoreline", "building a sandcastle", "lying on a towel"],
    },
    SceneProfile {
        id: "outdoor.pool",
        name: "Pool",
        setting: SceneSetting::Outdoor,
        additions: &[
            "turquoise pool water",
            "water reflections",
            "lounge chairs",
            "wet skin with water droplets",
        ],
        avoid: &["formal wear", "murky water", "dry hair after swimming"],
        suggested_lighting: Some("bright midday sun"),
        suggested_time: Some("afternoon"),
        activities: &["sitting at the pool edge", "floating on an inflatable", "sunbathing"],
    },
    SceneProfile {
        id: "outdoor.park",
        name: "Park",
        setting: SceneSetting::Outdoor,
        additions: &[
            "green grass",
            "trees with dappled shade",
            "park bench",
            "people walking in background",
        ],
        avoid: &["oversaturated grass", "plastic looking leaves"],
        suggested_lighting: Some("dappled natural sunlight"),
        suggested_time: Some("afternoon"),
        activities: &["having a picnic", "walking a dog", "reading on a bench"],
    },
    SceneProfile {
        id: "outdoor.forest",
        name: "Forest",
        setting: SceneSetting::Outdoor,
        additions: &[
            "tall trees",
            "moss covered ground",
            "sun rays through canopy",
            "fallen leaves",
        ],
        avoid: &["urban elements", "high heels", "clean studio lighting"],
        suggested_lighting: Some("soft filtered light through trees"),
        suggested_time: Some("morning"),
        activities: &["hiking a trail", "leaning against a tree", "collecting leaves"],
    },
    SceneProfile {
        id: "outdoor.mountain",
        name: "Mountain",
        setting: SceneSetting::Outdoor,
        additions: &[
            "mountain range in background",
            "rocky trail",
            "wind swept hair",
            "distant clouds",
        ],
        avoid: &["formal wear", "high heels", "flat horizon"],
        suggested_lighting: Some("crisp clear daylight"),
        suggested_time: Some("morning"),
        activities: &["reaching the summit", "resting on a rock", "taking in the view"],
    },
    SceneProfile {
        id: "outdoor.garden",
        name: "Garden",
        setting: SceneSetting::Outdoor,
        additions: &[
            "blooming flowers",
            "garden path",
            "trellis with climbing roses",
            "soft bokeh foliage",
        ],
        avoid: &["plastic looking flowers", "oversaturated colors"],
        suggested_lighting: Some("soft morning light"),
        suggested_time: Some("morning"),
        activities: &["watering plants", "smelling a flower", "strolling the path"],
    },
    SceneProfile {
        id: "outdoor.cityStreet",
        name: "City Street",
        setting: SceneSetting::Outdoor,
        additions: &[
            "busy sidewalk",
            "storefronts",
            "traffic softly blurred",
            "street signs",
        ],
        avoid: &["empty street", "garbled signage text", "duplicated pedestrians"],
        suggested_lighting: Some("overcast city daylight"),
        suggested_time: Some("afternoon"),
        activities: &["crossing the street", "window shopping", "hailing a taxi"],
    },
    SceneProfile {
        id: "outdoor.rooftop",
        name: "Rooftop",
        setting: SceneSetting::Outdoor,
        additions: &[
            "city skyline",
            "string lights",
            "rooftop railing",
            "lounge seating",
        ],
        avoid: &["daytime glare", "warped skyline", "floating buildings"],
        suggested_lighting: Some("warm string lights against dusk sky"),
        suggested_time: Some("dusk"),
        activities: &["toasting with a drink", "leaning on the railing", "watching the skyline"],
    },
];

/// Every scene, indoor table first.
pub fn all_scenes() -> impl Iterator<Item = &'static SceneProfile> {
    INDOOR_SCENES.iter().chain(OUTDOOR_SCENES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::taxonomy::SCENES;

    #[test]
    fn scene_settings_match_their_table() {
        assert!(INDOOR_SCENES.iter().all(|s| s.setting == SceneSetting::Indoor));
        assert!(OUTDOOR_SCENES.iter().all(|s| s.setting == SceneSetting::Outdoor));
    }

    #[test]
    fn every_profile_is_in_the_scene_taxonomy() {
        for scene in all_scenes() {
            assert!(
                SCENES.category_of(scene.id).is_some(),
                "{} missing from scene taxonomy",
                scene.id
            );
        }
    }

    #[test]
    fn every_taxonomy_scene_has_a_profile() {
        for (id, _) in SCENES.entries() {
            assert!(all_scenes().any(|s| s.id == *id), "{id} has no profile");
        }
    }

    #[test]
    fn profiles_carry_additions_and_avoid_lists() {
        for scene in all_scenes() {
            assert!(!scene.additions.is_empty(), "{} has no additions", scene.id);
            assert!(!scene.avoid.is_empty(), "{} has no avoid list", scene.id);
        }
    }
}
