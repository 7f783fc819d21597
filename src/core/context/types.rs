use serde::{Deserialize, Serialize};
use strum::Display;

// SceneSetting: which knowledge-base table a scene lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SceneSetting {
    Indoor,
    Outdoor,
}

/// Static knowledge-base record for one scene.
#[derive(Debug)]
pub struct SceneProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub setting: SceneSetting,
    pub additions: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub suggested_lighting: Option<&'static str>,
    pub suggested_time: Option<&'static str>,
    pub activities: &'static [&'static str],
}

// SceneContext: owned copy of a scene's knowledge-base record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneContext {
    pub scene_id: String,
    pub name: String,
    pub additions: Vec<String>,
    pub avoid: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_lighting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_suggestions: Option<Vec<String>>,
}

impl From<&SceneProfile> for SceneContext {
    fn from(profile: &SceneProfile) -> Self {
        Self {
            scene_id: profile.id.to_string(),
            name: profile.name.to_string(),
            additions: owned(profile.additions),
            avoid: owned(profile.avoid),
            suggested_lighting: profile.suggested_lighting.map(str::to_string),
            suggested_time: profile.suggested_time.map(str::to_string),
            activity_suggestions: if profile.activities.is_empty() {
                None
            } else {
                Some(owned(profile.activities))
            },
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// EnhanceOptions: what `enhance` should contribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceOptions {
    #[serde(default = "default_true")]
    pub include_atmosphere: bool,
    #[serde(default = "default_true")]
    pub include_lighting: bool,
    #[serde(default)]
    pub include_activity: bool,
    #[serde(default = "default_max_additions")]
    pub max_additions: usize,
}

pub(crate) const DEFAULT_MAX_ADDITIONS: usize = 3;

fn default_true() -> bool {
    true
}
fn default_max_additions() -> usize {
    DEFAULT_MAX_ADDITIONS
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            include_atmosphere: true,
            include_lighting: true,
            include_activity: false,
            max_additions: DEFAULT_MAX_ADDITIONS,
        }
    }
}

// ContextEnhancement: prompt fragments produced for a scene
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextEnhancement {
    pub prompt_additions: Vec<String>,
    pub negative_additions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_lighting: Option<String>,
}

impl ContextEnhancement {
    pub fn is_empty(&self) -> bool {
        self.prompt_additions.is_empty() && self.negative_additions.is_empty()
    }
}

// SceneSummary: listing entry for UI population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSummary {
    pub id: String,
    pub name: String,
    pub category: SceneSetting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_time: Option<String>,
}
