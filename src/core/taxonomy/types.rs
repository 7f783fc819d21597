use serde::{Deserialize, Serialize};
use strum::Display;

// ExpressionCategory: coarse grouping of facial expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExpressionCategory {
    Joyful,
    Calm,
    Serious,
    Playful,
    Intense,
    Melancholic,
}

// PoseCategory: coarse grouping of body poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PoseCategory {
    Active,
    Relaxed,
    Professional,
    Dynamic,
    Intimate,
}

// SceneCategory: what kind of place a scene is, for outfit pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SceneCategory {
    Athletic,
    Waterside,
    Domestic,
    Urban,
    Professional,
    Formal,
    Nature,
    Nightlife,
}

// OutfitCategory: coarse grouping of outfits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutfitCategory {
    Athletic,
    Casual,
    Formal,
    Business,
    Swimwear,
    Loungewear,
    Outdoor,
}

/// A read-only mapping from dotted category identifiers to one semantic
/// category. Entry order is significant: suggestion scans and compatibility
/// listings walk the table front to back.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy<C: 'static> {
    prefix: &'static str,
    entries: &'static [(&'static str, C)],
}

impl<C: Copy + PartialEq + 'static> Taxonomy<C> {
    pub const fn new(prefix: &'static str, entries: &'static [(&'static str, C)]) -> Self {
        Self { prefix, entries }
    }

    /// Taxonomy name, also accepted as a leading `"<prefix>."` on identifiers.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn entries(&self) -> &'static [(&'static str, C)] {
        self.entries
    }

    /// Resolves an identifier to its semantic category.
    ///
    /// Tries the identifier verbatim, then with the taxonomy prefix removed,
    /// so `scene.indoor.gym` and `indoor.gym` resolve to the same entry.
    pub fn category_of(&self, id: &str) -> Option<C> {
        self.lookup(id).or_else(|| {
            id.strip_prefix(self.prefix)
                .and_then(|rest| rest.strip_prefix('.'))
                .and_then(|rest| self.lookup(rest))
        })
    }

    /// All identifiers whose category satisfies `accept`, in table order.
    pub fn ids_where(&self, mut accept: impl FnMut(C) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, category)| accept(*category))
            .map(|(id, _)| (*id).to_string())
            .collect()
    }

    fn lookup(&self, id: &str) -> Option<C> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, category)| *category)
    }
}

/// The portion of an identifier after its last `.` separator.
pub fn leaf_name(id: &str) -> &str {
    id.rsplit('.').next().unwrap_or(id)
}
