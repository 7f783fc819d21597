//! Keyword sets and text patterns used by the quality scorer.
//!
//! All keyword matching is done against a lowercased prompt.

use regex::Regex;
use std::sync::LazyLock;

pub const QUALITY_KEYWORDS: &[&str] = &[
    "detailed",
    "8k",
    "4k",
    "masterpiece",
    "high quality",
    "best quality",
    "sharp focus",
    "high resolution",
    "hdr",
    "professional photography",
];

pub const REALISM_KEYWORDS: &[&str] = &[
    "candid",
    "skin texture",
    "authentic",
    "natural skin",
    "film grain",
    "raw photo",
    "natural lighting",
    "pores",
    "imperfections",
    "unretouched",
    "documentary",
];

pub const AI_ARTIFACT_KEYWORDS: &[&str] =
    &["perfect", "flawless", "airbrushed", "porcelain", "smooth skin"];

pub const ANTI_AI_NEGATIVE_TERMS: &[&str] = &["plastic", "airbrushed", "waxy", "uncanny"];

pub const LEAD_IN_PHRASES: &[&str] = &["a ", "photo of", "portrait of", "close-up"];

pub const CONFLICTING_PAIRS: &[(&str, &str)] = &[
    ("bright", "dark"),
    ("indoor", "outdoor"),
    ("day", "night"),
    ("smiling", "frowning"),
    ("happy", "sad"),
    ("relaxed", "tense"),
];

static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{1,3}(?:-year-old|\s+year\s+old)\b").expect("static age pattern")
});

static LEADING_AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,3}(?:-year-old|\s+year\s+old)\b").expect("static age pattern")
});

pub fn has_age(text: &str) -> bool {
    AGE_PATTERN.is_match(text)
}

pub fn starts_with_age(text: &str) -> bool {
    LEADING_AGE_PATTERN.is_match(text.trim_start())
}

/// How many entries of `keywords` occur in `lowered` (each counted once).
pub fn count_present(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(*k)).count()
}

pub fn any_present(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// First antonym pair whose both terms occur in `lowered`.
pub fn first_conflict(lowered: &str) -> Option<(&'static str, &'static str)> {
    CONFLICTING_PAIRS
        .iter()
        .copied()
        .find(|(left, right)| lowered.contains(left) && lowered.contains(right))
}
