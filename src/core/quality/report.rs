use std::fmt::Write as _;

use super::types::PromptQualityScore;

/// Renders a score as a plain-text, multi-line report.
pub fn format_score_display(score: &PromptQualityScore) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Prompt quality: {}/100 (grade {})",
        score.overall, score.grade
    );

    out.push_str("\nBreakdown:\n");
    for (label, points, max) in score.breakdown.rows() {
        let _ = writeln!(out, "  {label:<20} {points:>2}/{max}");
    }

    if !score.strengths.is_empty() {
        out.push_str("\nStrengths:\n");
        for strength in &score.strengths {
            let _ = writeln!(out, "  + {strength}");
        }
    }

    if !score.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for (index, suggestion) in score.suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {suggestion}", index + 1);
        }
    }

    out
}
