use visage::core::coherence::CoherenceResult;
use visage::core::context::{ContextEnhancement, SceneSummary};
use visage::core::engine::AssembledPrompt;
use visage::core::quality::{PromptQualityScore, QuickRatingResult, format_score_display};
use visage::ui::style;

pub fn render_coherence(result: &CoherenceResult) -> String {
    let mut lines = Vec::new();
    if result.warnings.is_empty() {
        lines.push(style::success("✓ Selection is coherent"));
        return lines.join("\n");
    }

    let verdict = if result.valid {
        style::header(format!("{} warning(s), selection usable", result.warning_count))
    } else {
        style::header(format!("{} warning(s), selection invalid", result.warning_count))
    };
    lines.push(verdict);
    for warning in &result.warnings {
        lines.push(format!(
            "  {} {} {}",
            style::severity(warning.severity),
            warning.message,
            style::dim(format!("({})", warning.kind))
        ));
    }
    if !result.suggestions.is_empty() {
        lines.push(String::new());
        lines.push(style::header("Suggestions"));
        for suggestion in &result.suggestions {
            lines.push(format!("  {} {suggestion}", style::accent("•")));
        }
    }
    lines.join("\n")
}

pub fn render_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        return style::dim("(none)");
    }
    ids.iter()
        .map(|id| format!("  {}", style::value(id)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_enhancement(scene: &str, enhancement: &ContextEnhancement) -> String {
    if enhancement.is_empty() {
        return style::dim(format!("No context known for {scene}"));
    }
    let mut lines = vec![style::header(format!("Context for {scene}"))];
    lines.push(format!(
        "  prompt:   {}",
        enhancement.prompt_additions.join(", ")
    ));
    lines.push(format!(
        "  negative: {}",
        enhancement.negative_additions.join(", ")
    ));
    if let Some(lighting) = &enhancement.suggested_lighting {
        lines.push(format!("  lighting: {}", style::value(lighting)));
    }
    lines.join("\n")
}

pub fn render_scenes(scenes: &[SceneSummary]) -> String {
    scenes
        .iter()
        .map(|scene| {
            let time = scene
                .suggested_time
                .as_deref()
                .map(|t| style::dim(format!(" ({t})")))
                .unwrap_or_default();
            format!(
                "  {} {:<8} {}{time}",
                style::value(format!("{:<22}", scene.id)),
                scene.category.to_string(),
                scene.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_score(score: &PromptQualityScore) -> String {
    let report = format_score_display(score);
    let header = format!(
        "Prompt quality: {}/100 (grade {})",
        score.overall,
        style::grade(score.grade)
    );
    match report.split_once('\n') {
        Some((_, rest)) => format!("{header}\n{rest}"),
        None => header,
    }
}

pub fn render_rating(result: &QuickRatingResult) -> String {
    format!("{} ({}/100)", style::rating(result.rating), result.score)
}

pub fn render_assembled(out: &AssembledPrompt) -> String {
    let mut lines = vec![style::header("Prompt"), format!("  {}", out.prompt)];
    if let Some(negative) = &out.negative_prompt {
        lines.push(style::header("Negative prompt"));
        lines.push(format!("  {negative}"));
    }
    lines.push(String::new());
    lines.push(render_coherence(&out.coherence));
    lines.push(String::new());
    lines.push(render_score(&out.score));
    lines.join("\n")
}
