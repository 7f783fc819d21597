use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::app::render;
use crate::cli::commands::{Cli, Commands, CompatibleAxis, ScoreArgs};
use visage::core::context::{DeterministicRng, EnhanceOptions, RandomSource};
use visage::core::engine::{AssembleRequest, PromptEngine};
use visage::core::quality::ScoringInput;
use visage::{Config, InputError};

/// Runs one CLI command against an engine built from `config`.
pub fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let engine = PromptEngine::from_config(config);
    let json = cli.json;

    match cli.command {
        Commands::Validate { selection } => {
            let result = engine.validate_coherence(&selection.into());
            emit(json, &result, || render::render_coherence(&result))
        }

        Commands::Compatible { axis, id } => {
            let ids = match axis {
                CompatibleAxis::Expressions => engine.get_compatible_expressions(&id),
                CompatibleAxis::Poses => engine.get_compatible_poses(&id),
                CompatibleAxis::Outfits => engine.get_compatible_outfits(&id),
            };
            debug!(?axis, id = %id, count = ids.len(), "compatibility query");
            emit(json, &ids, || render::render_ids(&ids))
        }

        Commands::Context {
            scene,
            activity,
            max_additions,
            no_atmosphere,
            no_lighting,
            seed,
        } => {
            let defaults = engine.enhance_options();
            let options = EnhanceOptions {
                include_atmosphere: defaults.include_atmosphere && !no_atmosphere,
                include_lighting: defaults.include_lighting && !no_lighting,
                include_activity: defaults.include_activity || activity,
                max_additions: max_additions.unwrap_or(defaults.max_additions),
            };
            let enhancement =
                engine.apply_context_enhancements(&scene, &options, random_source(seed).as_mut());
            emit(json, &enhancement, || {
                render::render_enhancement(&scene, &enhancement)
            })
        }

        Commands::Scenes => {
            let scenes = engine.list_scene_contexts();
            emit(json, &scenes, || render::render_scenes(&scenes))
        }

        Commands::Score { args } => {
            let input = scoring_input(args)?;
            let score = engine.score_prompt(&input);
            emit(json, &score, || render::render_score(&score))
        }

        Commands::Rate { prompt } => {
            if prompt.trim().is_empty() {
                return Err(InputError::EmptyPrompt.into());
            }
            let rating = engine.get_quick_rating(&prompt);
            emit(json, &rating, || render::render_rating(&rating))
        }

        Commands::Assemble {
            selection,
            prompt,
            negative,
            realism,
            seed,
        } => {
            let request = AssembleRequest {
                selection: selection.into(),
                prompt,
                negative_prompt: negative,
                has_realism: realism,
            };
            let assembled = engine.assemble(&request, random_source(seed).as_mut());
            emit(json, &assembled, || render::render_assembled(&assembled))
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce() -> String) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{out}");
    } else {
        println!("{}", human());
    }
    Ok(())
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(DeterministicRng::new(seed)),
        None => Box::new(rand::rng()),
    }
}

fn scoring_input(args: ScoreArgs) -> Result<ScoringInput> {
    if let Some(path) = &args.input {
        return read_scoring_input(path);
    }

    let Some(prompt) = args.prompt else {
        bail!("score needs --prompt or --input");
    };
    Ok(ScoringInput {
        prompt,
        negative_prompt: args.negative,
        has_realism: args.realism,
        has_context_enhancement: args.enhanced,
        has_scene: args.has_scene,
        has_expression: args.has_expression,
        has_pose: args.has_pose,
        coherence_warnings: args.warnings,
    })
}

fn read_scoring_input(path: &Path) -> Result<ScoringInput> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read scoring input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    let input: ScoringInput = serde_json::from_str(&raw).map_err(InputError::from)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_flags_build_input() {
        let input = scoring_input(ScoreArgs {
            prompt: Some("woman, detailed".into()),
            realism: true,
            warnings: 2,
            ..ScoreArgs::default()
        })
        .unwrap();
        assert_eq!(input.prompt, "woman, detailed");
        assert!(input.has_realism);
        assert_eq!(input.coherence_warnings, 2);
    }

    #[test]
    fn score_without_prompt_or_input_fails() {
        let err = scoring_input(ScoreArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--prompt or --input"));
    }

    #[test]
    fn score_input_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(
            &path,
            r#"{"prompt":"man, sharp focus","hasScene":true,"coherenceWarnings":1}"#,
        )
        .unwrap();

        let input = read_scoring_input(&path).unwrap();
        assert_eq!(input.prompt, "man, sharp focus");
        assert!(input.has_scene);
        assert_eq!(input.coherence_warnings, 1);
    }

    #[test]
    fn malformed_input_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, "{\"prompt\": 3}").unwrap();

        let err = read_scoring_input(&path).unwrap_err();
        assert!(err.downcast_ref::<InputError>().is_some());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = random_source(Some(7));
        let mut b = random_source(Some(7));
        assert_eq!(a.pick(100), b.pick(100));
    }
}
