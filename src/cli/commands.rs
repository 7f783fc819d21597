use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use visage::core::coherence::SelectionInput;

/// `visage` - coherence checks, scene context and quality scoring for
/// character image prompts.
#[derive(Parser, Debug)]
#[command(name = "visage")]
#[command(author = "theonlyhennygod")]
#[command(version)]
#[command(about = "Validate, enrich and score character image prompts.", long_about = None)]
pub struct Cli {
    /// Print JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.visage/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a selection for combinations that look wrong together
    Validate {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List identifiers compatible with a given one
    Compatible {
        #[arg(value_enum)]
        axis: CompatibleAxis,

        /// Pose id (for expressions), expression id (for poses) or scene id (for outfits)
        id: String,
    },

    /// Show the prompt fragments a scene contributes
    Context {
        /// Scene identifier, e.g. indoor.gym
        scene: String,

        /// Append one activity suggestion
        #[arg(long)]
        activity: bool,

        /// Maximum atmosphere additions (default from config)
        #[arg(long, value_name = "N")]
        max_additions: Option<usize>,

        /// Skip atmosphere additions
        #[arg(long)]
        no_atmosphere: bool,

        /// Skip the lighting suggestion
        #[arg(long)]
        no_lighting: bool,

        /// Seed the activity choice for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List every scene with context knowledge
    Scenes,

    /// Score an assembled prompt
    Score {
        #[command(flatten)]
        args: ScoreArgs,
    },

    /// Coarse rating for free-text prompts
    Rate {
        /// Prompt text
        prompt: String,
    },

    /// Validate, enrich and score a selection in one pass
    Assemble {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Base prompt text
        #[arg(long)]
        prompt: String,

        /// Base negative prompt
        #[arg(long)]
        negative: Option<String>,

        /// Realism mode is on
        #[arg(long)]
        realism: bool,

        /// Seed the activity choice for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompatibleAxis {
    /// Expressions compatible with a pose
    Expressions,
    /// Poses compatible with an expression
    Poses,
    /// Outfits compatible with a scene
    Outfits,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    #[arg(long)]
    pub expression: Option<String>,
    #[arg(long)]
    pub pose: Option<String>,
    #[arg(long)]
    pub scene: Option<String>,
    #[arg(long)]
    pub outfit: Option<String>,
    #[arg(long)]
    pub lighting: Option<String>,
    /// Activity identifier (carried through, not checked)
    #[arg(long = "activity")]
    pub activity: Option<String>,
}

impl From<SelectionArgs> for SelectionInput {
    fn from(args: SelectionArgs) -> Self {
        Self {
            expression: args.expression,
            pose: args.pose,
            scene: args.scene,
            outfit: args.outfit,
            lighting: args.lighting,
            activity: args.activity,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScoreArgs {
    /// Read a JSON ScoringInput from this file ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["prompt", "negative"])]
    pub input: Option<PathBuf>,

    /// Prompt text
    #[arg(long)]
    pub prompt: Option<String>,

    /// Negative prompt text
    #[arg(long)]
    pub negative: Option<String>,

    #[arg(long)]
    pub realism: bool,

    /// Scene context enhancement was applied
    #[arg(long)]
    pub enhanced: bool,

    #[arg(long)]
    pub has_scene: bool,

    #[arg(long)]
    pub has_expression: bool,

    #[arg(long)]
    pub has_pose: bool,

    /// Number of coherence warnings for the selection
    #[arg(long, default_value_t = 0)]
    pub warnings: usize,
}
