// Context enhancement: scene-appropriate prompt and negative-prompt fragments.

pub mod enhancer;
pub mod rng;
pub mod scenes;
pub mod types;

pub use enhancer::ContextEnhancer;
pub use rng::{DeterministicRng, FixedPick, RandomSource};
pub use types::*;
