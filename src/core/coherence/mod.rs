// Coherence validation: incompatible expression/pose and scene/outfit pairings.

pub mod types;
pub mod validator;

pub use types::*;
pub use validator::CoherenceValidator;
