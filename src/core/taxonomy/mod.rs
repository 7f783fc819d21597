// Taxonomy tables: static category membership and compatibility matrices.
// Read by every engine component, never mutated.

pub mod tables;
pub mod types;

pub use tables::{
    EXPRESSIONS, OUTFITS, POSES, SCENES, outfits_for_scene, poses_for_expression,
};
pub use types::*;
