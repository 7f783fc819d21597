pub mod coherence;
pub mod context;
pub mod engine;
pub mod quality;
pub mod taxonomy;
