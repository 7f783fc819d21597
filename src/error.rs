use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Errors surfaced by `visage`.
///
/// The engine operations themselves are total; failures only come from loading
/// configuration and from parsing caller input at the edges (CLI, JSON files).
#[derive(Debug, Error)]
pub enum VisageError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Caller input ────────────────────────────────────────────────────
    #[error("input: {0}")]
    Input(#[from] InputError),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Input errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VisageError>;
