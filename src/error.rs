//! Centralized error types for the game.
//!
//! All assets are bundled at build time, so any asset error indicates a
//! packaging defect. Loaders still return these errors to their immediate
//! caller; the startup path in `main` is the one place that turns them into
//! a process exit.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Sprite error: {0}")]
    Sprite(#[from] SpriteError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading a sprite sheet.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Malformed sprite sheet {name}: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Tag '{tag}' spans frames {from}..={to} but the sheet has {frames} frames")]
    TagOutOfRange {
        tag: String,
        from: usize,
        to: usize,
        frames: usize,
    },

    #[error("Tag not found in sheet: {0}")]
    TagNotFound(String),

    #[error("Failed to decode image {name}: {message}")]
    Decode { name: String, message: String },
}

/// Errors raised by the audio device and sound loading.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Failed to open audio device: {0}")]
    Open(String),

    #[error("Failed to decode sound {name}: {message}")]
    Decode { name: String, message: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
