//! Embedded asset loading.
//!
//! All assets are bundled into the binary at build time. Loaders take the
//! asset set as a capability rather than touching it as a global, so tests
//! can substitute an in-memory set.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::AssetError;

/// Read-only access to a set of named assets.
pub trait AssetSource {
    /// Returns the raw bytes of the asset at `path`, relative to the asset
    /// root.
    fn bytes(&self, path: &str) -> Result<Cow<'static, [u8]>, AssetError>;
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Embedded;

/// The asset set compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
    fn bytes(&self, path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
        Embedded::get(path)
            .map(|file| file.data)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}
