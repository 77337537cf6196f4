//! Sprite sheet loading.
//!
//! A sprite sheet is a pair of co-located assets under `sprites/`: a JSON
//! document describing frames and tagged frame ranges (the format Aseprite
//! exports) and the PNG image the frames index into. The image is decoded
//! once and owned by the resulting [`SpriteSheet`]. There is no caching;
//! loading the same name twice decodes twice.

use std::borrow::Cow;

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Texture, TextureCreator};
use serde::Deserialize;
use tracing::debug;

use crate::asset::AssetSource;
use crate::error::SpriteError;

/// Position and size of one frame within the sheet image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FramePosition {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl FramePosition {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// A single frame of an animation, a sub-image of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Frame {
    /// Display time, in milliseconds.
    pub duration: u32,
    #[serde(rename = "frame")]
    pub position: FramePosition,
}

/// Playback direction of a tagged frame range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagDirection {
    Forward,
    Reverse,
    Pingpong,
}

/// A named sub-range of the frame sequence, e.g. the fall or chute animation.
///
/// Invariant, checked at load: `from <= to < frames.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameTag {
    pub name: String,
    pub from: usize,
    pub to: usize,
    pub direction: TagDirection,
}

impl FrameTag {
    /// Number of frames the tag spans.
    pub fn span(&self) -> usize {
        self.to - self.from + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetMeta {
    /// Name of the image file the frames index into, as recorded by the
    /// exporter.
    #[serde(rename = "image")]
    pub image_name: String,
    #[serde(rename = "frameTags", default)]
    pub frame_tags: Vec<FrameTag>,
}

/// The parsed sheet document: everything except the decoded image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetData {
    pub frames: Vec<Frame>,
    pub meta: SheetMeta,
}

impl SheetData {
    /// Parses a sheet document and validates every tag range against the
    /// frame list.
    pub fn parse(name: &str, bytes: &[u8]) -> Result<Self, SpriteError> {
        let data: SheetData = serde_json::from_slice(bytes).map_err(|source| SpriteError::Malformed {
            name: name.to_string(),
            source,
        })?;

        for tag in &data.meta.frame_tags {
            if tag.from > tag.to || tag.to >= data.frames.len() {
                return Err(SpriteError::TagOutOfRange {
                    tag: tag.name.clone(),
                    from: tag.from,
                    to: tag.to,
                    frames: data.frames.len(),
                });
            }
        }

        Ok(data)
    }
}

/// A sprite sheet: frame metadata plus the decoded texture it indexes into.
///
/// The texture is exclusively owned by the sheet for the lifetime of the
/// process.
pub struct SpriteSheet {
    pub frames: Vec<Frame>,
    pub image_name: String,
    pub frame_tags: Vec<FrameTag>,
    pub texture: Texture,
}

impl SpriteSheet {
    /// Looks up a tag by name.
    pub fn tag(&self, name: &str) -> Option<&FrameTag> {
        self.frame_tags.iter().find(|tag| tag.name == name)
    }
}

/// Fetches and validates a sheet document together with its paired image
/// bytes. This is the decode-free half of [`load_sprite`].
pub fn fetch_sprite(assets: &dyn AssetSource, name: &str) -> Result<(SheetData, Cow<'static, [u8]>), SpriteError> {
    let path = format!("sprites/{name}.json");
    debug!(%path, "Loading sprite sheet");

    let bytes = assets.bytes(&path)?;
    let data = SheetData::parse(name, &bytes)?;
    let image = assets.bytes(&format!("sprites/{name}.png"))?;

    Ok((data, image))
}

/// Loads the `sprites/<name>.json` + `sprites/<name>.png` pair into a sheet.
pub fn load_sprite<C>(
    assets: &dyn AssetSource,
    texture_creator: &TextureCreator<C>,
    name: &str,
) -> Result<SpriteSheet, SpriteError> {
    let (data, image) = fetch_sprite(assets, name)?;
    let texture = decode_image(texture_creator, name, &image)?;

    Ok(SpriteSheet {
        frames: data.frames,
        image_name: data.meta.image_name,
        frame_tags: data.meta.frame_tags,
        texture,
    })
}

/// Decodes a bundled PNG into a texture.
pub fn load_image<C>(
    assets: &dyn AssetSource,
    texture_creator: &TextureCreator<C>,
    path: &str,
) -> Result<Texture, SpriteError> {
    let bytes = assets.bytes(path)?;
    decode_image(texture_creator, path, &bytes)
}

fn decode_image<C>(texture_creator: &TextureCreator<C>, name: &str, bytes: &[u8]) -> Result<Texture, SpriteError> {
    debug!(name, "Decoding image");

    texture_creator.load_texture_bytes(bytes).map_err(|message| SpriteError::Decode {
        name: name.to_string(),
        message,
    })
}

/// Tick-driven animation over one tagged frame range.
///
/// Honors the tag's playback direction; each frame is held for its own
/// duration.
#[derive(Debug, Clone)]
pub struct TagAnimation {
    from: usize,
    to: usize,
    direction: TagDirection,
    /// Offset of the current frame within the tag span.
    cursor: usize,
    /// Travel direction of the ping-pong bounce.
    bounce_forward: bool,
    time_bank: f32,
}

impl TagAnimation {
    pub fn new(tag: &FrameTag) -> Self {
        Self {
            from: tag.from,
            to: tag.to,
            direction: tag.direction,
            cursor: 0,
            bounce_forward: true,
            time_bank: 0.0,
        }
    }

    /// The absolute index of the frame currently displayed.
    pub fn frame_index(&self) -> usize {
        match self.direction {
            TagDirection::Forward | TagDirection::Pingpong => self.from + self.cursor,
            TagDirection::Reverse => self.to - self.cursor,
        }
    }

    /// Advances the animation by `dt_ms` milliseconds of display time.
    pub fn tick(&mut self, frames: &[Frame], dt_ms: f32) {
        self.time_bank += dt_ms;
        loop {
            let duration = frames[self.frame_index()].duration as f32;
            if duration <= 0.0 || self.time_bank < duration {
                break;
            }
            self.time_bank -= duration;
            self.step();
        }
    }

    fn step(&mut self) {
        let span = self.to - self.from + 1;
        match self.direction {
            TagDirection::Forward | TagDirection::Reverse => {
                self.cursor = (self.cursor + 1) % span;
            }
            TagDirection::Pingpong => {
                if span == 1 {
                    return;
                }
                if self.bounce_forward {
                    if self.cursor + 1 == span {
                        self.bounce_forward = false;
                        self.cursor -= 1;
                    } else {
                        self.cursor += 1;
                    }
                } else if self.cursor == 0 {
                    self.bounce_forward = true;
                    self.cursor += 1;
                } else {
                    self.cursor -= 1;
                }
            }
        }
    }
}
