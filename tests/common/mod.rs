#![allow(dead_code)]

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use freefall::asset::AssetSource;
use freefall::audio::{Playable, Sound};
use freefall::error::AssetError;

/// In-memory asset set standing in for the bundled assets.
#[derive(Debug, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.to_string(), bytes.into());
    }
}

impl AssetSource for MemoryAssets {
    fn bytes(&self, path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
        self.files
            .get(path)
            .cloned()
            .map(Cow::Owned)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

/// What happened to which variant, in call order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    Volume(f32),
    Rewind,
    Play,
    Pause,
}

pub type PlayerLog = Rc<RefCell<Vec<(usize, PlayerEvent)>>>;

/// A player that records every call instead of touching the mixer.
pub struct RecordingPlayer {
    id: usize,
    log: PlayerLog,
}

impl Playable for RecordingPlayer {
    fn set_volume(&mut self, volume: f32) {
        self.log.borrow_mut().push((self.id, PlayerEvent::Volume(volume)));
    }

    fn rewind(&mut self) {
        self.log.borrow_mut().push((self.id, PlayerEvent::Rewind));
    }

    fn play(&mut self) {
        self.log.borrow_mut().push((self.id, PlayerEvent::Play));
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push((self.id, PlayerEvent::Pause));
    }
}

/// A pool of `count` recording variants plus the shared call log.
pub fn recording_pool(count: usize) -> (Sound, PlayerLog) {
    let log: PlayerLog = Rc::new(RefCell::new(Vec::new()));
    let mut sound = Sound::new();
    for id in 0..count {
        sound.add_player(Box::new(RecordingPlayer {
            id,
            log: Rc::clone(&log),
        }));
    }
    (sound, log)
}

/// A sheet document with `frames` 16x16 frames and the given tags.
pub fn sheet_json(frames: usize, tags: &[(&str, usize, usize, &str)]) -> Vec<u8> {
    let frames: Vec<_> = (0..frames)
        .map(|i| {
            serde_json::json!({
                "duration": 100,
                "frame": { "x": (i * 16) as i64, "y": 0, "w": 16, "h": 16 }
            })
        })
        .collect();
    let tags: Vec<_> = tags
        .iter()
        .map(|(name, from, to, direction)| {
            serde_json::json!({ "name": name, "from": from, "to": to, "direction": direction })
        })
        .collect();

    serde_json::json!({
        "frames": frames,
        "meta": { "image": "sheet.png", "frameTags": tags }
    })
    .to_string()
    .into_bytes()
}
