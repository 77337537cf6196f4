//! This module handles the audio playback for the game.
//!
//! [`Mixer`] owns the open SDL2_mixer device and decodes bundled OGG
//! resources into playable chunks. [`Sound`] groups the playable variants of
//! one logical sound and picks among them on play.

use rand::Rng;
use sdl2::mixer::{self, Channel, Chunk, InitFlag, LoaderRWops, DEFAULT_FORMAT, MAX_VOLUME};
use sdl2::rwops::RWops;
use tracing::{debug, warn};

use crate::asset::AssetSource;
use crate::constants::{AUDIO_CHANNELS, CHUNK_SIZE, SAMPLE_RATE};
use crate::error::AudioError;

/// A playable audio handle: something that can be restarted, paused, and
/// have its volume set.
///
/// Mixer-backed players implement this; tests substitute recording fakes.
pub trait Playable {
    /// Applies a volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
    /// Seeks back to the start of the clip.
    fn rewind(&mut self);
    /// Starts playback.
    fn play(&mut self);
    /// Pauses playback.
    fn pause(&mut self);
}

/// The open SDL2_mixer device.
///
/// Opening the device happens once at startup; failure is a configuration
/// error, not a per-call condition.
pub struct Mixer {
    _context: mixer::Sdl2MixerContext,
}

impl Mixer {
    pub fn new() -> Result<Self, AudioError> {
        mixer::open_audio(SAMPLE_RATE, DEFAULT_FORMAT, 1, CHUNK_SIZE).map_err(AudioError::Open)?;
        mixer::allocate_channels(AUDIO_CHANNELS);
        let context = mixer::init(InitFlag::OGG).map_err(AudioError::Open)?;

        debug!(sample_rate = SAMPLE_RATE, channels = AUDIO_CHANNELS, "Opened audio device");
        Ok(Self { _context: context })
    }

    /// Decodes one bundled OGG resource into a playable chunk.
    pub fn load(&self, assets: &dyn AssetSource, path: &str) -> Result<Chunk, AudioError> {
        debug!(path, "Loading sound");

        let bytes = assets.bytes(path)?;
        let rwops = RWops::from_bytes(&bytes).map_err(|message| AudioError::Decode {
            name: path.to_string(),
            message,
        })?;
        rwops.load_wav().map_err(|message| AudioError::Decode {
            name: path.to_string(),
            message,
        })
    }

    /// Wraps a decoded chunk as an infinitely looping music player.
    pub fn music_player(&self, chunk: Chunk) -> ChunkPlayer {
        ChunkPlayer::new(chunk, -1)
    }

    /// Wraps a decoded chunk as a one-shot sound player.
    pub fn sound_player(&self, chunk: Chunk) -> ChunkPlayer {
        ChunkPlayer::new(chunk, 0)
    }
}

/// A decoded clip bound to the open mixer device.
///
/// Remembers the channel it last played on so a later pause affects that
/// playback.
pub struct ChunkPlayer {
    chunk: Chunk,
    loops: i32,
    channel: Option<Channel>,
}

impl ChunkPlayer {
    fn new(chunk: Chunk, loops: i32) -> Self {
        Self {
            chunk,
            loops,
            channel: None,
        }
    }
}

impl Playable for ChunkPlayer {
    fn set_volume(&mut self, volume: f32) {
        self.chunk.set_volume((volume * MAX_VOLUME as f32) as i32);
    }

    fn rewind(&mut self) {
        // Chunks always play from the start; halting the previous playback
        // is the seek-to-zero equivalent.
        if let Some(channel) = self.channel.take() {
            channel.halt();
        }
    }

    fn play(&mut self) {
        match Channel::all().play(&self.chunk, self.loops) {
            Ok(channel) => self.channel = Some(channel),
            Err(e) => warn!("Could not play sound: {e}"),
        }
    }

    fn pause(&mut self) {
        if let Some(channel) = self.channel {
            channel.pause();
        }
    }
}

/// All the playable variants of one logical sound.
///
/// Variants are appended at load time in call order and never removed.
/// `last_played` starts at 0, so pausing a pool that was never played pauses
/// the first variant.
pub struct Sound {
    variants: Vec<Box<dyn Playable>>,
    last_played: usize,
    volume: f32,
}

impl Default for Sound {
    fn default() -> Self {
        Self::new()
    }
}

impl Sound {
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
            last_played: 0,
            volume: 1.0,
        }
    }

    /// Appends an infinitely looping player for `<name>.ogg`.
    pub fn add_music(&mut self, mixer: &Mixer, assets: &dyn AssetSource, name: &str) -> Result<(), AudioError> {
        let chunk = mixer.load(assets, &format!("{name}.ogg"))?;
        self.add_player(Box::new(mixer.music_player(chunk)));
        Ok(())
    }

    /// Appends `count` one-shot players, named by the variant convention:
    /// the bare `<name>.ogg` for a single variant, `-1`, `-2`, ... suffixes
    /// otherwise. The count is declared by the caller, not inferred.
    pub fn add_sound(
        &mut self,
        mixer: &Mixer,
        assets: &dyn AssetSource,
        name: &str,
        count: usize,
    ) -> Result<(), AudioError> {
        for index in 0..count {
            let chunk = mixer.load(assets, &variant_file_name(name, index, count))?;
            self.add_player(Box::new(mixer.sound_player(chunk)));
        }
        Ok(())
    }

    /// Appends an already constructed player as the next variant.
    pub fn add_player(&mut self, player: Box<dyn Playable>) {
        self.variants.push(player);
    }

    /// Sets the volume applied to variants played from now on. Values outside
    /// `[0, 1]` are ignored and the previous volume kept.
    pub fn set_volume(&mut self, volume: f32) {
        if (0.0..=1.0).contains(&volume) {
            self.volume = volume;
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn last_played(&self) -> usize {
        self.last_played
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Plays the sound: nothing for an empty pool, the only variant when
    /// there is exactly one, a uniformly random variant otherwise.
    pub fn play<R: Rng>(&mut self, rng: &mut R) {
        let index = match self.variants.len() {
            0 => return,
            1 => 0,
            len => rng.random_range(0..len),
        };
        self.play_variant(index);
    }

    /// Plays variant `index` from the start at the current volume and records
    /// it as the last played.
    ///
    /// Panics if `index` is out of range; selecting a variant that was never
    /// loaded is a caller bug.
    pub fn play_variant(&mut self, index: usize) {
        self.last_played = index;
        let variant = &mut self.variants[index];
        variant.set_volume(self.volume);
        variant.rewind();
        variant.play();
    }

    /// Pauses the most recently played variant (the first variant if nothing
    /// was played yet).
    ///
    /// Panics on an empty pool, same contract as [`Sound::play_variant`].
    pub fn pause(&mut self) {
        self.variants[self.last_played].pause();
    }
}

/// Resolves the file name of variant `index` (0-based) out of `count`.
pub fn variant_file_name(name: &str, index: usize, count: usize) -> String {
    if count == 1 {
        format!("{name}.ogg")
    } else {
        format!("{name}-{}.ogg", index + 1)
    }
}
