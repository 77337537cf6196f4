//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;
use sdl2::pixels::Color;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the game board, in pixels. Matches the Nokia 3310 screen.
pub const GAME_SIZE: UVec2 = UVec2::new(84, 48);
/// The integer zoom factor for the window.
pub const WINDOW_SCALE: u32 = 10;
/// The size of the window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(GAME_SIZE.x * WINDOW_SCALE, GAME_SIZE.y * WINDOW_SCALE);

/// The darker of the two Nokia 3310 palette tones, used as the background.
pub const PALETTE_DARK: Color = Color::RGB(0x43, 0x52, 0x3d);
/// The lighter of the two Nokia 3310 palette tones, used for everything drawn.
pub const PALETTE_LIGHT: Color = Color::RGB(0xc7, 0xf0, 0xd8);

/// The maximum number of dust particles alive at once.
pub const MAX_DUSTS: usize = 5;

/// Sample rate the mixer device is opened at.
pub const SAMPLE_RATE: i32 = 44_100;
/// Number of mixing channels allocated for playback.
pub const AUDIO_CHANNELS: i32 = 4;
/// Mixer chunk size, in bytes.
pub const CHUNK_SIZE: i32 = 256;
