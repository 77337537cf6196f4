//! Game state and the per-tick logic driving it.

use std::collections::HashMap;

use rand::rngs::ThreadRng;
use sdl2::keyboard::Keycode;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

use crate::asset::AssetSource;
use crate::audio::{Mixer, Sound};
use crate::constants::{LOOP_TIME, PALETTE_DARK, PALETTE_LIGHT};
use crate::dust::Dusts;
use crate::error::{GameError, GameResult, SpriteError};
use crate::player::Player;
use crate::sprite::{load_sprite, SpriteSheet, TagAnimation};

/// The logical sounds the game plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SoundKind {
    Music,
    Chute,
}

/// Tag names in the player sheet, one per chute state.
const TAG_FALL: &str = "fall";
const TAG_CHUTE: &str = "chute";

pub struct Game {
    pub player: Player,
    pub dusts: Dusts,
    pub tick: u64,
    sheet: SpriteSheet,
    animation: TagAnimation,
    sounds: HashMap<SoundKind, Sound>,
    rng: ThreadRng,
}

impl Game {
    /// Loads every asset the game uses and assembles the initial state.
    ///
    /// Any load error propagates to the caller; `main` treats it as fatal.
    pub fn new(
        assets: &dyn AssetSource,
        texture_creator: &TextureCreator<WindowContext>,
        mixer: &Mixer,
    ) -> GameResult<Self> {
        let sheet = load_sprite(assets, texture_creator, "player")?;
        let fall = sheet
            .tag(TAG_FALL)
            .ok_or_else(|| SpriteError::TagNotFound(TAG_FALL.to_string()))?;
        let animation = TagAnimation::new(fall);

        let mut sounds = HashMap::new();
        for kind in SoundKind::iter() {
            let mut sound = Sound::new();
            match kind {
                SoundKind::Music => sound.add_music(mixer, assets, "music")?,
                SoundKind::Chute => sound.add_sound(mixer, assets, "chute", 2)?,
            }
            sounds.insert(kind, sound);
        }

        Ok(Self {
            player: Player::new(),
            dusts: Dusts::new(),
            tick: 0,
            sheet,
            animation,
            sounds,
            rng: rand::rng(),
        })
    }

    /// Starts the looping background music.
    pub fn start(&mut self) {
        if let Some(music) = self.sounds.get_mut(&SoundKind::Music) {
            music.set_volume(0.5);
            music.play(&mut self.rng);
        }
    }

    /// Advances the game by one tick.
    pub fn update(&mut self) {
        self.tick += 1;

        // The open chute halves the fall speed, so dust rises every other
        // tick.
        if self.player.chute {
            if self.tick % 2 == 0 {
                self.dusts.update(&mut self.rng);
            }
        } else {
            self.dusts.update(&mut self.rng);
        }

        self.animation.tick(&self.sheet.frames, LOOP_TIME.as_secs_f32() * 1000.0);
    }

    pub fn keyboard_event(&mut self, keycode: Keycode) {
        if keycode == Keycode::Space {
            self.player.pull();
            debug!(chute = self.player.chute, "Chute pulled");

            if let Some(sound) = self.sounds.get_mut(&SoundKind::Chute) {
                sound.play(&mut self.rng);
            }

            let tag_name = if self.player.chute { TAG_CHUTE } else { TAG_FALL };
            if let Some(tag) = self.sheet.tag(tag_name) {
                self.animation = TagAnimation::new(tag);
            }
        }
    }

    /// Draws the game screen by one frame.
    pub fn draw(&mut self, canvas: &mut Canvas<Window>) -> GameResult<()> {
        canvas.set_draw_color(PALETTE_DARK);
        canvas.clear();

        canvas.set_draw_color(PALETTE_LIGHT);
        for dust in self.dusts.iter() {
            canvas
                .fill_rect(Rect::new(dust.pos.x, dust.pos.y, 1, 1))
                .map_err(GameError::Sdl)?;
        }

        let frame = &self.sheet.frames[self.animation.frame_index()];
        let src = frame.position.rect();
        let dest = Rect::new(self.player.pos.x, self.player.pos.y, src.width(), src.height());
        canvas.copy(&self.sheet.texture, src, dest).map_err(GameError::Sdl)?;

        Ok(())
    }
}
