//! The player character.

use glam::IVec2;

use crate::constants::GAME_SIZE;

/// The skydiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: IVec2,
    /// Whether the parachute is open.
    pub chute: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player in the middle of the board, chute closed.
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(GAME_SIZE.x as i32 / 2, GAME_SIZE.y as i32 / 2),
            chute: false,
        }
    }

    /// Toggles the parachute.
    pub fn pull(&mut self) {
        self.chute = !self.chute;
    }
}
