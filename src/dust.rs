//! Dust particles giving the illusion of motion while falling.

use glam::IVec2;
use rand::Rng;

use crate::constants::{GAME_SIZE, MAX_DUSTS};

/// A single dust particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dust {
    pub pos: IVec2,
}

impl Dust {
    /// Moves the particle up one unit.
    fn rise(&mut self) {
        self.pos.y -= 1;
    }
}

/// The set of dust particles currently alive, capped at [`MAX_DUSTS`].
#[derive(Debug, Default)]
pub struct Dusts {
    dusts: Vec<Dust>,
}

impl Dusts {
    pub fn new() -> Self {
        Self {
            dusts: Vec::with_capacity(MAX_DUSTS),
        }
    }

    /// Advances the particle set by one tick: spawn one particle just below
    /// the board when under capacity, move the rest up one unit, then drop
    /// everything that left the top of the board.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        // A freshly spawned dust sits out the advance pass on its spawn tick.
        let alive = self.dusts.len();
        if alive < MAX_DUSTS {
            let x = rng.random_range(0..GAME_SIZE.x as i32);
            self.dusts.push(Dust {
                pos: IVec2::new(x, GAME_SIZE.y as i32 + 1),
            });
        }

        for dust in &mut self.dusts[..alive] {
            dust.rise();
        }

        self.dusts.retain(|dust| dust.pos.y >= 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dust> {
        self.dusts.iter()
    }

    pub fn len(&self) -> usize {
        self.dusts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dusts.is_empty()
    }
}

impl FromIterator<Dust> for Dusts {
    fn from_iter<I: IntoIterator<Item = Dust>>(iter: I) -> Self {
        Self {
            dusts: iter.into_iter().collect(),
        }
    }
}
