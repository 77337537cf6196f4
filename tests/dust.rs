use freefall::constants::{GAME_SIZE, MAX_DUSTS};
use freefall::dust::{Dust, Dusts};
use glam::IVec2;
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

const BOARD_WIDTH: i32 = GAME_SIZE.x as i32;
const BOARD_HEIGHT: i32 = GAME_SIZE.y as i32;

#[test]
fn test_spawns_below_the_board() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(1);

    dusts.update(&mut rng);

    assert_eq!(dusts.len(), 1);
    let dust = dusts.iter().next().unwrap();
    assert_eq!(dust.pos.y, BOARD_HEIGHT + 1);
    assert_that(&dust.pos.x).is_greater_than_or_equal_to(0);
    assert_that(&dust.pos.x).is_less_than(BOARD_WIDTH);
}

#[test]
fn test_spawned_dust_sits_out_its_first_tick() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(1);

    dusts.update(&mut rng);
    assert_eq!(dusts.iter().next().unwrap().pos.y, BOARD_HEIGHT + 1);

    dusts.update(&mut rng);
    assert_eq!(dusts.iter().next().unwrap().pos.y, BOARD_HEIGHT);
}

#[test]
fn test_fills_one_per_tick_up_to_capacity() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(1);

    for expected in 1..=MAX_DUSTS {
        dusts.update(&mut rng);
        assert_eq!(dusts.len(), expected);
    }
}

#[test]
fn test_capacity_is_never_exceeded() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..500 {
        dusts.update(&mut rng);
        assert_that(&dusts.len()).is_less_than_or_equal_to(MAX_DUSTS);
    }
}

#[test]
fn test_no_dust_survives_past_the_top() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(3);

    for _ in 0..500 {
        dusts.update(&mut rng);
        assert_that(&dusts.iter().all(|dust| dust.pos.y >= 0)).is_true();
    }
}

#[test]
fn test_first_dust_crosses_out_after_board_height_plus_two_ticks() {
    let mut dusts = Dusts::new();
    let mut rng = SmallRng::seed_from_u64(9);

    // The first dust spawns on tick 1 at y = H + 1 and rests that tick, so it
    // reaches y = 0 exactly H + 2 ticks later and is culled on the next one.
    for _ in 0..(BOARD_HEIGHT as usize + 2) {
        dusts.update(&mut rng);
    }
    assert_eq!(dusts.len(), MAX_DUSTS);
    assert_eq!(dusts.iter().map(|dust| dust.pos.y).min().unwrap(), 0);

    dusts.update(&mut rng);
    assert_eq!(dusts.len(), MAX_DUSTS - 1);
    assert_eq!(dusts.iter().map(|dust| dust.pos.y).min().unwrap(), 0);
}

#[test]
fn test_removes_every_expired_dust_in_one_pass() {
    let mut dusts: Dusts = (0..MAX_DUSTS)
        .map(|i| Dust {
            pos: IVec2::new(i as i32 * 10, 0),
        })
        .collect();
    let mut rng = SmallRng::seed_from_u64(1);

    // At capacity nothing spawns; every dust advances to y = -1 and all five
    // must go in the same pass.
    dusts.update(&mut rng);
    assert_eq!(dusts.len(), 0);
}

#[test]
fn test_mixed_expiry_keeps_survivors_intact() {
    let mut dusts: Dusts = [(5, 0), (20, 10), (35, 0), (50, 10), (65, 0)]
        .iter()
        .map(|&(x, y)| Dust { pos: IVec2::new(x, y) })
        .collect();
    let mut rng = SmallRng::seed_from_u64(1);

    dusts.update(&mut rng);

    let survivors: Vec<_> = dusts.iter().map(|dust| dust.pos).collect();
    assert_eq!(survivors, vec![IVec2::new(20, 9), IVec2::new(50, 9)]);
}
