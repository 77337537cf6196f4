//! SDL2 and tracing bootstrap plus the 60 Hz event loop.

use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::video::FullscreenType;
use tracing::{error, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use freefall::asset::BundledAssets;
use freefall::audio::Mixer;
use freefall::constants::{GAME_SIZE, LOOP_TIME, WINDOW_SIZE};
use freefall::game::Game;

fn main() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    // Asset and device errors are unrecoverable: log the diagnostic and exit.
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
    let _audio_subsystem = sdl_context.audio().map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window("Freefall", WINDOW_SIZE.x, WINDOW_SIZE.y)
        .position_centered()
        .build()
        .context("Could not initialize window")?;

    let mut canvas = window.into_canvas().build().context("Could not build canvas")?;
    canvas
        .set_logical_size(GAME_SIZE.x, GAME_SIZE.y)
        .context("Could not set logical size")?;

    let texture_creator = canvas.texture_creator();
    let assets = BundledAssets;
    let mixer = Mixer::new()?;
    let mut game = Game::new(&assets, &texture_creator, &mixer)?;

    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    game.start();
    info!("Starting game loop ({:.3}ms)", LOOP_TIME.as_secs_f32() * 1000.0);

    'running: loop {
        let start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    break 'running;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::F),
                    ..
                } => {
                    let window = canvas.window_mut();
                    let target = match window.fullscreen_state() {
                        FullscreenType::Off => FullscreenType::Desktop,
                        _ => FullscreenType::Off,
                    };
                    window.set_fullscreen(target).map_err(|e| anyhow!(e))?;
                }
                Event::KeyDown {
                    keycode: Some(keycode), ..
                } => {
                    game.keyboard_event(keycode);
                }
                _ => {}
            }
        }

        game.update();
        game.draw(&mut canvas)?;
        canvas.present();

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }
    }

    Ok(())
}
