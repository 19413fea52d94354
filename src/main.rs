//! Headless demo runner
//!
//! Drives the simulation without a window: a tiny autopilot keeps the
//! paddle under the ball while events stream to the log. Useful for
//! profiling the sim and for eyeballing behavior before wiring up a real
//! platform layer.

use std::path::Path;

use smashout::audio::AudioManager;
use smashout::keys::{KEY_A, KEY_D, KEY_ENTER, KEY_SPACE};
use smashout::sim::state::{GameEvent, GameSession, Mode};
use smashout::sim::tick;
use smashout::Settings;

const FRAMES: u32 = 60 * 120;
const DT: f32 = 1.0 / 120.0;

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let seed = 0x5EED_CAFE;
    let mut session = GameSession::new(seed);
    log::info!("running {FRAMES} headless frames with seed {seed:#x}");

    // Confirm out of the menu and release the ball
    session.press(KEY_ENTER);
    session.process_input(DT);
    session.release(KEY_ENTER);
    session.press(KEY_SPACE);

    let mut bricks_broken = 0u32;
    for frame in 0..FRAMES {
        autopilot(&mut session);
        session.process_input(DT);
        tick::update(&mut session, DT);

        let events = session.drain_events();
        bricks_broken += events
            .iter()
            .filter(|e| **e == GameEvent::BrickDestroyed)
            .count() as u32;
        audio.play_events(&events);

        if session.mode == Mode::Win {
            log::info!("won level {} on frame {frame}", session.level);
            // One confirm back to the menu, a second one to start over
            session.release(KEY_ENTER);
            session.press(KEY_ENTER);
            session.process_input(DT);
            session.release(KEY_ENTER);
            session.press(KEY_ENTER);
        }
    }

    println!(
        "simulated {FRAMES} frames: {bricks_broken} bricks broken, {} lives left, mode {:?}",
        session.lives, session.mode
    );
}

/// Keep the paddle centered under the ball
fn autopilot(session: &mut GameSession) {
    let ball_center = session.ball.actor.position.x + session.ball.radius;
    let paddle_center = session.player.position.x + session.player.size.x / 2.0;

    session.release(KEY_A);
    session.release(KEY_D);
    if ball_center < paddle_center - 5.0 {
        session.press(KEY_A);
    } else if ball_center > paddle_center + 5.0 {
        session.press(KEY_D);
    }
}
