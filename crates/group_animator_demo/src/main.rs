// SPDX-License-Identifier: MIT OR Apache-2.0
//! Group animator demo.
//!
//! Plays the classic button toggle on a simulated view:
//! - spin, fade and shrink the button away
//! - pause half way and resume from the same progress
//! - play the mirrored timeline to bring it home again
//!
//! Pass a RON config path as the first argument to override the defaults.

mod sim;

use group_animator::{AnimatorConfig, AnimatorError, Clock, GroupAnimator, ManualClock};
use sim::SimView;
use std::rc::Rc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Simulated frame interval (ms)
const FRAME_MS: u64 = 16;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("group_animator_demo=info".parse().unwrap())
        .add_directive("group_animator=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting group animator demo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(std::env::args().nth(1)) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(config_path: Option<String>) -> Result<(), AnimatorError> {
    let config = match config_path {
        Some(path) => AnimatorConfig::load(path)?,
        None => AnimatorConfig::default(),
    };

    let clock = Rc::new(ManualClock::new());
    let button = SimView::new("button", Rc::clone(&clock) as Rc<dyn Clock>);

    let mut forward = GroupAnimator::with_clock(config, Rc::clone(&clock) as Rc<dyn Clock>);
    forward
        .using_target(&button)
        .using_duration(1000)
        .rotation(360.0)?
        .using_timing(1000, 1000)
        .translation_x(100.0)?
        .alpha(0.0)?
        .using_timing(500, 1500)
        .scale_x(0.0)?
        .scale_y(0.0)?;

    // Sampled before anything moves, so it leads back to the resting state.
    let mut home = forward.clone_reverse();

    tracing::info!(
        "Forward timeline: {}ms over {} target(s)",
        forward.animation_length(),
        forward.target_count()
    );
    forward.start()?;
    play_until(&clock, &button, &forward, 0.5);

    let paused_at = forward.animation_percent();
    forward.cancel();
    tracing::info!("Paused at {:.0}%: {}", paused_at * 100.0, button.describe());

    forward.start_at(paused_at)?;
    tracing::info!("Resumed with {} driver(s)", forward.active_run_count());
    play_until(&clock, &button, &forward, 1.0);
    settle(&clock, &button);
    tracing::info!("{} away: {}", button.name(), button.describe());

    forward.cancel();
    home.start()?;
    play_until(&clock, &button, &home, 1.0);
    settle(&clock, &button);
    tracing::info!("{} home: {}", button.name(), button.describe());

    Ok(())
}

/// Step frames until the animator reports at least `percent` progress
fn play_until(clock: &ManualClock, view: &SimView, animator: &GroupAnimator<SimView>, percent: f32) {
    while animator.animation_percent() < percent {
        clock.advance_ms(FRAME_MS);
        view.tick();
        tracing::debug!("{:>3.0}% {}", animator.animation_percent() * 100.0, view.describe());
    }
}

/// Step frames until the view has nothing left running
fn settle(clock: &ManualClock, view: &SimView) {
    while view.tick() {
        clock.advance_ms(FRAME_MS);
    }
}
