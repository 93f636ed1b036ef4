use macroquad::prelude::*;

mod config;
mod physics;
mod rendering;
mod simulation;

use config::ViewerConfig;
use rendering::{compose_frame, surface, FrameStats};
use simulation::input::KeyRepeat;
use simulation::{dispatch, input, FramePacer, Simulation};
use std::time::Instant;

fn window_conf() -> Conf {
    let config = ViewerConfig::default();
    Conf {
        window_title: config.window_title,
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        platform: macroquad::miniquad::conf::Platform {
            // The frame pacer bounds the rate, not vsync.
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Starting Lorenz oscillator viewer");

    if let Err(e) = run().await {
        log::error!("Fatal: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        log::info!("Ignoring arguments: {}", args.join(" "));
    }

    let config = ViewerConfig::default();
    config.validate()?;
    log::info!("Configuration: {}", config.to_json()?);

    let mut sim = Simulation::new(&config);
    let mut pacer = FramePacer::new(config.tick_period());

    // First layout: center the origin on the real surface.
    let (width, height) = surface::window_size();
    sim.set_surface(width, height);
    sim.reset_view();
    log::info!("Surface {}x{}", width, height);

    if config.autostart {
        sim.begin();
    }

    let mut repeat = KeyRepeat::default();
    loop {
        let started = pacer.begin();
        for event in input::poll(sim.cursor, &mut repeat) {
            dispatch(&mut sim, event);
        }
        if sim.quit_requested {
            break;
        }

        let (width, height) = surface::window_size();
        sim.set_surface(width, height);
        sim.step();

        // The render sample spans drawing and the frame present.
        let render_started = Instant::now();
        let stats = FrameStats { fps: pacer.fps_estimate() };
        surface::present(&compose_frame(&sim, &stats, width, height));
        next_frame().await;
        sim.finish_tick(&mut pacer, started, render_started.elapsed());
    }

    log::info!(
        "Exiting after {} ticks, {} orbit points (capacity {}, grown {} times)",
        pacer.tick_count(),
        sim.orbit.len(),
        sim.orbit.capacity(),
        sim.orbit.growth_events()
    );
    Ok(())
}
