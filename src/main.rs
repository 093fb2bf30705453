/*
 * Mindful Boids
 *
 * This application simulates a three-dimensional flock. Every boid weighs
 * three urges against a shared mindset:
 * 1. Obstacle avoiding: move away from close neighbours
 * 2. Conforming: match the neighbours' heading
 * 3. Centering: move toward the neighbours' centre
 *
 * The combined decision is capped by a movement budget spent in that order.
 * Without `--headless` an interactive viewer opens, with sliders to adjust
 * the mindset in real time and an orbiting camera.
 */

use anyhow::Context;
use clap::Parser;
use log::info;

use mindful_boids::app;
use mindful_boids::cli::{self, Args};
use mindful_boids::logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mindset = args.load_mindset().context("could not load the mindset")?;

    if let Some(frames) = args.headless {
        cli::run_headless(&args, &mindset, frames);
        return Ok(());
    }

    info!("opening viewer");
    app::set_launch_options(args.launch_options(mindset));
    nannou::app(app::model).update(app::update).run();
    Ok(())
}
