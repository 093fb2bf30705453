/*
 * Command Line Module
 *
 * Options for the `mindful-boids` binary and the window-less headless run.
 */

use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::LaunchOptions;
use crate::bounds::WorldBounds;
use crate::error::Result;
use crate::flock::{Flock, Processing};
use crate::mindset::Mindset;
use crate::params::SimulationParams;

// Frames between progress reports in a headless run
const REPORT_INTERVAL: u64 = 60;

/// Three-dimensional boids with a shared mindset
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of boids in the flock
    #[arg(short, long, default_value_t = SimulationParams::default().num_boids)]
    pub boids: usize,

    /// Seed for the initial scatter
    #[arg(short, long, default_value_t = SimulationParams::default().seed)]
    pub seed: u64,

    /// JSON file holding the mindset
    #[arg(short, long, value_name = "PATH")]
    pub mindset: Option<PathBuf>,

    /// Decide on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Step this many frames without opening a window
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

impl Args {
    /// The mindset from `--mindset`, or the default one.
    pub fn load_mindset(&self) -> Result<Mindset> {
        match &self.mindset {
            Some(path) => Mindset::load(path),
            None => Ok(Mindset::default()),
        }
    }

    pub fn processing(&self) -> Processing {
        Processing::from_parallel(!self.sequential)
    }

    pub fn launch_options(&self, mindset: Mindset) -> LaunchOptions {
        LaunchOptions {
            num_boids: self.boids,
            seed: self.seed,
            mindset,
            parallel: !self.sequential,
        }
    }
}

/// Runs `frames` wrapped steps and returns the final flock.
pub fn run_headless(args: &Args, mindset: &Mindset, frames: u64) -> Flock {
    let bounds = WorldBounds::new(SimulationParams::default().world_half_extent);
    let processing = args.processing();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut flock = Flock::scattered(args.boids, bounds.half_extent, &mut rng);

    info!(
        "headless run: {} boids, {frames} frames, {processing:?}, {mindset:?}",
        flock.len()
    );

    for frame in 1..=frames {
        flock.step(mindset, processing);
        flock.wrap(&bounds);
        if frame % REPORT_INTERVAL == 0 {
            info!("frame {frame}: mean speed {:.4}", flock.mean_speed());
        }
    }

    info!("finished after {frames} frames: mean speed {:.4}", flock.mean_speed());
    flock
}
