#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line adapter that drives every arcade engine.
//!
//! Each subcommand owns its loop, clamps timing where the engine contract
//! requires it, and prints what the engine reports; no game logic lives here.

mod demos;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pixel_arcade_core::ThemeId;

#[derive(Parser)]
#[command(name = "pixel-arcade", about = "Headless drivers for the arcade game engines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a seeded platformer simulation and report the outcome.
    Platformer {
        /// Content theme to load.
        #[arg(long, default_value = "retro")]
        theme: ThemeId,
        /// Level index to start from.
        #[arg(long, default_value_t = 0)]
        level: usize,
        /// Number of 60 Hz ticks to simulate.
        #[arg(long, default_value_t = 600)]
        ticks: u32,
        /// Seed for the generated input stream.
        #[arg(long, default_value_t = 0x5eed)]
        seed: u64,
    },
    /// Route every circuit level with the reference solver.
    Circuit {
        /// Content theme to load.
        #[arg(long, default_value = "retro")]
        theme: ThemeId,
    },
    /// Walk a winning path through the story and print the transcript.
    Fiction {
        /// Content theme to load.
        #[arg(long, default_value = "retro")]
        theme: ThemeId,
    },
    /// Replay a scripted build and print the score breakdown.
    Builder {
        /// Content theme to load.
        #[arg(long, default_value = "retro")]
        theme: ThemeId,
    },
    /// Score a fixed guess sweep and print the session rating.
    Geography {
        /// Content theme to load.
        #[arg(long, default_value = "retro")]
        theme: ThemeId,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Platformer {
            theme,
            level,
            ticks,
            seed,
        } => demos::run_platformer(theme, level, ticks, seed),
        Command::Circuit { theme } => demos::run_circuit(theme),
        Command::Fiction { theme } => demos::run_fiction(theme),
        Command::Builder { theme } => demos::run_builder(theme),
        Command::Geography { theme } => demos::run_geography(theme),
    }
}
