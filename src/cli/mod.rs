//! Command-line front end.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: one handler per subcommand, writing to any `Write`
//! - `render.rs`: plain-text rendering

mod commands;
mod render;
mod setup;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::AppContext;
use setup::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Draw {
            spread,
            seed,
            reveal,
            output,
        } => commands::draw_cmd(&ctx, &mut out, &spread, seed.as_deref(), reveal, output),
        Commands::Replay {
            spread,
            seed,
            output,
        } => commands::replay_cmd(&ctx, &mut out, &spread, &seed, output),
        Commands::Spreads => commands::spreads_cmd(&ctx, &mut out),
        Commands::Deck { arcana } => commands::deck_cmd(&ctx, &mut out, arcana),
        Commands::Seed {
            count,
            length,
            entropy,
        } => commands::seed_cmd(&mut out, count, length, entropy),
    }
}
