use clap::{Parser, Subcommand};
use tarot_draw::Arcana;

#[derive(Parser, Debug)]
#[command(name = "tarot", bin_name = "tarot", version)]
#[command(
    about = "Reproducible Tarot de Marseille spreads from shareable seeds",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a spread
    #[command(alias = "d")]
    Draw {
        /// Spread id (see `tarot spreads`)
        #[arg(short, long, default_value = "single")]
        spread: String,

        /// Seed text; a fresh one is generated when absent or blank
        #[arg(long)]
        seed: Option<String>,

        /// Show cards face up
        #[arg(short, long)]
        reveal: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replay a draw from its seed and check it is identical
    Replay {
        /// Spread id the draw was made with
        #[arg(short, long)]
        spread: String,

        /// Seed of the original draw
        #[arg(long)]
        seed: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List available spreads
    Spreads,

    /// List the deck
    Deck {
        /// Only one arcana (major or minor)
        #[arg(short, long)]
        arcana: Option<Arcana>,
    },

    /// Generate fresh seeds
    Seed {
        /// How many seeds to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Characters per seed
        #[arg(long, env = "TAROT_SEED_LENGTH", default_value_t = 12)]
        length: usize,

        /// Fixed entropy, for reproducible output
        #[arg(long)]
        entropy: Option<u64>,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Print the full draw as JSON
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,

    /// Print the compact reading summary as JSON
    #[arg(long)]
    pub summary: bool,
}
