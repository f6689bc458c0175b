//! # tarot CLI
//!
//! The binary is thin: argument parsing, command dispatch and rendering live
//! in `src/cli/`, the draw engine in the `tarot_draw` library.
//!
//! ```text
//! tarot draw --spread cross --seed "full moon"   # draw and share the seed
//! tarot replay --spread cross --seed "full moon" # same cards, verified
//! tarot spreads                                  # list layouts
//! ```

mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
