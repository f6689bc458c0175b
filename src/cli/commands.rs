use std::io::Write;

use anyhow::{bail, Context, Result};
use tarot_draw::{
    draw, normalize_seed, Arcana, Deck, EngineConfig, Reading, Seed, SeedConfig, SeedSource,
    SpreadCatalog,
};
use tracing::info;

use super::render;
use super::setup::OutputArgs;

/// Catalogs shared by every command.
pub struct AppContext {
    pub deck: Deck,
    pub spreads: SpreadCatalog,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            deck: Deck::marseille(),
            spreads: SpreadCatalog::builtin(),
        }
    }

    fn reading(&self, spread_id: &str, seed: &Seed) -> Result<Reading> {
        let spread = self.spreads.get_or_err(spread_id).with_context(|| {
            format!(
                "available spreads: {}",
                self.spreads.ids().collect::<Vec<_>>().join(", ")
            )
        })?;
        let result = draw(spread, &self.deck, seed)?;
        Ok(Reading::new(spread.clone(), result)?)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

fn emit(out: &mut impl Write, reading: &Reading, output: OutputArgs) -> Result<()> {
    if output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(reading.draw())?)?;
    } else if output.summary {
        writeln!(out, "{}", reading.summary_json()?)?;
    } else {
        write!(out, "{}", render::reading(reading))?;
    }
    Ok(())
}

pub fn draw_cmd(
    ctx: &AppContext,
    out: &mut impl Write,
    spread_id: &str,
    seed: Option<&str>,
    reveal: bool,
    output: OutputArgs,
) -> Result<()> {
    let seed = normalize_seed(seed);
    let mut reading = ctx.reading(spread_id, &seed)?;
    info!(seed = %seed, spread = spread_id, "draw");

    if reveal {
        reading.reveal_all();
    }
    emit(out, &reading, output)
}

pub fn replay_cmd(
    ctx: &AppContext,
    out: &mut impl Write,
    spread_id: &str,
    seed: &str,
    output: OutputArgs,
) -> Result<()> {
    let Some(seed) = Seed::parse(seed.trim()) else {
        bail!("replay needs the seed of an earlier draw");
    };

    let mut reading = ctx.reading(spread_id, &seed)?;
    let again = reading.draw().replay(reading.spread(), &ctx.deck)?;
    if !reading.draw().same_draw(&again) {
        bail!("replay of {} diverged", reading.draw().signature());
    }
    info!(signature = %again.signature(), "replay verified");

    reading.reveal_all();
    emit(out, &reading, output)
}

pub fn spreads_cmd(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", render::spreads(ctx.spreads.iter()))?;
    Ok(())
}

pub fn deck_cmd(ctx: &AppContext, out: &mut impl Write, arcana: Option<Arcana>) -> Result<()> {
    let text = match arcana {
        Some(arcana) => render::deck(ctx.deck.by_arcana(arcana)),
        None => render::deck(ctx.deck.iter()),
    };
    write!(out, "{text}")?;
    Ok(())
}

pub fn seed_cmd(
    out: &mut impl Write,
    count: usize,
    length: usize,
    entropy: Option<u64>,
) -> Result<()> {
    if length == 0 {
        bail!("seed length must be at least 1");
    }
    let mut config =
        EngineConfig::default().with_seed_config(SeedConfig::default().with_length(length));
    config.entropy = entropy;

    let mut source = SeedSource::from_engine(&config);
    for _ in 0..count {
        writeln!(out, "{}", source.generate())?;
    }
    Ok(())
}
