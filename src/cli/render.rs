//! Plain-text rendering for the terminal.

use std::fmt::Write;

use tarot_draw::{CardTemplate, Reading, SpreadDefinition};

/// Render a reading: header, shareable seed, then one block per position.
pub fn reading(reading: &Reading) -> String {
    let spread = reading.spread();
    let draw = reading.draw();
    let mut out = String::new();

    let _ = writeln!(out, "{} · {}", spread.name, spread.subtitle);
    let _ = writeln!(out, "seed: {}", draw.seed());
    let _ = writeln!(
        out,
        "replay: tarot replay --spread {} --seed {}",
        shell_quote(&spread.id),
        shell_quote(draw.seed().as_str())
    );
    let _ = writeln!(out);

    for (position, card) in reading.layout() {
        let marker = if position.is_primary() { "*" } else { " " };
        let number = position_number(reading, &position.id);
        let _ = write!(out, "{marker}{number:>2}. {:<12}", position.title);

        match card {
            Some(card) if card.is_revealed() => {
                let orientation = if card.is_reversed() { " (reversed)" } else { "" };
                let _ = writeln!(
                    out,
                    "{} {}{}",
                    card.card().roman,
                    card.card().name,
                    orientation
                );
                let _ = writeln!(out, "      {}", position.description);
                let _ = writeln!(out, "      {}", card.card().keywords.join(", "));
            }
            Some(_) => {
                let _ = writeln!(out, "[face down]");
                let _ = writeln!(out, "      {}", position.description);
            }
            None => {
                let _ = writeln!(out, "[empty]");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", reading.status());
    out
}

/// Quote `text` as one POSIX shell word.
///
/// Plain words pass through; anything else is single-quoted with embedded
/// `'` written as `'\''`.
fn shell_quote(text: &str) -> String {
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,:/@%+=".contains(c));
    if plain {
        text.to_string()
    } else {
        format!("'{}'", text.replace('\'', r"'\''"))
    }
}

fn position_number(reading: &Reading, position_id: &str) -> usize {
    reading
        .card_at(position_id)
        .map_or(0, |card| card.order() + 1)
}

/// One line per spread.
pub fn spreads<'a>(spreads: impl Iterator<Item = &'a SpreadDefinition>) -> String {
    let mut out = String::new();
    for spread in spreads {
        let _ = writeln!(
            out,
            "{:<8} {:>2} cards  {} · {}",
            spread.id,
            spread.size(),
            spread.name,
            spread.subtitle
        );
        let _ = writeln!(out, "         {}", spread.description);
        let _ = writeln!(out, "         [{}]", spread.keywords.join(", "));
    }
    out
}

/// One line per card.
pub fn deck<'a>(cards: impl Iterator<Item = &'a CardTemplate>) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "{:<16} {:<9} {}", card.id, card.roman, card.name);
    }
    out
}
