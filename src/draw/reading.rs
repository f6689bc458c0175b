//! Reading: a draw being turned over by its consumer.
//!
//! The draw engine hands out cards face down. A `Reading` owns the reveal
//! lifecycle (toggle one card, reveal all) and produces the status and
//! export views a front end or an interpretation module needs.

use serde::{Deserialize, Serialize};

use super::composer::{Draw, DrawnCard};
use crate::error::{Result, TarotError};
use crate::spreads::{SpreadDefinition, SpreadPosition};

/// One card in a reading export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub uid: String,
    pub name: String,
    pub position: String,
    pub reversed: bool,
}

/// Compact export of a reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSummary {
    pub spread: String,
    pub seed: String,
    pub cards: Vec<CardSummary>,
}

/// A draw paired with the spread it was laid on.
#[derive(Clone, Debug)]
pub struct Reading {
    spread: SpreadDefinition,
    draw: Draw,
}

impl Reading {
    /// Pair a draw with its spread.
    ///
    /// Fails with [`TarotError::SpreadMismatch`] if the draw was made for a
    /// different spread.
    pub fn new(spread: SpreadDefinition, draw: Draw) -> Result<Self> {
        if spread.id != draw.spread_id() {
            return Err(TarotError::SpreadMismatch {
                draw: draw.spread_id().to_string(),
                spread: spread.id,
            });
        }
        Ok(Self { spread, draw })
    }

    /// The spread layout.
    #[must_use]
    pub fn spread(&self) -> &SpreadDefinition {
        &self.spread
    }

    /// The underlying draw.
    #[must_use]
    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    /// Cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[DrawnCard] {
        self.draw.cards()
    }

    /// Flip one card. Returns the new `revealed` value, or `None` if no
    /// card has that uid.
    pub fn toggle(&mut self, uid: &str) -> Option<bool> {
        self.draw
            .cards_mut()
            .iter_mut()
            .find(|c| c.uid() == uid)
            .map(DrawnCard::toggle_revealed)
    }

    /// Turn every card face up.
    pub fn reveal_all(&mut self) {
        for card in self.draw.cards_mut() {
            card.reveal();
        }
    }

    /// Card placed on a position, if any.
    #[must_use]
    pub fn card_at(&self, position_id: &str) -> Option<&DrawnCard> {
        self.cards().iter().find(|c| c.position_id() == position_id)
    }

    /// Positions paired with the card drawn for them.
    pub fn layout(&self) -> impl Iterator<Item = (&SpreadPosition, Option<&DrawnCard>)> {
        self.spread
            .positions
            .iter()
            .map(move |p| (p, self.card_at(&p.id)))
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards().iter().filter(|c| c.is_revealed()).count()
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len()
    }

    /// Check if the reading has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    /// Check if every card is face up.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.revealed_count() == self.len()
    }

    /// Status line for display.
    #[must_use]
    pub fn status(&self) -> String {
        if self.is_empty() {
            "No cards drawn.".to_string()
        } else {
            format!("{}/{} cards revealed.", self.revealed_count(), self.len())
        }
    }

    /// Export for an interpretation layer.
    #[must_use]
    pub fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            spread: self.spread.id.clone(),
            seed: self.draw.seed().to_string(),
            cards: self
                .cards()
                .iter()
                .map(|c| CardSummary {
                    uid: c.uid().to_string(),
                    name: c.card().name.clone(),
                    position: c.position_id().to_string(),
                    reversed: c.is_reversed(),
                })
                .collect(),
        }
    }

    /// Summary as pretty JSON.
    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }

    /// Consume into the draw.
    #[must_use]
    pub fn into_draw(self) -> Draw {
        self.draw
    }
}
