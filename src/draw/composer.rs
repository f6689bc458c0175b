//! Draw composition: shuffle the deck and lay it onto a spread.
//!
//! ## Generator consumption
//!
//! For a deck of `L` cards and a spread of `N` positions, one draw consumes
//! exactly `L - 1 + N` values from a generator derived from the signature
//! `"{seed}::{spread_id}"`:
//!
//! 1. `L - 1` values for the Fisher–Yates shuffle
//! 2. one value per position, in position order, for orientation
//!    (`reversed = value > 0.5`)
//!
//! Any change to this order breaks replay of existing seeds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardTemplate, Deck};
use crate::core::rng::DrawRng;
use crate::core::seed::Seed;
use crate::core::shuffle::shuffle;
use crate::error::{Result, TarotError};
use crate::spreads::SpreadDefinition;

/// Generator key for one draw: `"{seed}::{spread_id}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawSignature(String);

impl DrawSignature {
    /// Separator between seed and spread id.
    pub const SEPARATOR: &'static str = "::";

    /// Build the signature for a seed and spread id.
    #[must_use]
    pub fn new(seed: &Seed, spread_id: &str) -> Self {
        Self(format!("{}{}{}", seed.as_str(), Self::SEPARATOR, spread_id))
    }

    /// Get the signature text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the generator for this signature.
    #[must_use]
    pub fn rng(&self) -> DrawRng {
        DrawRng::from_signature(&self.0)
    }
}

impl std::fmt::Display for DrawSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A card placed on a spread position.
///
/// Everything except `revealed` is fixed at draw time. `revealed` starts
/// `false` and is only changed by the consumer of the draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawnCard {
    #[serde(flatten)]
    card: CardTemplate,
    uid: String,
    position_id: String,
    revealed: bool,
    reversed: bool,
    order: usize,
}

impl DrawnCard {
    /// The underlying catalog card.
    #[must_use]
    pub fn card(&self) -> &CardTemplate {
        &self.card
    }

    /// Unique id within the draw, stable across replays.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Id of the spread position this card occupies.
    #[must_use]
    pub fn position_id(&self) -> &str {
        &self.position_id
    }

    /// Whether the card has been turned face up.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the card is drawn upside down.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Index of the card within the draw.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Turn the card face up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Flip the card and return the new `revealed` value.
    pub fn toggle_revealed(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    /// Compare the draw-time fields, ignoring `revealed`.
    #[must_use]
    pub fn same_draw(&self, other: &Self) -> bool {
        self.uid == other.uid
            && self.position_id == other.position_id
            && self.reversed == other.reversed
            && self.order == other.order
            && self.card.id == other.card.id
    }
}

/// Result of one draw: the cards plus what is needed to replay them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    seed: Seed,
    spread_id: String,
    signature: DrawSignature,
    cards: Vec<DrawnCard>,
}

impl Draw {
    /// Seed the draw was made from.
    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Spread the draw was laid on.
    #[must_use]
    pub fn spread_id(&self) -> &str {
        &self.spread_id
    }

    /// Generator key of the draw.
    #[must_use]
    pub fn signature(&self) -> &DrawSignature {
        &self.signature
    }

    /// Cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[DrawnCard] {
        &self.cards
    }

    /// Mutable cards, for the reveal lifecycle.
    pub fn cards_mut(&mut self) -> &mut [DrawnCard] {
        &mut self.cards
    }

    /// Consume into the card list.
    #[must_use]
    pub fn into_cards(self) -> Vec<DrawnCard> {
        self.cards
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the draw has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Re-run this draw from its own seed.
    pub fn replay(&self, spread: &SpreadDefinition, deck: &Deck) -> Result<Draw> {
        draw(spread, deck, &self.seed)
    }

    /// Check that `other` reproduces this draw, ignoring reveal state.
    #[must_use]
    pub fn same_draw(&self, other: &Draw) -> bool {
        self.signature == other.signature
            && self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(&other.cards)
                .all(|(a, b)| a.same_draw(b))
    }
}

/// Draw `spread` from `deck` with `seed`.
///
/// ## Example
///
/// ```
/// use tarot_draw::{draw, normalize_seed, Deck, SpreadCatalog};
///
/// let deck = Deck::marseille();
/// let spreads = SpreadCatalog::builtin();
/// let spread = spreads.get("linear").unwrap();
/// let seed = normalize_seed(Some("alpha"));
///
/// let first = draw(spread, &deck, &seed).unwrap();
/// let again = draw(spread, &deck, &seed).unwrap();
///
/// assert_eq!(first.len(), 3);
/// assert!(first.same_draw(&again));
/// ```
pub fn draw(spread: &SpreadDefinition, deck: &Deck, seed: &Seed) -> Result<Draw> {
    let signature = DrawSignature::new(seed, &spread.id);
    let mut rng = signature.rng();
    let cards = compose(spread, deck, &signature, &mut rng)?;

    debug!(
        seed = %seed,
        spread = %spread.id,
        cards = cards.len(),
        consumed = rng.draws(),
        "drew spread"
    );

    Ok(Draw {
        seed: seed.clone(),
        spread_id: spread.id.clone(),
        signature,
        cards,
    })
}

/// Shuffle `deck` and lay it onto `spread` using an existing generator.
///
/// `rng` must be freshly derived from `signature` for the result to be a
/// replayable draw.
pub fn compose(
    spread: &SpreadDefinition,
    deck: &Deck,
    signature: &DrawSignature,
    rng: &mut DrawRng,
) -> Result<Vec<DrawnCard>> {
    let shuffled = shuffle(deck.as_slice(), rng);

    if spread.size() > shuffled.len() {
        return Err(TarotError::InsufficientDeckSize {
            required: spread.size(),
            available: shuffled.len(),
        });
    }

    let cards = spread
        .positions
        .iter()
        .zip(shuffled)
        .enumerate()
        .map(|(order, (position, card))| DrawnCard {
            uid: format!("{}-{}-{}", signature, card.id, order),
            position_id: position.id.clone(),
            revealed: false,
            reversed: rng.next_f64() > 0.5,
            order,
            card,
        })
        .collect();

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Arcana;
    use crate::spreads::{SpreadCatalog, SpreadPosition};

    fn seed(text: &str) -> Seed {
        Seed::parse(text).unwrap()
    }

    fn tiny_deck(n: usize) -> Deck {
        Deck::new(
            (0..n)
                .map(|i| {
                    let name = format!("Card {i}");
                    CardTemplate::new(format!("c{i}"), i as u8, name, "", Arcana::Minor)
                })
                .collect(),
        )
    }

    fn spread_of(n: usize) -> SpreadDefinition {
        (0..n).fold(SpreadDefinition::new("custom", "Custom", "", ""), |s, i| {
            s.with_position(SpreadPosition::new(format!("p{i}"), "", "", 0.0, 0.0))
        })
    }

    #[test]
    fn test_signature_format() {
        let sig = DrawSignature::new(&seed("alpha"), "single");
        assert_eq!(sig.as_str(), "alpha::single");
        assert_eq!(sig.to_string(), "alpha::single");
    }

    #[test]
    fn test_alpha_single_golden() {
        let deck = Deck::marseille();
        let catalog = SpreadCatalog::builtin();
        let result = draw(catalog.get("single").unwrap(), &deck, &seed("alpha")).unwrap();

        assert_eq!(result.len(), 1);
        let card = &result.cards()[0];
        assert_eq!(card.card().id, "coupes-02");
        assert_eq!(card.uid(), "alpha::single-coupes-02-0");
        assert_eq!(card.position_id(), "message");
        assert!(card.is_reversed());
        assert!(!card.is_revealed());
        assert_eq!(card.order(), 0);
    }

    #[test]
    fn test_alpha_linear_golden() {
        let deck = Deck::marseille();
        let catalog = SpreadCatalog::builtin();
        let result = draw(catalog.get("linear").unwrap(), &deck, &seed("alpha")).unwrap();

        let got: Vec<_> = result
            .cards()
            .iter()
            .map(|c| (c.card().id.as_str(), c.is_reversed()))
            .collect();
        assert_eq!(
            got,
            [("batons-09", false), ("coupes-valet", true), ("coupes-09", false)]
        );
    }

    #[test]
    fn test_insufficient_deck_size() {
        let deck = tiny_deck(3);
        let spread = spread_of(4);

        match draw(&spread, &deck, &seed("x")) {
            Err(TarotError::InsufficientDeckSize { required, available }) => {
                assert_eq!(required, 4);
                assert_eq!(available, 3);
            }
            other => panic!("expected InsufficientDeckSize, got {other:?}"),
        }
    }

    #[test]
    fn test_spread_equal_to_deck_size() {
        let deck = tiny_deck(5);
        let result = draw(&spread_of(5), &deck, &seed("full")).unwrap();

        let mut ids: Vec<_> = result.cards().iter().map(|c| c.card().id.clone()).collect();
        ids.sort();
        assert_eq!(ids, ["c0", "c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn test_zero_positions_consumes_only_shuffle() {
        let deck = tiny_deck(10);
        let spread = spread_of(0);
        let signature = DrawSignature::new(&seed("empty"), &spread.id);
        let mut rng = signature.rng();

        let cards = compose(&spread, &deck, &signature, &mut rng).unwrap();

        assert!(cards.is_empty());
        assert_eq!(rng.draws(), 9);
    }

    #[test]
    fn test_consumption_is_shuffle_plus_positions() {
        let deck = Deck::marseille();
        let spread = SpreadCatalog::builtin().get("mandala").cloned().unwrap();
        let signature = DrawSignature::new(&seed("count"), &spread.id);
        let mut rng = signature.rng();

        let _ = compose(&spread, &deck, &signature, &mut rng).unwrap();

        assert_eq!(rng.draws(), 77 + 10);
    }

    #[test]
    fn test_spread_id_changes_draw() {
        let deck = Deck::marseille();
        let s = seed("same seed");
        let a = draw(&spread_of(3), &deck, &s).unwrap();
        let b = draw(SpreadCatalog::builtin().get("linear").unwrap(), &deck, &s).unwrap();

        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_reveal_lifecycle() {
        let deck = tiny_deck(4);
        let mut result = draw(&spread_of(2), &deck, &seed("flip")).unwrap();
        let replay = result.replay(&spread_of(2), &deck).unwrap();

        let card = &mut result.cards_mut()[0];
        assert!(card.toggle_revealed());
        assert!(!card.toggle_revealed());
        card.reveal();
        assert!(card.is_revealed());

        // Reveal state does not affect replay identity.
        assert!(result.same_draw(&replay));
        assert_ne!(result, replay);
    }

    #[test]
    fn test_serialization_flattens_card() {
        let deck = Deck::marseille();
        let result = draw(
            SpreadCatalog::builtin().get("single").unwrap(),
            &deck,
            &seed("alpha"),
        )
        .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        let card = &json["cards"][0];
        assert_eq!(json["seed"], "alpha");
        assert_eq!(json["signature"], "alpha::single");
        assert_eq!(card["id"], "coupes-02");
        assert_eq!(card["position_id"], "message");
        assert_eq!(card["reversed"], true);

        let back: Draw = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
