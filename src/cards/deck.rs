//! Ordered deck of card templates.
//!
//! The deck order is an input to the shuffle, so it is part of the replay
//! contract: reordering a catalog changes every historical draw.

use rustc_hash::FxHashMap;

use super::template::{Arcana, CardTemplate};

/// Immutable, ordered collection of card templates with id lookup.
///
/// ## Example
///
/// ```
/// use tarot_draw::cards::Deck;
///
/// let deck = Deck::marseille();
/// assert_eq!(deck.len(), 78);
/// assert_eq!(deck.get("arcane-00").unwrap().name, "Le Mat");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<CardTemplate>,
    index: FxHashMap<String, usize>,
}

impl Deck {
    /// Build a deck from templates in their canonical order.
    ///
    /// Panics if two templates share an id.
    #[must_use]
    pub fn new(cards: Vec<CardTemplate>) -> Self {
        let mut index = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), i).is_some() {
                panic!("Card with ID {:?} already in deck", card.id);
            }
        }
        Self { cards, index }
    }

    /// The 78-card Tarot de Marseille.
    #[must_use]
    pub fn marseille() -> Self {
        Self::new(super::marseille::cards())
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardTemplate> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Position of a card in the canonical order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Cards in canonical order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardTemplate] {
        &self.cards
    }

    /// Iterate over cards in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.iter()
    }

    /// Iterate over cards of one arcana.
    pub fn by_arcana(&self, arcana: Arcana) -> impl Iterator<Item = &CardTemplate> {
        self.cards.iter().filter(move |c| c.arcana == arcana)
    }

    /// Iterate over the major arcana.
    pub fn majors(&self) -> impl Iterator<Item = &CardTemplate> {
        self.by_arcana(Arcana::Major)
    }

    /// Iterate over the minor arcana.
    pub fn minors(&self) -> impl Iterator<Item = &CardTemplate> {
        self.by_arcana(Arcana::Minor)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardTemplate;
    type IntoIter = std::slice::Iter<'a, CardTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CardTemplate {
        CardTemplate::new(id, 0, id, "0", Arcana::Major)
    }

    #[test]
    fn test_lookup_and_order() {
        let deck = Deck::new(vec![card("a"), card("b"), card("c")]);

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.position("b"), Some(1));
        assert_eq!(deck.get("c").unwrap().id, "c");
        assert!(deck.get("z").is_none());

        let ids: Vec<_> = deck.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    #[should_panic(expected = "already in deck")]
    fn test_duplicate_id_panics() {
        let _ = Deck::new(vec![card("a"), card("a")]);
    }

    #[test]
    fn test_empty() {
        let deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.as_slice().len(), 0);
    }
}
