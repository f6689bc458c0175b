//! Spread catalog for lookup by id.
//!
//! `SpreadCatalog::builtin()` holds the four layouts offered by the
//! selector, in selector order.

use rustc_hash::FxHashMap;

use super::definition::{SpreadDefinition, SpreadPosition};
use crate::error::{Result, TarotError};

/// Registry of spread definitions, iterated in registration order.
#[derive(Clone, Debug, Default)]
pub struct SpreadCatalog {
    spreads: Vec<SpreadDefinition>,
    index: FxHashMap<String, usize>,
}

impl SpreadCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in spreads: single, linear, cross, mandala.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(single());
        catalog.register(linear());
        catalog.register(cross());
        catalog.register(mandala());
        catalog
    }

    /// Register a spread.
    ///
    /// Panics if a spread with the same id already exists.
    pub fn register(&mut self, spread: SpreadDefinition) {
        if self.index.contains_key(&spread.id) {
            panic!("Spread with ID {:?} already registered", spread.id);
        }
        self.index.insert(spread.id.clone(), self.spreads.len());
        self.spreads.push(spread);
    }

    /// Get a spread by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SpreadDefinition> {
        self.index.get(id).map(|&i| &self.spreads[i])
    }

    /// Get a spread by id, or `UnknownSpread`.
    pub fn get_or_err(&self, id: &str) -> Result<&SpreadDefinition> {
        self.get(id)
            .ok_or_else(|| TarotError::UnknownSpread(id.to_string()))
    }

    /// Check if a spread id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over spreads in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SpreadDefinition> {
        self.spreads.iter()
    }

    /// Spread ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.spreads.iter().map(|s| s.id.as_str())
    }

    /// Get the number of registered spreads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }
}

fn single() -> SpreadDefinition {
    SpreadDefinition::new(
        "single",
        "Single card",
        "Quick insight",
        "One card to light up the question of the moment.",
    )
    .with_position(
        SpreadPosition::new("message", "Message", "The answer the cards offer now", 50.0, 50.0)
            .primary(),
    )
    .with_keywords(["clarity", "daily", "focus"])
}

fn linear() -> SpreadDefinition {
    SpreadDefinition::new(
        "linear",
        "Line of time",
        "Three cards",
        "Past, present and future laid out from left to right.",
    )
    .with_position(SpreadPosition::new("past", "Past", "What has shaped the situation", 20.0, 50.0))
    .with_position(
        SpreadPosition::new("present", "Present", "What is at work now", 50.0, 50.0).primary(),
    )
    .with_position(SpreadPosition::new("future", "Future", "Where things are heading", 80.0, 50.0))
    .with_keywords(["timeline", "evolution", "narrative"])
}

fn cross() -> SpreadDefinition {
    SpreadDefinition::new(
        "cross",
        "Marseille cross",
        "Five cards",
        "The classic cross: for, against, verdict, outcome and synthesis.",
    )
    .with_position(SpreadPosition::new("for", "For", "What supports you", 22.0, 50.0))
    .with_position(SpreadPosition::new("against", "Against", "What stands in the way", 78.0, 50.0))
    .with_position(SpreadPosition::new(
        "verdict",
        "Verdict",
        "How the matter is judged",
        50.0,
        15.0,
    ))
    .with_position(SpreadPosition::new("outcome", "Outcome", "Where it resolves", 50.0, 85.0))
    .with_position(
        SpreadPosition::new("synthesis", "Synthesis", "The heart of the question", 50.0, 50.0)
            .primary(),
    )
    .with_keywords(["decision", "balance", "tradition"])
}

fn mandala() -> SpreadDefinition {
    SpreadDefinition::new(
        "mandala",
        "Great mandala",
        "Ten cards",
        "A full circle around the self for a deep, many-sided reading.",
    )
    .with_position(
        SpreadPosition::new("self", "Self", "Who you are in this moment", 50.0, 50.0).primary(),
    )
    .with_position(SpreadPosition::new("spirit", "Spirit", "What inspires you", 50.0, 12.0))
    .with_position(
        SpreadPosition::new("ambition", "Ambition", "What you reach for", 77.0, 23.0).rotated(45.0),
    )
    .with_position(
        SpreadPosition::new("action", "Action", "How you move", 88.0, 50.0).rotated(90.0),
    )
    .with_position(
        SpreadPosition::new("resources", "Resources", "What you can rely on", 77.0, 77.0)
            .rotated(135.0),
    )
    .with_position(SpreadPosition::new("roots", "Roots", "Where you come from", 50.0, 88.0))
    .with_position(
        SpreadPosition::new("bonds", "Bonds", "The people around you", 23.0, 77.0).rotated(-135.0),
    )
    .with_position(
        SpreadPosition::new("feelings", "Feelings", "What moves you", 12.0, 50.0).rotated(-90.0),
    )
    .with_position(
        SpreadPosition::new("shadow", "Shadow", "What you avoid seeing", 23.0, 23.0).rotated(-45.0),
    )
    .with_position(SpreadPosition::new("path", "Path", "The road that opens", 50.0, 70.0))
    .with_keywords(["depth", "wholeness", "journey"])
}
