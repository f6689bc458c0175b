//! Spread definitions: named layouts of card positions.
//!
//! A spread with N positions draws exactly N cards, one per position,
//! in declared order.

use serde::{Deserialize, Serialize};

use crate::cards::Keywords;

/// Emphasis tag on a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// The focal card of the layout.
    Primary,
}

/// One slot in a spread layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadPosition {
    /// Unique identifier within its spread.
    pub id: String,

    /// Display title.
    pub title: String,

    /// What a card in this slot speaks to.
    pub description: String,

    /// Horizontal placement, percent of the layout width.
    pub x: f32,

    /// Vertical placement, percent of the layout height.
    pub y: f32,

    /// Rotation in degrees, if the slot is not upright.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,

    /// Emphasis tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

impl SpreadPosition {
    /// Create a position at `(x, y)` percent.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            x,
            y,
            rotation: None,
            emphasis: None,
        }
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Mark as the primary position.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.emphasis = Some(Emphasis::Primary);
        self
    }

    /// Check if this is the primary position.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.emphasis == Some(Emphasis::Primary)
    }
}

/// A named layout.
///
/// ## Example
///
/// ```
/// use tarot_draw::spreads::{SpreadDefinition, SpreadPosition};
///
/// let spread = SpreadDefinition::new("pair", "Pair", "Two cards", "Side by side.")
///     .with_position(SpreadPosition::new("left", "Left", "One side", 30.0, 50.0))
///     .with_position(SpreadPosition::new("right", "Right", "Other side", 70.0, 50.0));
///
/// assert_eq!(spread.size(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadDefinition {
    /// Unique identifier, part of every draw signature.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short tagline shown above the name.
    pub subtitle: String,

    /// Longer description.
    pub description: String,

    /// Positions in draw order.
    pub positions: Vec<SpreadPosition>,

    /// Keyword tags.
    pub keywords: Keywords,
}

impl SpreadDefinition {
    /// Create a spread with no positions.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            positions: Vec::new(),
            keywords: Keywords::new(),
        }
    }

    /// Append a position.
    ///
    /// Panics if the position id is already used in this spread.
    #[must_use]
    pub fn with_position(mut self, position: SpreadPosition) -> Self {
        assert!(
            self.get_position(&position.id).is_none(),
            "Position {:?} already defined in spread {:?}",
            position.id,
            self.id
        );
        self.positions.push(position);
        self
    }

    /// Set the keyword tags.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Number of cards this spread draws.
    #[must_use]
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Get a position by id.
    #[must_use]
    pub fn get_position(&self, id: &str) -> Option<&SpreadPosition> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Position ids in draw order.
    pub fn position_ids(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|p| p.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_builder() {
        let pos = SpreadPosition::new("core", "Core", "The heart", 50.0, 50.0)
            .rotated(90.0)
            .primary();

        assert_eq!(pos.rotation, Some(90.0));
        assert!(pos.is_primary());
    }

    #[test]
    fn test_spread_builder() {
        let spread = SpreadDefinition::new("duo", "Duo", "Two", "Two cards")
            .with_position(SpreadPosition::new("a", "A", "", 25.0, 50.0))
            .with_position(SpreadPosition::new("b", "B", "", 75.0, 50.0))
            .with_keywords(["pair"]);

        assert_eq!(spread.size(), 2);
        assert_eq!(spread.position_ids().collect::<Vec<_>>(), ["a", "b"]);
        assert!(spread.get_position("b").is_some());
        assert!(spread.get_position("c").is_none());
    }

    #[test]
    #[should_panic(expected = "already defined")]
    fn test_duplicate_position_panics() {
        let _ = SpreadDefinition::new("dup", "Dup", "", "")
            .with_position(SpreadPosition::new("a", "A", "", 0.0, 0.0))
            .with_position(SpreadPosition::new("a", "A again", "", 1.0, 1.0));
    }

    #[test]
    fn test_serialization_skips_empty_options() {
        let pos = SpreadPosition::new("a", "A", "", 10.0, 20.0);
        let json = serde_json::to_string(&pos).unwrap();
        assert!(!json.contains("rotation"));
        assert!(!json.contains("emphasis"));

        let primary = pos.primary();
        let json = serde_json::to_string(&primary).unwrap();
        assert!(json.contains("\"emphasis\":\"primary\""));
    }
}
