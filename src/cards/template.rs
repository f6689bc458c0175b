//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a tarot card.
//! Draw-specific data (position, orientation, reveal state) lives in
//! `DrawnCard`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Keyword list. Every catalog card has at most four keywords.
pub type Keywords = SmallVec<[String; 4]>;

/// Major or minor arcana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    Major,
    Minor,
}

impl Arcana {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Arcana::Major => "Major arcana",
            Arcana::Minor => "Minor arcana",
        }
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Arcana::Major => "major",
            Arcana::Minor => "minor",
        })
    }
}

impl std::str::FromStr for Arcana {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Arcana::Major),
            "minor" => Ok(Arcana::Minor),
            other => Err(format!("unknown arcana '{other}' (expected major or minor)")),
        }
    }
}

/// Minor arcana suit, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Batons,
    Coupes,
    Epees,
    Deniers,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Batons, Suit::Coupes, Suit::Epees, Suit::Deniers];

    /// Identifier fragment used in card ids.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Suit::Batons => "batons",
            Suit::Coupes => "coupes",
            Suit::Epees => "epees",
            Suit::Deniers => "deniers",
        }
    }

    /// Suit name with its French article, e.g. "de Coupes", "d'Épées".
    #[must_use]
    pub const fn of_name(self) -> &'static str {
        match self {
            Suit::Batons => "de Bâtons",
            Suit::Coupes => "de Coupes",
            Suit::Epees => "d'Épées",
            Suit::Deniers => "de Deniers",
        }
    }

    /// French suit name as printed on Marseille cards.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Batons => "Bâtons",
            Suit::Coupes => "Coupes",
            Suit::Epees => "Épées",
            Suit::Deniers => "Deniers",
        }
    }
}

/// Card colours as CSS hex strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub highlight: String,
}

impl Palette {
    /// Create a palette from three hex colours.
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        highlight: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            highlight: highlight.into(),
        }
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use tarot_draw::cards::{Arcana, CardTemplate, Palette};
///
/// let fool = CardTemplate::new("arcane-00", 0, "Le Mat", "0", Arcana::Major)
///     .with_description("Freedom and the open road.")
///     .with_keywords(["freedom", "leap"])
///     .with_palette(Palette::new("#f4c95d", "#3a6ea5", "#fff3c4"));
///
/// assert_eq!(fool.keywords.len(), 2);
/// assert!(fool.is_major());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier within a deck.
    pub id: String,

    /// Number within its arcana (0-21 for majors, 1-14 for minors).
    pub number: u8,

    /// Card name.
    pub name: String,

    /// Roman numeral or court label printed on the card.
    pub roman: String,

    /// Major or minor arcana.
    pub arcana: Arcana,

    /// Suit for minor arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,

    /// Short descriptive text.
    pub description: String,

    /// Keyword tags.
    pub keywords: Keywords,

    /// Display colours.
    pub palette: Palette,
}

impl CardTemplate {
    /// Create a card template with empty text and a neutral palette.
    pub fn new(
        id: impl Into<String>,
        number: u8,
        name: impl Into<String>,
        roman: impl Into<String>,
        arcana: Arcana,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            roman: roman.into(),
            arcana,
            suit: None,
            description: String::new(),
            keywords: Keywords::new(),
            palette: Palette::new("#cccccc", "#888888", "#ffffff"),
        }
    }

    /// Set the suit (minor arcana).
    #[must_use]
    pub fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
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

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check if this is a major arcana card.
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}
