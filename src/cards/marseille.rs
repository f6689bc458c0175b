//! Tarot de Marseille catalog.
//!
//! Canonical order: the 22 major arcana (Le Mat, then I to XXI), followed by
//! Bâtons, Coupes, Épées and Deniers, each As, 2-10, Valet, Cavalier, Reine,
//! Roi. This order is frozen.

use super::template::{Arcana, CardTemplate, Palette, Suit};

struct MajorEntry {
    name: &'static str,
    roman: &'static str,
    description: &'static str,
    keywords: [&'static str; 3],
    palette: [&'static str; 3],
}

const MAJORS: [MajorEntry; 22] = [
    MajorEntry {
        name: "Le Mat",
        roman: "0",
        description: "A traveller with a bundle walks on, unbothered by the dog at his heels.",
        keywords: ["freedom", "leap", "wandering"],
        palette: ["#f4c95d", "#3a6ea5", "#fff3c4"],
    },
    MajorEntry {
        name: "Le Bateleur",
        roman: "I",
        description: "A young conjurer arranges his tools on a table, ready to begin.",
        keywords: ["initiative", "skill", "beginning"],
        palette: ["#e4572e", "#f3a712", "#ffe8a3"],
    },
    MajorEntry {
        name: "La Papesse",
        roman: "II",
        description: "A veiled woman holds a closed book, keeper of patient knowledge.",
        keywords: ["intuition", "study", "secrecy"],
        palette: ["#3a6ea5", "#c0d6df", "#eaf2f6"],
    },
    MajorEntry {
        name: "L'Impératrice",
        roman: "III",
        description: "A crowned woman holds a shield and sceptre, fertile and creative.",
        keywords: ["creativity", "abundance", "expression"],
        palette: ["#6a994e", "#f2e8cf", "#a7c957"],
    },
    MajorEntry {
        name: "L'Empereur",
        roman: "IIII",
        description: "A seated ruler in profile, anchored in structure and authority.",
        keywords: ["structure", "authority", "stability"],
        palette: ["#bc4749", "#386641", "#f2e8cf"],
    },
    MajorEntry {
        name: "Le Pape",
        roman: "V",
        description: "A teacher blesses two disciples, bridging tradition and the listener.",
        keywords: ["teaching", "tradition", "counsel"],
        palette: ["#9c6644", "#e6ccb2", "#ede0d4"],
    },
    MajorEntry {
        name: "L'Amoureux",
        roman: "VI",
        description: "A young man stands between two women while Cupid takes aim above.",
        keywords: ["choice", "union", "desire"],
        palette: ["#ef476f", "#ffd166", "#fff0f3"],
    },
    MajorEntry {
        name: "Le Chariot",
        roman: "VII",
        description: "A crowned prince drives two horses forward under a canopy.",
        keywords: ["drive", "victory", "movement"],
        palette: ["#118ab2", "#ffd166", "#d7f3ff"],
    },
    MajorEntry {
        name: "La Justice",
        roman: "VIII",
        description: "A judge holds sword and scales, weighing what is due.",
        keywords: ["balance", "truth", "decision"],
        palette: ["#d62828", "#fcbf49", "#fdf0d5"],
    },
    MajorEntry {
        name: "L'Ermite",
        roman: "VIIII",
        description: "An old man lifts a lantern, searching slowly and alone.",
        keywords: ["introspection", "patience", "wisdom"],
        palette: ["#264653", "#e9c46a", "#f4f1de"],
    },
    MajorEntry {
        name: "La Roue de Fortune",
        roman: "X",
        description: "Strange creatures ride a turning wheel that no one steers.",
        keywords: ["cycles", "chance", "change"],
        palette: ["#f77f00", "#003049", "#fcbf49"],
    },
    MajorEntry {
        name: "La Force",
        roman: "XI",
        description: "A woman calmly opens a lion's jaws with her bare hands.",
        keywords: ["courage", "mastery", "vitality"],
        palette: ["#e76f51", "#f4a261", "#ffe5d9"],
    },
    MajorEntry {
        name: "Le Pendu",
        roman: "XII",
        description: "A man hangs by one foot between two trees, serene and suspended.",
        keywords: ["pause", "surrender", "perspective"],
        palette: ["#2a9d8f", "#e9c46a", "#e0fbfc"],
    },
    MajorEntry {
        name: "L'Arcane sans nom",
        roman: "XIII",
        description: "A skeleton mows a dark field where heads and hands sprout anew.",
        keywords: ["transformation", "ending", "renewal"],
        palette: ["#1d1d1d", "#9d0208", "#e5e5e5"],
    },
    MajorEntry {
        name: "Tempérance",
        roman: "XIIII",
        description: "A winged figure pours liquid between two vessels without spilling.",
        keywords: ["harmony", "healing", "moderation"],
        palette: ["#4cc9f0", "#4361ee", "#e0f7ff"],
    },
    MajorEntry {
        name: "Le Diable",
        roman: "XV",
        description: "A horned figure holds two small devils by loose cords.",
        keywords: ["passion", "attachment", "energy"],
        palette: ["#6a040f", "#ffba08", "#370617"],
    },
    MajorEntry {
        name: "La Maison Dieu",
        roman: "XVI",
        description: "Lightning strikes a tower and two figures tumble to the ground.",
        keywords: ["upheaval", "release", "revelation"],
        palette: ["#dc2f02", "#ffba08", "#fff3b0"],
    },
    MajorEntry {
        name: "L'Étoile",
        roman: "XVII",
        description: "A kneeling woman pours two jugs under a sky of stars.",
        keywords: ["hope", "generosity", "inspiration"],
        palette: ["#48cae4", "#caf0f8", "#fefae0"],
    },
    MajorEntry {
        name: "La Lune",
        roman: "XVIII",
        description: "Two dogs howl at the moon while a crayfish rises from the pool.",
        keywords: ["dreams", "mystery", "receptivity"],
        palette: ["#5a189a", "#9d4edd", "#e0aaff"],
    },
    MajorEntry {
        name: "Le Soleil",
        roman: "XVIIII",
        description: "Two children stand together beneath a radiant sun.",
        keywords: ["joy", "clarity", "warmth"],
        palette: ["#ffb703", "#fb8500", "#fff8e1"],
    },
    MajorEntry {
        name: "Le Jugement",
        roman: "XX",
        description: "An angel sounds a trumpet and figures rise from the earth.",
        keywords: ["awakening", "calling", "rebirth"],
        palette: ["#8ecae6", "#219ebc", "#f1faee"],
    },
    MajorEntry {
        name: "Le Monde",
        roman: "XXI",
        description: "A dancer moves within a wreath, surrounded by the four living beings.",
        keywords: ["completion", "wholeness", "achievement"],
        palette: ["#2d6a4f", "#95d5b2", "#d8f3dc"],
    },
];

/// Rank labels for minor arcana, As to Roi.
const RANKS: [(&str, &str, &str); 14] = [
    ("as", "As", "I"),
    ("02", "Deux", "II"),
    ("03", "Trois", "III"),
    ("04", "Quatre", "IIII"),
    ("05", "Cinq", "V"),
    ("06", "Six", "VI"),
    ("07", "Sept", "VII"),
    ("08", "Huit", "VIII"),
    ("09", "Neuf", "VIIII"),
    ("10", "Dix", "X"),
    ("valet", "Valet", "Valet"),
    ("cavalier", "Cavalier", "Cavalier"),
    ("reine", "Reine", "Reine"),
    ("roi", "Roi", "Roi"),
];

/// Meaning of each rank, independent of suit.
const RANK_THEMES: [&str; 14] = [
    "seed",
    "encounter",
    "growth",
    "foundation",
    "test",
    "pleasure",
    "action",
    "order",
    "threshold",
    "fulfilment",
    "discovery",
    "mission",
    "care",
    "mastery",
];

struct SuitTheme {
    domain: &'static str,
    element: &'static str,
    palette: [&'static str; 3],
}

const fn suit_theme(suit: Suit) -> SuitTheme {
    match suit {
        Suit::Batons => SuitTheme {
            domain: "creative and vital energy",
            element: "fire",
            palette: ["#d00000", "#ffba08", "#ffe8d6"],
        },
        Suit::Coupes => SuitTheme {
            domain: "feelings and relationships",
            element: "water",
            palette: ["#0077b6", "#90e0ef", "#e0fbfc"],
        },
        Suit::Epees => SuitTheme {
            domain: "thought and decisions",
            element: "air",
            palette: ["#495057", "#adb5bd", "#f8f9fa"],
        },
        Suit::Deniers => SuitTheme {
            domain: "body, work and material life",
            element: "earth",
            palette: ["#a47148", "#e9c46a", "#fefae0"],
        },
    }
}

fn major(number: u8, entry: &MajorEntry) -> CardTemplate {
    let [primary, secondary, highlight] = entry.palette;
    CardTemplate::new(
        format!("arcane-{number:02}"),
        number,
        entry.name,
        entry.roman,
        Arcana::Major,
    )
    .with_description(entry.description)
    .with_keywords(entry.keywords)
    .with_palette(Palette::new(primary, secondary, highlight))
}

fn minor(suit: Suit, rank_index: usize) -> CardTemplate {
    let (slug, rank_name, roman) = RANKS[rank_index];
    let theme = suit_theme(suit);
    let rank_theme = RANK_THEMES[rank_index];
    let [primary, secondary, highlight] = theme.palette;

    let name = format!("{rank_name} {}", suit.of_name());

    CardTemplate::new(
        format!("{}-{slug}", suit.slug()),
        (rank_index + 1) as u8,
        name,
        roman,
        Arcana::Minor,
    )
    .with_suit(suit)
    .with_description(format!(
        "{} in the domain of {}.",
        capitalize(rank_theme),
        theme.domain
    ))
    .with_keywords([rank_theme, theme.element, suit.slug()])
    .with_palette(Palette::new(primary, secondary, highlight))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// All 78 cards in canonical order.
pub(crate) fn cards() -> Vec<CardTemplate> {
    let mut cards = Vec::with_capacity(78);
    for (number, entry) in MAJORS.iter().enumerate() {
        cards.push(major(number as u8, entry));
    }
    for suit in Suit::ALL {
        for rank_index in 0..RANKS.len() {
            cards.push(minor(suit, rank_index));
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let cards = cards();
        assert_eq!(cards.len(), 78);
        assert_eq!(cards.iter().filter(|c| c.is_major()).count(), 22);
        assert_eq!(cards.iter().filter(|c| !c.is_major()).count(), 56);
    }

    #[test]
    fn test_canonical_order_endpoints() {
        let cards = cards();
        assert_eq!(cards[0].id, "arcane-00");
        assert_eq!(cards[0].name, "Le Mat");
        assert_eq!(cards[21].id, "arcane-21");
        assert_eq!(cards[21].name, "Le Monde");
        assert_eq!(cards[22].id, "batons-as");
        assert_eq!(cards[35].id, "batons-roi");
        assert_eq!(cards[36].id, "coupes-as");
        assert_eq!(cards[77].id, "deniers-roi");
    }

    #[test]
    fn test_minor_fields() {
        let cards = cards();
        let card = cards.iter().find(|c| c.id == "epees-07").unwrap();

        assert_eq!(card.name, "Sept d'Épées");
        assert_eq!(card.roman, "VII");
        assert_eq!(card.number, 7);
        assert_eq!(card.suit, Some(Suit::Epees));
        assert_eq!(card.keywords.as_slice(), ["action", "air", "epees"]);
        assert!(card.description.starts_with("Action in the domain of thought"));
    }

    #[test]
    fn test_number_is_arcana_number_or_rank() {
        let cards = cards();
        let number = |id: &str| cards.iter().find(|c| c.id == id).unwrap().number;

        assert_eq!(number("arcane-00"), 0);
        assert_eq!(number("arcane-21"), 21);
        assert_eq!(number("coupes-as"), 1);
        assert_eq!(number("coupes-10"), 10);
        assert_eq!(number("coupes-valet"), 11);
        assert_eq!(number("coupes-cavalier"), 12);
        assert_eq!(number("coupes-reine"), 13);
        assert_eq!(number("coupes-roi"), 14);

        for card in &cards {
            assert_eq!(card.suit.is_none(), card.is_major(), "{}", card.id);
        }
    }

    #[test]
    fn test_every_card_has_text() {
        for card in cards() {
            assert!(!card.name.is_empty(), "{}", card.id);
            assert!(!card.description.is_empty(), "{}", card.id);
            assert_eq!(card.keywords.len(), 3, "{}", card.id);
            assert!(card.palette.primary.starts_with('#'), "{}", card.id);
        }
    }
}
