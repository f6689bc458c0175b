//! Card catalog: templates and the ordered deck.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Static card data (name, arcana, keywords, palette)
//! - `Deck`: Ordered, read-only list of templates with id lookup
//!
//! The draw engine never mutates or reorders a `Deck`; shuffling always
//! works on a copy.

pub mod deck;
mod marseille;
pub mod template;

pub use deck::Deck;
pub use template::{Arcana, CardTemplate, Keywords, Palette, Suit};
