//! Spread catalog: layouts and their positions.

pub mod catalog;
pub mod definition;

pub use catalog::SpreadCatalog;
pub use definition::{Emphasis, SpreadDefinition, SpreadPosition};
