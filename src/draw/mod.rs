//! Draw engine: signature, composition and the reading lifecycle.
//!
//! ## Key Types
//!
//! - `DrawSignature`: Generator key, `"{seed}::{spread_id}"`
//! - `DrawnCard`: A card on a position, with orientation fixed at draw time
//! - `Draw`: The ordered cards of one draw plus its seed and signature
//! - `Reading`: A draw being revealed by its consumer

pub mod composer;
pub mod reading;

pub use composer::{compose, draw, Draw, DrawSignature, DrawnCard};
pub use reading::{CardSummary, Reading, ReadingSummary};
