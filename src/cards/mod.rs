//! Card system: faces, the face catalog, and placed cards.
//!
//! ## Key Types
//!
//! - `CardFace`: Identity of a printed image; two placed cards share one
//! - `Catalog`: The fixed set of faces a deal samples from
//! - `CardId`: Identity of one placed card in a deal
//! - `Card`: A placed card (id, face, grid position)

pub mod card;
pub mod catalog;
pub mod face;

pub use card::{Card, CardId, GridPosition};
pub use catalog::Catalog;
pub use face::CardFace;
