//! Face catalog.
//!
//! The `Catalog` is the fixed pool a deal samples from. Each entry has a
//! display name (typically an asset key the view resolves to an image).
//!
//! ```
//! use memory_match::cards::Catalog;
//!
//! let catalog = Catalog::from_names(["ace", "king", "queen"]).unwrap();
//! let king = catalog.face_of("king").unwrap();
//! assert_eq!(catalog.name(king), Some("king"));
//! ```

use rustc_hash::FxHashMap;

use super::face::CardFace;
use crate::error::{MatchError, Result};

/// Registry of card faces.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    names: Vec<String>,
    by_name: FxHashMap<String, CardFace>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from names, assigning faces in order.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.register(name)?;
        }
        Ok(catalog)
    }

    /// Twelve faces, enough for the default 4×3 layout with room to vary.
    #[must_use]
    pub fn standard() -> Self {
        const NAMES: [&str; 12] = [
            "ace-of-spades",
            "king-of-hearts",
            "queen-of-diamonds",
            "jack-of-clubs",
            "ten-of-spades",
            "nine-of-hearts",
            "eight-of-diamonds",
            "seven-of-clubs",
            "six-of-spades",
            "five-of-hearts",
            "four-of-diamonds",
            "three-of-clubs",
        ];

        let mut catalog = Self::new();
        for name in NAMES {
            catalog.insert(name.to_string());
        }
        catalog
    }

    /// Register a face by name and return its assigned `CardFace`.
    pub fn register(&mut self, name: impl Into<String>) -> Result<CardFace> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(MatchError::DuplicateFace(name));
        }
        Ok(self.insert(name))
    }

    fn insert(&mut self, name: String) -> CardFace {
        let face = CardFace::new(self.names.len() as u32);
        self.by_name.insert(name.clone(), face);
        self.names.push(name);
        face
    }

    /// Display name of a face.
    #[must_use]
    pub fn name(&self, face: CardFace) -> Option<&str> {
        self.names.get(face.0 as usize).map(String::as_str)
    }

    /// Look up a face by its name.
    #[must_use]
    pub fn face_of(&self, name: &str) -> Option<CardFace> {
        self.by_name.get(name).copied()
    }

    /// Check if a face belongs to this catalog.
    #[must_use]
    pub fn contains(&self, face: CardFace) -> bool {
        (face.0 as usize) < self.names.len()
    }

    /// Get the number of faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All faces in registration order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        (0..self.names.len() as u32).map(CardFace::new)
    }
}
