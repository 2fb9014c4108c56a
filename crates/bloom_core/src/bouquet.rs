//! Bouquet domain types.

use serde::{Deserialize, Serialize};

/// A named bouquet holding an ordered list of flowers.
///
/// The flower list is the collection that actions mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bouquet {
    pub name: String,
    pub flowers: Vec<String>,
}

impl Bouquet {
    /// Create an empty bouquet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flowers: Vec::new(),
        }
    }

    /// Number of flowers in the bouquet.
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }
}

/// A priced bouquet without any extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBouquet {
    pub name: String,
    pub base_price: f64,
}

impl BasicBouquet {
    pub fn new(name: impl Into<String>, base_price: f64) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }

    pub fn description(&self) -> String {
        self.name.clone()
    }

    pub fn price(&self) -> f64 {
        self.base_price
    }
}
