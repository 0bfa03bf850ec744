//! Tip catalog.
//!
//! An ordered, read-only list of tips fixed at startup. The default catalog
//! is compiled in; a TOML file with `[[tips]]` tables can replace it:
//!
//! ```toml
//! [[tips]]
//! text = "Compost food scraps to reduce landfill waste."
//! category = "Waste"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CatalogError;

/// A single piece of advice with its category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub text: String,
    pub category: String,
}

impl Tip {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Returned by the selector when the catalog has nothing to offer.
    pub fn fallback() -> Self {
        Self::new("No tips available yet.", "General")
    }

    /// Text and category are both non-blank.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.category.trim().is_empty()
    }
}

const BUILTIN_TIPS: &[(&str, &str)] = &[
    ("Turn off lights when leaving a room for more than a few minutes.", "Energy"),
    ("Use a reusable water bottle instead of buying single-use plastic bottles.", "Water"),
    ("Combine errands into a single trip to reduce driving.", "Transport"),
    ("Choose second-hand or vintage clothing before buying new.", "Fashion"),
    ("Plan meals for the week to avoid food waste and impulse buying.", "Food"),
    ("Wash clothes in cold water whenever possible to save energy.", "Energy"),
    ("Take shorter showers and turn off the tap while soaping.", "Water"),
    ("Bring your own bag when grocery shopping to avoid disposable bags.", "Food"),
    ("Have one meat-free day each week to reduce your footprint.", "Food"),
    ("Walk or cycle short distances instead of driving.", "Transport"),
    ("Sort recyclables properly to avoid contamination.", "Waste"),
    ("Choose products with minimal or recyclable packaging.", "Waste"),
    ("Compost food scraps to reduce landfill waste.", "Waste"),
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tips: Vec<Tip>,
}

/// Ordered, immutable list of tips.
#[derive(Debug, Clone, Default)]
pub struct TipCatalog {
    tips: Vec<Tip>,
}

impl TipCatalog {
    /// Build a catalog, rejecting tips with blank fields.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyField`] for the first invalid tip.
    pub fn new(tips: Vec<Tip>) -> Result<Self, CatalogError> {
        for (index, tip) in tips.iter().enumerate() {
            if tip.text.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "text" });
            }
            if tip.category.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "category",
                });
            }
        }
        Ok(Self { tips })
    }

    /// The built-in sustainability tips.
    pub fn builtin() -> Self {
        Self {
            tips: BUILTIN_TIPS
                .iter()
                .map(|(text, category)| Tip::new(*text, *category))
                .collect(),
        }
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    /// Returns [`CatalogError::LoadFailed`] if the file cannot be read or
    /// parsed, or [`CatalogError::EmptyField`] if a tip is blank.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| CatalogError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::new(file.tips)
    }

    pub fn size(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Tip at `index`.
    ///
    /// # Errors
    /// Returns [`CatalogError::IndexOutOfBounds`] if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&Tip, CatalogError> {
        self.tips.get(index).ok_or(CatalogError::IndexOutOfBounds {
            index,
            len: self.tips.len(),
        })
    }

    /// Index of the first tip equal to `tip`.
    pub fn position(&self, tip: &Tip) -> Option<usize> {
        self.tips.iter().position(|t| t == tip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tip> {
        self.tips.iter()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for tip in &self.tips {
            if !seen.contains(&tip.category.as_str()) {
                seen.push(&tip.category);
            }
        }
        seen
    }
}
