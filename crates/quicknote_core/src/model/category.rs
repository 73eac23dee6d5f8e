//! Note category enumeration.
//!
//! # Responsibility
//! - Define the closed set of note categories and their display labels.
//! - Keep the ordered "all categories" list next to the enum declaration.
//!
//! # Invariants
//! - Exactly three categories exist; the set is closed at compile time.
//! - `Category::ALL` reflects the declared variant order.
//! - `label` and `parse_label` round-trip for every variant.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Fixed note category.
///
/// Serialized with its human-readable label so the wire shape matches the
/// labels the mobile shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Work tasks, study material, professional follow-ups.
    #[serde(rename = "Work and Study")]
    WorkAndStudy,
    /// Everyday life: errands, shopping, household.
    #[serde(rename = "Life")]
    Life,
    /// Exercise, sleep, medical appointments, wellbeing habits.
    #[serde(rename = "Health and Well-being")]
    HealthAndWellBeing,
}

impl Category {
    /// All categories in declared order.
    ///
    /// This is the canonical ordering for every category-grouped view; it is
    /// defined here, next to the variants, so the enum and the list cannot
    /// drift apart.
    pub const ALL: [Category; 3] = [
        Category::WorkAndStudy,
        Category::Life,
        Category::HealthAndWellBeing,
    ];

    /// Returns the display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::WorkAndStudy => "Work and Study",
            Category::Life => "Life",
            Category::HealthAndWellBeing => "Health and Well-being",
        }
    }

    /// Parses a display label back into a category.
    ///
    /// Returns `None` for anything outside the closed set; callers surface
    /// that as their own error shape.
    pub fn parse_label(value: &str) -> Option<Category> {
        match value {
            "Work and Study" => Some(Category::WorkAndStudy),
            "Life" => Some(Category::Life),
            "Health and Well-being" => Some(Category::HealthAndWellBeing),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
