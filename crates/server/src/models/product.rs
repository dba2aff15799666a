//! Catalog product model.

use clementine_core::ProductId;
use serde::{Deserialize, Serialize};

/// Catalog categories. The set is fixed; every seeded product belongs to
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Books,
    Sports,
}

impl Category {
    /// All categories in seeding order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Fashion,
        Self::Home,
        Self::Beauty,
        Self::Books,
        Self::Sports,
    ];

    /// Display name, as serialized and as shown to shoppers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::Home => "Home",
            Self::Beauty => "Beauty",
            Self::Books => "Books",
            Self::Sports => "Sports",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable catalog entry.
///
/// Products are created once at startup seeding and never mutated or
/// deleted afterwards. Prices are plain integers with no minor currency
/// unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price: i64,
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Electronics).expect("serialize");
        assert_eq!(json, "\"Electronics\"");
    }

    #[test]
    fn test_category_display_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
