//! Catalog query engine: filtering, lookup, and recommendations.

use std::sync::Arc;

use clementine_core::ProductId;

use crate::error::AppError;
use crate::models::Product;
use crate::store::CatalogStore;

/// Read-only queries over the seeded catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    #[must_use]
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Filter the catalog by free-text search and category.
    ///
    /// Both inputs are trimmed and lowercased. A category of `""` or
    /// `"all"` matches every category; the search term matches when it is
    /// a substring of the lowercased name or description. Filters are
    /// conjunctive. Results come back in ascending id order, unpaginated.
    #[must_use]
    pub fn list(&self, search: &str, category: &str) -> Vec<Product> {
        let search = normalize(search);
        let category = normalize(category);

        self.store
            .iter()
            .filter(|product| matches_category(product, &category))
            .filter(|product| matches_search(product, &search))
            .cloned()
            .collect()
    }

    /// Lookup by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if no product has that id.
    pub fn get_by_id(&self, id: ProductId) -> Result<Product, AppError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))
    }

    /// Up to `limit` products matching the free text, falling back to the
    /// `limit` cheapest products catalog-wide when nothing matches (ties
    /// kept in catalog order). Never empty while the catalog is non-empty.
    #[must_use]
    pub fn recommend(&self, user_message: &str, limit: usize) -> Vec<Product> {
        let limit = limit.max(1);

        let matched = self.list(user_message, "All");
        if !matched.is_empty() {
            return matched.into_iter().take(limit).collect();
        }

        let mut cheapest: Vec<Product> = self.store.iter().cloned().collect();
        // Stable sort keeps catalog order among equal prices
        cheapest.sort_by_key(|product| product.price);
        cheapest.truncate(limit);
        cheapest
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn matches_category(product: &Product, category: &str) -> bool {
    if category.is_empty() || category == "all" {
        return true;
    }
    product.category.as_str().to_lowercase() == category
}

fn matches_search(product: &Product, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(search)
        || product.description.to_lowercase().contains(search)
}

#[cfg(test)]
mod tests {
    use crate::models::Category;

    use super::*;

    fn product(id: i32, name: &str, category: Category, description: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category,
            description: description.to_string(),
            price,
            rating: 4.0,
        }
    }

    fn sample_catalog() -> CatalogService {
        CatalogService::new(Arc::new(CatalogStore::new(vec![
            product(1, "Wireless Headphones", Category::Electronics, "Noise cancelling", 100),
            product(2, "Linen Shirt", Category::Fashion, "Breathable summer wear", 50),
            product(3, "T-Shirt Press", Category::Home, "Prints on any shirt", 200),
        ])))
    }

    #[test]
    fn test_list_all_returns_everything_ascending() {
        let catalog = sample_catalog();
        let ids: Vec<i32> = catalog
            .list("", "All")
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_filters_are_conjunctive() {
        let catalog = sample_catalog();
        // "shirt" appears in the Fashion product's name and in two others,
        // but only Fashion survives the category filter.
        let results = catalog.list("shirt", "Fashion");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_i32(), 2);
    }

    #[test]
    fn test_list_search_is_case_insensitive_and_spans_description() {
        let catalog = sample_catalog();
        let results = catalog.list("  NOISE  ", "all");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_i32(), 1);
    }

    #[test]
    fn test_list_unknown_category_matches_nothing() {
        let catalog = sample_catalog();
        assert!(catalog.list("", "Garden").is_empty());
    }

    #[test]
    fn test_get_by_id_not_found() {
        let catalog = sample_catalog();
        let err = catalog.get_by_id(ProductId::new(99)).expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_recommend_prefers_matches_in_catalog_order() {
        let catalog = sample_catalog();
        let picks = catalog.recommend("shirt", 5);
        let ids: Vec<i32> = picks.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_recommend_falls_back_to_cheapest() {
        let catalog = sample_catalog();
        let picks = catalog.recommend("nonsense", 2);
        let ids: Vec<i32> = picks.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_recommend_clamps_limit_to_one() {
        let catalog = sample_catalog();
        assert_eq!(catalog.recommend("nonsense", 0).len(), 1);
    }

    #[test]
    fn test_recommend_fallback_keeps_catalog_order_on_price_ties() {
        let catalog = CatalogService::new(Arc::new(CatalogStore::new(vec![
            product(1, "A", Category::Books, "", 100),
            product(2, "B", Category::Books, "", 100),
            product(3, "C", Category::Books, "", 100),
        ])));
        let ids: Vec<i32> = catalog
            .recommend("zzz", 3)
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_recommend_never_empty_on_non_empty_catalog() {
        let catalog = sample_catalog();
        assert!(!catalog.recommend("zzzzzz", 3).is_empty());
    }
}
