//! Immutable catalog store with deterministic seeding.

use std::collections::HashMap;

use clementine_core::ProductId;

use crate::models::{Category, Product};

/// Holds the immutable product records. Seeded once at startup; lookups
/// and full scans afterwards never observe mutation.
#[derive(Debug)]
pub struct CatalogStore {
    /// Products in ascending id order.
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a store from arbitrary products, e.g. in tests. Products are
    /// sorted into ascending id order.
    #[must_use]
    pub fn new(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|product| product.id);
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();
        Self { products, index }
    }

    /// Seed `count` deterministic products across the fixed category set.
    ///
    /// Ids start at 1; name, price, and rating are derived from the id so
    /// restarts always produce the same catalog.
    #[must_use]
    pub fn seed(count: usize) -> Self {
        let categories = Category::ALL;
        let products = (0..count)
            .map(|index| {
                let id = i64::try_from(index).unwrap_or(i64::MAX) + 1;
                let category = categories[index % categories.len()];
                let price = 299 + (id % 18) * 175 + (id / 8) * 12;
                #[allow(clippy::cast_precision_loss)] // ids stay far below f64 precision
                let rating = (((3 + id % 3) as f64 + (id % 10) as f64 / 20.0) * 10.0).round() / 10.0;

                Product {
                    id: ProductId::new(i32::try_from(id).unwrap_or(i32::MAX)),
                    name: format!("{category} Product {id}"),
                    category,
                    description: format!(
                        "Premium {} item designed for daily use and value shopping.",
                        category.as_str().to_lowercase()
                    ),
                    price,
                    rating,
                }
            })
            .collect();

        Self::new(products)
    }

    /// Lookup by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Full scan in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_assigns_ascending_ids_from_one() {
        let store = CatalogStore::seed(10);
        let ids: Vec<i32> = store.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let a = CatalogStore::seed(50);
        let b = CatalogStore::seed(50);
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_first_product() {
        let store = CatalogStore::seed(1);
        let product = store.get(ProductId::new(1)).expect("seeded");
        assert_eq!(product.name, "Electronics Product 1");
        assert_eq!(product.category, Category::Electronics);
        // price = 299 + (1 % 18) * 175 + (1 / 8) * 12
        assert_eq!(product.price, 474);
        assert!((3.0..=5.0).contains(&product.rating));
        assert!(product.description.starts_with("Premium electronics item"));
    }

    #[test]
    fn test_seed_cycles_categories() {
        let store = CatalogStore::seed(8);
        let seventh = store.get(ProductId::new(7)).expect("seeded");
        assert_eq!(seventh.category, Category::Electronics);
        let eighth = store.get(ProductId::new(8)).expect("seeded");
        assert_eq!(eighth.category, Category::Fashion);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = CatalogStore::seed(5);
        assert!(store.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_new_sorts_by_id() {
        let store = CatalogStore::new(vec![
            sample_product(3, 10),
            sample_product(1, 30),
            sample_product(2, 20),
        ]);
        let ids: Vec<i32> = store.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    fn sample_product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: Category::Books,
            description: String::new(),
            price,
            rating: 4.0,
        }
    }
}
