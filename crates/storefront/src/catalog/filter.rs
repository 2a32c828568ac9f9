//! The catalog filter.
//!
//! A pure function over the catalog snapshot: no side effects, no
//! memoization, recomputed on every request. The catalog is small enough
//! that eager recomputation is the right trade.

use bramsstore_core::{CategoryFilter, Product};

/// Filter constraints from the listing view.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Category selector; `All` disables the category constraint.
    pub category: CategoryFilter,
    /// Free-text search term; empty disables the text constraint.
    pub search: String,
}

impl CatalogQuery {
    /// Whether a product passes both constraints.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && self.matches_text(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

/// Select the sublist of `products` passing `query`, preserving order.
#[must_use]
pub fn filter<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    products.iter().filter(|p| query.matches(p)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use bramsstore_core::{Category, Price, ProductId};

    fn product(id: &str, name: &str, description: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            unit_price: Price::from_minor_units(1_000),
            stock: 1,
            category,
            featured: false,
            image: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "NovaPhone X5", "Teléfono inteligente", Category::Smartphones),
            product("2", "Auriculares Brams BT", "Cancelación de ruido", Category::Audio),
            product("3", "Portátil Vega 14", "Portátil liviano", Category::Laptops),
        ]
    }

    #[test]
    fn test_no_constraints_returns_everything_in_order() {
        let products = sample();
        let query = CatalogQuery::default();

        let result = filter(&products, &query);

        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_category_constraint() {
        let products = sample();
        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::Audio),
            search: String::new(),
        };

        let result = filter(&products, &query);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "2");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample();
        let query = CatalogQuery {
            category: CategoryFilter::All,
            search: "NOVAPHONE".to_owned(),
        };

        assert_eq!(filter(&products, &query).len(), 1);
    }

    #[test]
    fn test_search_matches_description_too() {
        let products = sample();
        let query = CatalogQuery {
            category: CategoryFilter::All,
            search: "liviano".to_owned(),
        };

        let result = filter(&products, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "3");
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let products = sample();
        let query = CatalogQuery {
            category: CategoryFilter::All,
            search: "impresora".to_owned(),
        };

        assert!(filter(&products, &query).is_empty());
    }

    #[test]
    fn test_both_constraints_combine_with_and() {
        let products = sample();
        let query = CatalogQuery {
            category: CategoryFilter::Only(Category::Smartphones),
            search: "auriculares".to_owned(),
        };

        assert!(filter(&products, &query).is_empty());
    }
}
