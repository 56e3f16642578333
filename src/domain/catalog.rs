//! Catalog - The fixed, ordered set of products
//!
//! Built once at startup and shared read-only by every view. Order is display
//! order; names are unique and double as lookup keys.

use std::sync::Arc;

use ahash::AHashMap;
use serde::Deserialize;

use crate::domain::product::Product;
use crate::error::{Error, Result};

/// Immutable product catalog with a name index
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    index: Arc<AHashMap<String, usize>>,
}

/// On-disk shape of a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting empty and duplicate names
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.name.is_empty() {
                return Err(Error::EmptyProductName { position });
            }
            if index.insert(product.name.clone(), position).is_some() {
                return Err(Error::DuplicateProduct {
                    name: product.name.clone(),
                });
            }
        }

        Ok(Self {
            products: products.into(),
            index: Arc::new(index),
        })
    }

    /// The reference catalog shipped with the application
    pub fn builtin() -> Self {
        let products = vec![
            Product::new("Product A", "$100", "This is a great product A."),
            Product::new("Product B", "$150", "This is product B with more features."),
            Product::new("Product C", "$200", "Premium product C."),
            Product::new("Product D", "$100", "This is a great product D."),
            Product::new("Product E", "$150", "This is product E with more features."),
            Product::new("Product F", "$200", "Premium product F."),
            Product::new("Product G", "$100", "This is a great product G."),
            Product::new("Product H", "$150", "This is product H with more features."),
            Product::new("Product I", "$200", "Premium product I."),
        ];

        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();

        Self {
            products: products.into(),
            index: Arc::new(index),
        }
    }

    /// Parse a catalog from TOML (`[[products]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.products)
    }

    /// All products in display order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate in display order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at a display position
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Display position of a product by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Resolve a product by name; `None` for names not in the catalog
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.position(name).and_then(|i| self.products.get(i))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_keeps_reference_order() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Product A", "Product B", "Product C", "Product D", "Product E", "Product F",
                "Product G", "Product H", "Product I",
            ]
        );
        assert_eq!(catalog.get(1).map(|p| p.price.as_str()), Some("$150"));
    }

    #[test]
    fn find_resolves_by_name() {
        let catalog = Catalog::builtin();
        let product = catalog.find("Product C").cloned();
        assert_eq!(
            product,
            Some(Product::new("Product C", "$200", "Premium product C."))
        );
        assert_eq!(catalog.position("Product I"), Some(8));
    }

    #[test]
    fn find_misses_unknown_name() {
        let catalog = Catalog::builtin();
        assert!(catalog.find("Product Z").is_none());
        assert!(catalog.find("").is_none());
        assert!(catalog.find("product a").is_none());
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let result = Catalog::new(vec![
            Product::new("A", "$1", "one"),
            Product::new("B", "$2", "two"),
            Product::new("A", "$3", "three"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateProduct { name }) if name == "A"));
    }

    #[test]
    fn new_rejects_empty_name() {
        let result = Catalog::new(vec![
            Product::new("A", "$1", "one"),
            Product::new("", "$2", "two"),
        ]);
        assert!(matches!(result, Err(Error::EmptyProductName { position: 1 })));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog");
        assert!(catalog.is_empty());
        assert!(catalog.find("anything").is_none());
    }

    #[test]
    fn from_toml_preserves_file_order() {
        let content = r#"
            [[products]]
            name = "Zeta"
            price = "$9"
            description = "Last letter first."

            [[products]]
            name = "Alpha/Beta"
            price = "$1"
            description = "Slash in the name."
        "#;

        let catalog = Catalog::from_toml_str(content).expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).map(|p| p.name.as_str()), Some("Zeta"));
        assert_eq!(catalog.position("Alpha/Beta"), Some(1));
    }

    #[test]
    fn from_toml_rejects_duplicates_and_garbage() {
        let duplicated = r#"
            [[products]]
            name = "Same"
            price = "$1"
            description = "one"

            [[products]]
            name = "Same"
            price = "$2"
            description = "two"
        "#;
        assert!(matches!(
            Catalog::from_toml_str(duplicated),
            Err(Error::DuplicateProduct { .. })
        ));
        assert!(matches!(
            Catalog::from_toml_str("products = 3"),
            Err(Error::TomlDe { .. })
        ));
    }
}
