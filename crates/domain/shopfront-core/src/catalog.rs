use crate::{Product, ProductId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product \"{id}\" is not in the catalog")]
    NotFound { id: ProductId },
}

/// The authoritative in-memory product list for the session, plus at most one
/// selected product tracked by id.
///
/// Invariant: the selection, if set, refers to a product present in the
/// current list. `set_products` clears the selection rather than letting it
/// dangle across a list replacement.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
    selected: Option<ProductId>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the product list wholesale. Insertion order is preserved.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.selected = None;
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First match by id, or `None` when absent.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn select(&mut self, id: &str) -> Result<&Product, CatalogError> {
        let ix = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;
        self.selected = Some(self.products[ix].id.clone());
        Ok(&self.products[ix])
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_deref().and_then(|id| self.product(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
