//! The product catalog store.
//!
//! Products live in a single JSON file holding an array of product records.
//! The whole set is loaded at open and rewritten after every mutation, which
//! is plenty for a catalog of tens of products managed from an admin panel.
//! Lookup misses are not errors; only I/O and serialization can fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;

use crate::product::{Product, ProductCategory};

/// A file-backed catalog of bank products.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    products: Vec<Product>,
}

impl Catalog {
    /// Opens the catalog at `path`, loading the stored products if the file
    /// exists and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, anyhow::Error> {
        let path = path.into();
        let products = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing catalog file {}", path.display()))?
        } else {
            Vec::new()
        };
        Ok(Catalog { path, products })
    }

    /// Opens the catalog at `path`, seeding it with `seed` on first use.
    /// An existing file wins over the seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or parsed, or if
    /// writing the seed fails.
    pub fn open_or_seed(
        path: impl Into<PathBuf>,
        seed: Vec<Product>,
    ) -> Result<Self, anyhow::Error> {
        let path = path.into();
        if path.exists() {
            return Self::open(path);
        }
        let mut catalog = Catalog {
            path,
            products: seed,
        };
        catalog.persist()?;
        Ok(catalog)
    }

    /// The file this catalog persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products of one category.
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Products marked for the featured section.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Adds a product, assigning it a fresh id and creation timestamps, and
    /// returns the assigned id. Whatever id or timestamps the caller filled
    /// in are overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails.
    pub fn add(&mut self, mut product: Product) -> Result<String, anyhow::Error> {
        let now = Utc::now();
        // Millisecond ids collide when adds land in the same millisecond.
        let mut millis = now.timestamp_millis();
        let mut id = millis.to_string();
        while self.products.iter().any(|p| p.id() == id) {
            millis += 1;
            id = millis.to_string();
        }

        let common = product.common_mut();
        common.id = id.clone();
        common.created_at = now;
        common.updated_at = now;

        self.products.push(product);
        self.persist()?;
        Ok(id)
    }

    /// Applies `apply` to the product with the given id and restamps its
    /// update time. Returns `false` without touching the file when no
    /// product matches.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails.
    pub fn update_with(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut Product),
    ) -> Result<bool, anyhow::Error> {
        let Some(product) = self.products.iter_mut().find(|p| p.id() == id) else {
            return Ok(false);
        };
        apply(product);
        product.common_mut().updated_at = Utc::now();
        self.persist()?;
        Ok(true)
    }

    /// Removes the product with the given id. Returns `false` when no
    /// product matches.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails.
    pub fn remove(&mut self, id: &str) -> Result<bool, anyhow::Error> {
        let before = self.products.len();
        self.products.retain(|p| p.id() != id);
        if self.products.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flips the featured flag of the product with the given id. Returns
    /// `false` when no product matches.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails.
    pub fn toggle_featured(&mut self, id: &str) -> Result<bool, anyhow::Error> {
        self.update_with(id, |product| {
            let common = product.common_mut();
            common.is_featured = !common.is_featured;
        })
    }

    fn persist(&self) -> Result<(), anyhow::Error> {
        let raw = serde_json::to_string_pretty(&self.products)
            .context("serializing catalog products")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing catalog file {}", self.path.display()))?;
        Ok(())
    }
}
