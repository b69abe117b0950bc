//! Product catalog: the fixed menu of bookable picking blocks.

use serde::{Deserialize, Serialize};

use super::settings::ConfigError;

/// Immutable catalog entry. Reservations snapshot the fields they need at
/// booking time, so later catalog edits never alter past bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique string key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Capacity units the product occupies for its full duration.
    pub required_units: u32,
    /// Fixed booking length in minutes.
    pub duration_minutes: u32,
}

/// The loaded product catalog. Fixed at startup; never mutated.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Built-in default catalog, used when no TOML manifest is configured.
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product {
                    id: "single".to_string(),
                    name: "Single picker".to_string(),
                    required_units: 1,
                    duration_minutes: 30,
                },
                Product {
                    id: "half".to_string(),
                    name: "Half crew".to_string(),
                    required_units: 3,
                    duration_minutes: 120,
                },
                Product {
                    id: "full".to_string(),
                    name: "Full crew".to_string(),
                    required_units: 6,
                    duration_minutes: 240,
                },
            ],
        }
    }

    /// Parse a catalog from TOML manifest text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_products(file.products)
    }

    /// Load a catalog from a TOML manifest on disk.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Build a catalog from explicit entries, validating each.
    pub fn from_products(products: Vec<Product>) -> Result<Self, ConfigError> {
        for (index, product) in products.iter().enumerate() {
            if product.required_units == 0 {
                return Err(ConfigError::InvalidProduct {
                    id: product.id.clone(),
                    reason: "required_units must be positive".to_string(),
                });
            }
            if product.duration_minutes == 0 {
                return Err(ConfigError::InvalidProduct {
                    id: product.id.clone(),
                    reason: "duration_minutes must be positive".to_string(),
                });
            }
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(ConfigError::InvalidProduct {
                    id: product.id.clone(),
                    reason: "duplicate product id".to_string(),
                });
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All catalog entries in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
