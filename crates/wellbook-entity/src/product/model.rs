//! Product model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product offered by a practitioner.
///
/// Authorization mirrors booking ownership (owner or admin may mutate) but
/// products carry no state machine. The owner is always the authenticated
/// creator, never taken from the client payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// The owning user.
    pub owner_id: Uuid,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Catalog category.
    pub category: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// The owning user.
    pub owner_id: Uuid,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i32,
    /// Catalog category.
    pub category: Option<String>,
}

/// Partial update of a product. The owner reference is preserved by the
/// repository and cannot be changed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New stock figure.
    pub stock: Option<i32>,
    /// New category.
    pub category: Option<String>,
}
