//! Product use cases. Authorization mirrors booking ownership — owner or
//! admin may mutate — but products carry no state machine.

use std::sync::Arc;

use uuid::Uuid;

use wellbook_auth::authz::Check;
use wellbook_core::error::AppError;
use wellbook_database::repositories::product::ProductRepository;
use wellbook_entity::product::{CreateProduct, Product, UpdateProduct};
use wellbook_entity::user::UserRole;

use crate::context::RequestContext;

/// Implements product catalog use cases.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Product persistence.
    product_repo: Arc<ProductRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Creates a product. Practitioners and admins only; the owner is the
    /// authenticated caller, never the payload.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        category: Option<String>,
    ) -> Result<Product, AppError> {
        Check::AnyOf(vec![
            Check::Role(UserRole::Practitioner),
            Check::Role(UserRole::Admin),
        ])
        .authorize(&ctx.actor())?;

        self.product_repo
            .create(&CreateProduct {
                owner_id: ctx.user_id,
                name,
                description,
                price,
                stock,
                category,
            })
            .await
    }

    /// Public catalog listing.
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        self.product_repo.find_all().await
    }

    /// Public product lookup.
    pub async fn get(&self, id: Uuid) -> Result<Product, AppError> {
        self.fetch(id).await
    }

    /// Applies a partial update. Owner or admin; the owner reference is
    /// preserved by the repository.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateProduct,
    ) -> Result<Product, AppError> {
        let existing = self.fetch(id).await?;

        Check::owner_or_admin(existing.owner_id).authorize(&ctx.actor())?;

        self.product_repo.update(id, &data).await
    }

    /// Deletes a product. Owner or admin.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let existing = self.fetch(id).await?;

        Check::owner_or_admin(existing.owner_id).authorize(&ctx.actor())?;

        self.product_repo.delete(id).await?;
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }
}
