//! Product handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use wellbook_core::error::AppError;
use wellbook_entity::product::{Product, UpdateProduct};

use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/products — practitioner or admin.
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let product = state
        .product_service
        .create(
            &auth,
            req.name,
            req.description,
            req.price,
            req.stock,
            req.category,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(state.product_service.list().await?))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(state.product_service.get(id).await?))
}

/// PUT /api/products/{id} — owner or admin.
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let data = UpdateProduct {
        name: req.name,
        description: req.description,
        price: req.price,
        stock: req.stock,
        category: req.category,
    };

    Ok(Json(state.product_service.update(&auth, id, data).await?))
}

/// DELETE /api/products/{id} — owner or admin.
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_service.delete(&auth, id).await?;

    Ok(Json(MessageResponse {
        message: "Product deleted".to_string(),
    }))
}
