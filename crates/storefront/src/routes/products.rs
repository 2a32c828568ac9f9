//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bramsstore_core::{Category, CategoryFilter, Price, Product, ProductId};

use crate::catalog::filter::{self, CatalogQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Listing query parameters, both optional.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Product display data.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub price_display: String,
    pub stock: u32,
    pub category: Category,
    pub featured: bool,
    pub image: String,
}

impl ProductView {
    fn from_product(product: &Product, state: &AppState) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.unit_price,
            price_display: product.unit_price.format(state.config().currency),
            stock: product.stock,
            category: product.category,
            featured: product.featured,
            image: product.image.clone(),
        }
    }
}

/// Listing response body.
///
/// Carries the catalog notice so the listing can surface the fallback
/// banner without a second request.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub products: Vec<ProductView>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// GET /products
///
/// Both filters compose: the category narrows first, then the search term
/// matches case-insensitively against name and description.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<ListingView>, AppError> {
    let category: CategoryFilter = match params.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw.parse().map_err(AppError::BadRequest)?,
    };

    let query = CatalogQuery {
        category,
        search: params.q.unwrap_or_default(),
    };

    let store = state.store().read().await;
    let products: Vec<ProductView> = filter::filter(store.products(), &query)
        .into_iter()
        .map(|p| ProductView::from_product(p, &state))
        .collect();

    let total = products.len();
    let notice = store.catalog().notice.clone();
    Ok(Json(ListingView {
        products,
        total,
        notice,
    }))
}

/// GET /products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>, AppError> {
    let id = ProductId::from(id);
    let store = state.store().read().await;

    store
        .product(&id)
        .map(|p| Json(ProductView::from_product(p, &state)))
        .ok_or_else(|| AppError::NotFound(format!("no such product: {id}")))
}
