//! 产品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{Json, Response},
    routing::get,
    Router,
};
use uuid::Uuid;

use super::{model::Product, service::ProductService};
use crate::core::{
    error::CoreError,
    query::SortQuery,
    response::{created, no_content},
};

pub fn router() -> Router<ProductService> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search/:keyword", get(search_products))
        .route("/sorted-by-rating", get(products_sorted_by_rating))
        .route("/recent", get(most_recent_product))
        .route("/oldest", get(oldest_product))
        .route(
            "/:id",
            get(get_product).put(edit_product).delete(delete_product),
        )
}

pub async fn list_products(
    State(service): State<ProductService>,
) -> Result<Json<Vec<Product>>, CoreError> {
    Ok(Json(service.list()?))
}

pub async fn search_products(
    State(service): State<ProductService>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Product>>, CoreError> {
    Ok(Json(service.search(&keyword)?))
}

pub async fn products_sorted_by_rating(
    State(service): State<ProductService>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<Product>>, CoreError> {
    Ok(Json(service.sorted_by_rating(query.order())?))
}

pub async fn most_recent_product(
    State(service): State<ProductService>,
) -> Result<Json<Product>, CoreError> {
    Ok(Json(service.most_recent()?))
}

pub async fn oldest_product(
    State(service): State<ProductService>,
) -> Result<Json<Product>, CoreError> {
    Ok(Json(service.oldest()?))
}

pub async fn create_product(
    State(service): State<ProductService>,
    payload: Result<Json<Option<Product>>, JsonRejection>,
) -> Result<Response, CoreError> {
    let Json(payload) = payload.map_err(|_| ProductService::invalid())?;
    let product = service.create(payload)?;
    Ok(created(format!("/products/{}", product.id), product))
}

pub async fn edit_product(
    State(service): State<ProductService>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Option<Product>>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let Json(payload) = payload.map_err(|_| ProductService::invalid())?;
    service.edit(id, payload)?;
    Ok(no_content())
}

pub async fn delete_product(
    State(service): State<ProductService>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    service.delete(id)?;
    Ok(no_content())
}

pub async fn get_product(
    State(service): State<ProductService>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, CoreError> {
    Ok(Json(service.get(id)?))
}
