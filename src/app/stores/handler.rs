//! 门店处理器

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Json, Response},
    routing::{get, put},
    Router,
};
use uuid::Uuid;

use super::{model::Store, service::StoreService};
use crate::core::{
    error::CoreError,
    query::SortQuery,
    response::{created, no_content},
};

pub fn router() -> Router<StoreService> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/search/:keyword", get(search_stores))
        .route("/by-country/:country", get(stores_by_country))
        .route("/by-city/:city", get(stores_by_city))
        .route("/sorted-by-income", get(stores_sorted_by_income))
        .route("/transfer-ownership/:store_id", put(transfer_ownership))
        .route("/oldest", get(oldest_store))
        .route("/:id", get(get_store).put(edit_store).delete(delete_store))
}

fn invalid_owner() -> CoreError {
    CoreError::BadRequest("Owner name is invalid.".to_string())
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            let mime = v.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// JSON 请求体必须是字符串 (`"Alice"`)；其他内容类型按纯文本读取
fn parse_owner_name(json: bool, body: &str) -> Result<String, CoreError> {
    let trimmed = body.trim();
    if json || trimmed.starts_with('"') {
        return serde_json::from_str::<String>(trimmed).map_err(|_| invalid_owner());
    }
    if trimmed.is_empty() {
        return Err(invalid_owner());
    }
    Ok(trimmed.to_string())
}

pub async fn list_stores(State(service): State<StoreService>) -> Result<Json<Vec<Store>>, CoreError> {
    Ok(Json(service.list()?))
}

pub async fn search_stores(
    State(service): State<StoreService>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Store>>, CoreError> {
    Ok(Json(service.search(&keyword)?))
}

pub async fn stores_by_country(
    State(service): State<StoreService>,
    Path(country): Path<String>,
) -> Result<Json<Vec<Store>>, CoreError> {
    Ok(Json(service.by_country(&country)?))
}

pub async fn stores_by_city(
    State(service): State<StoreService>,
    Path(city): Path<String>,
) -> Result<Json<Vec<Store>>, CoreError> {
    Ok(Json(service.by_city(&city)?))
}

pub async fn stores_sorted_by_income(
    State(service): State<StoreService>,
    Query(query): Query<SortQuery>,
) -> Result<Json<Vec<Store>>, CoreError> {
    Ok(Json(service.sorted_by_income(query.order())?))
}

pub async fn transfer_ownership(
    State(service): State<StoreService>,
    Path(store_id): Path<Uuid>,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, CoreError> {
    let new_owner = parse_owner_name(is_json(&headers), &body)?;
    service.transfer_ownership(store_id, new_owner)?;
    Ok(no_content())
}

pub async fn oldest_store(State(service): State<StoreService>) -> Result<Json<Store>, CoreError> {
    Ok(Json(service.oldest()?))
}

pub async fn create_store(
    State(service): State<StoreService>,
    payload: Result<Json<Option<Store>>, JsonRejection>,
) -> Result<Response, CoreError> {
    let Json(payload) = payload.map_err(|_| StoreService::invalid())?;
    let store = service.create(payload)?;
    Ok(created(format!("/stores/{}", store.id), store))
}

pub async fn edit_store(
    State(service): State<StoreService>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Option<Store>>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let Json(payload) = payload.map_err(|_| StoreService::invalid())?;
    service.edit(id, payload)?;
    Ok(no_content())
}

pub async fn delete_store(
    State(service): State<StoreService>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    service.delete(id)?;
    Ok(no_content())
}

pub async fn get_store(
    State(service): State<StoreService>,
    Path(id): Path<Uuid>,
) -> Result<Json<Store>, CoreError> {
    Ok(Json(service.get(id)?))
}
