//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// `201 Created`，带指向新资源的 `Location` 头
pub fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

/// 成功但无响应体
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
