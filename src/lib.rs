//! # 商品与门店目录 API
//!
//! 两个互相独立的内存资源，分别挂载在 `/products` 与 `/stores` 下：
//! - 产品：关键字搜索、按平均评分排序、最新/最早查询、CRUD
//! - 门店：关键字搜索、按国家/城市过滤、按月收入排序、转让、最早查询、CRUD
//!
//! 每个资源由自己的服务对象持有集合，集合由一把互斥锁保护，
//! 通过 axum 状态注入到处理器中。

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::app::{products::ProductService, stores::StoreService};
use crate::core::{error::CoreError, middleware::request_logging_middleware};
use crate::infrastructure::config::HttpConfig;

/// 应用状态
#[derive(Clone, Default)]
pub struct AppState {
    pub products: ProductService,
    pub stores: StoreService,
}

impl AppState {
    /// 带启动示例数据的状态
    pub fn seeded() -> Self {
        Self {
            products: ProductService::seeded(),
            stores: StoreService::seeded(),
        }
    }
}

/// 组装完整路由及中间件
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/products",
            app::products::router().with_state(state.products.clone()),
        )
        .nest(
            "/stores",
            app::stores::router().with_state(state.stores.clone()),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(http.timeout()))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, CoreError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "products": state.products.count()?,
        "stores": state.stores.count()?,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
