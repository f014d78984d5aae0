use catalog_api::{
    build_router,
    infrastructure::{config::load_config, logger::Logger},
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!("启动目录 API 服务器...");

    let state = AppState::seeded();
    info!(
        "✅ 已初始化 {} 个示例产品, {} 个示例门店",
        state.products.count()?,
        state.stores.count()?
    );

    let app = build_router(state, &config.http);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 目录 API 服务器运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   /products  - 产品: search, sorted-by-rating, recent, oldest, CRUD");
    info!("   /stores    - 门店: search, by-country, by-city, sorted-by-income, transfer-ownership, oldest, CRUD");
    info!("   /health    - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}
