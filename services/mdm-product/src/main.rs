//! mdm-product Service - Product Catalog

use std::net::SocketAddr;
use std::sync::Arc;

use config::AppConfig;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use telemetry::{init_tracing, init_tracing_json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use mdm_product::api::api_routes;
use mdm_product::application::ServiceHandler;
use mdm_product::infrastructure::events::TracingEventPublisher;
use mdm_product::infrastructure::persistence::PostgresProductRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!("Initializing {} Service...", config.app_name);

    // 初始化数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(config.database.url.expose_secret())
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    // 组装仓储、事件发布者与处理器
    let product_repo = Arc::new(PostgresProductRepository::new(pool));
    let event_publisher = Arc::new(TracingEventPublisher::new());
    let handler = Arc::new(ServiceHandler::new(product_repo, event_publisher));

    // 构建路由
    let app = api_routes(handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting mdm-product service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
