//! Admin Console - Mock 后端服务
//!
//! 启动 axum Mock 后端，并用真实 HTTP 客户端做一次登录自检

use std::sync::Arc;
use std::time::Duration;

use admin_console::application::AppContext;
use admin_console::config::{load_config, print_config, AppConfig};
use admin_console::infrastructure::adapters::{FileTokenStore, HistoryNavigator, ReqwestTransport};
use admin_console::infrastructure::http::{MockApiServer, MockState};
use admin_console::infrastructure::memory::MockDataStore;

/// 自检等待服务器就绪的最大尝试次数
const SELF_CHECK_ATTEMPTS: u32 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},admin_console={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Admin Console - Mock API");
    print_config(&config);

    tokio::fs::create_dir_all(&config.storage.dir).await?;

    let store = Arc::new(MockDataStore::seeded(config.mock.seed()));
    let state = MockState::new(config.mock.api_config(), store);
    let server = MockApiServer::new(config.mock.server_config(), state);

    tokio::spawn(self_check(config.clone()));

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 通过完整客户端链路登录并读取仪表盘
async fn self_check(config: AppConfig) {
    let transport = match ReqwestTransport::new(config.api.timeout()) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create HTTP client");
            return;
        }
    };
    let ctx = AppContext::new(
        config.api.client_config(),
        transport,
        Arc::new(FileTokenStore::in_dir(&config.storage.dir)),
        Arc::new(HistoryNavigator::default()),
    );

    let mut attempt = 0;
    let user = loop {
        attempt += 1;
        match ctx.auth.login("admin", "123456").await {
            Ok(user) => break user,
            Err(e) if e.is_transient() && attempt < SELF_CHECK_ATTEMPTS => {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Err(e) => {
                tracing::warn!(error = %e, attempt, "Self check login failed");
                return;
            }
        }
    };

    match ctx.dashboard.get_stats().await {
        Ok(stats) => tracing::info!(
            user = %user.username,
            total_orders = stats.total_orders,
            total_products = stats.total_products,
            "Self check passed"
        ),
        Err(e) => tracing::warn!(error = %e, "Self check stats failed"),
    }

    ctx.auth.logout().await;
}
