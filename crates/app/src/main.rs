use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use refdata_api::server::{AppState, start_server};
use refdata_core::config::AppConfig;
use refdata_service::auth::HttpApiKeyClient;
use refdata_service::role::RoleService;
use refdata_service::stock::IdealStockAmountService;
use refdata_store::catalog::SqliteTradeItemStore;
use refdata_store::rights::SqliteRightsStore;
use refdata_store::schedule::SqliteScheduleStore;
use refdata_store::stock::SqliteIdealStockAmountStore;
use refdata_store::supply::SqliteSupplyStore;

/// # Summary
/// 读取应用配置：可选的 `config.toml` 加 `REFDATA_` 前缀的环境变量，
/// 两者都缺省时落到内置默认值。
fn load_config() -> Result<AppConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?)
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("REFDATA").separator("__"))
        .build()?
        .try_deserialize()
}

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 初始化全局日志与配置。
/// 2. 实例化存储层（SQLite 各领域存储）。
/// 3. 构造应用服务层（角色服务、检索服务、外部 API Key 客户端）。
/// 4. 组装 AppState 并启动 HTTP 服务。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志与配置
    tracing_subscriber::fmt::init();
    let app_config = load_config()?;
    info!("Reference data service starting...");

    refdata_store::config::set_root_dir(PathBuf::from(&app_config.database.data_dir));

    // 2. 实例化存储层
    let trade_item_store = Arc::new(SqliteTradeItemStore::new().await?);
    let rights_store = Arc::new(SqliteRightsStore::new().await?);
    let schedule_store = Arc::new(SqliteScheduleStore::new().await?);
    let supply_store = Arc::new(SqliteSupplyStore::new().await?);
    let isa_store = Arc::new(SqliteIdealStockAmountStore::new().await?);

    // 3. 构造应用服务层（注入 Core Trait 抽象）
    let role_service = Arc::new(RoleService::new(rights_store.clone(), rights_store.clone()));
    let isa_service = Arc::new(IdealStockAmountService::new(isa_store));
    let api_key_client = Arc::new(HttpApiKeyClient::new(app_config.auth.clone()));

    let bind_addr = format!("{}:{}", app_config.server.host, app_config.server.port);

    let state = AppState {
        config: Arc::new(app_config),
        trade_item_store,
        role_store: rights_store.clone(),
        right_store: rights_store,
        role_service,
        schedule_store,
        supply_store,
        isa_service,
        api_key_client,
    };

    // 4. 启动 HTTP 服务 (阻塞直到进程退出)
    start_server(state, &bind_addr).await?;

    Ok(())
}
