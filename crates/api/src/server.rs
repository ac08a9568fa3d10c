//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 的 DI 容器持有并调用。

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use refdata_core::auth::port::ApiKeyPort;
use refdata_core::catalog::port::TradeItemStore;
use refdata_core::config::AppConfig;
use refdata_core::rights::port::{RightStore, RoleStore};
use refdata_core::schedule::port::ScheduleStore;
use refdata_core::supply::port::SupplyStore;
use refdata_service::role::RoleService;
use refdata_service::stock::IdealStockAmountService;

use crate::routes::{api_key, ideal_stock_amount, role, schedule, supply_line, trade_item};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 各存储端口与服务在服务启动前由 DI 容器注入，生命周期与进程等同。
#[derive(Clone)]
pub struct AppState {
    /// 全局配置 (JWT 密钥、CSV 分隔符等)
    pub config: Arc<AppConfig>,
    /// 贸易品存储
    pub trade_item_store: Arc<dyn TradeItemStore>,
    /// 角色存储 (读路径)
    pub role_store: Arc<dyn RoleStore>,
    /// 权限目录存储
    pub right_store: Arc<dyn RightStore>,
    /// 角色服务 (写路径：权限解析后持久化)
    pub role_service: Arc<RoleService>,
    /// 处理计划/周期存储
    pub schedule_store: Arc<dyn ScheduleStore>,
    /// 组织结构与供应线存储
    pub supply_store: Arc<dyn SupplyStore>,
    /// 理想库存量检索服务
    pub isa_service: Arc<IdealStockAmountService>,
    /// 外部鉴权服务的 API Key 客户端
    pub api_key_client: Arc<dyn ApiKeyPort>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "物流基础数据服务 API",
        version = "0.1.0",
        description = "物流管理平台的基础数据微服务。提供贸易品、角色权限、理想库存量、处理计划与供应线的管理接口。",
        license(name = "MIT")
    ),
    tags(
        (name = "贸易品 (TradeItems)", description = "贸易品保存与分类检索"),
        (name = "角色 (Roles)", description = "角色 CRUD 与权限解析"),
        (name = "理想库存量 (IdealStockAmounts)", description = "分页检索与 CSV 导出"),
        (name = "处理计划 (ProcessingSchedules)", description = "处理计划与周期管理"),
        (name = "供应线 (SupplyLines)", description = "供应线检索与保存"),
        (name = "服务账户 (ApiKeys)", description = "外部鉴权服务的 API Key 代管")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// 为 OpenAPI 文档注入全局 Bearer JWT 鉴权方案。
///
/// 注册后，Swagger UI 页面顶部将显示 🔒 Authorize 按钮，
/// 用户可以填入外部鉴权服务签发的 JWT Token 后对接口进行鉴权测试。
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // 若 components 不存在则创建
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "在此处填入外部鉴权服务签发的 JWT Token（无需 'Bearer ' 前缀）",
                    ))
                    .build(),
            ),
        );
    }
}

// ============================================================
//  服务构建与启动
// ============================================================

/// # Summary
/// 构建完整的 axum 应用路由树 (含 Swagger UI 与 CORS)。
///
/// 所有业务路由都挂在 JWT 验签中间件之后，细粒度权限由各 Handler
/// 自行校验。单独拆出本函数是为了让测试在自己的 listener 上起服务。
pub fn build_router(state: AppState) -> Router {
    // 同一路径的多个方法合并在一次 routes! 调用中
    let protected_router = OpenApiRouter::new()
        .routes(routes!(
            trade_item::save_trade_item,
            trade_item::search_trade_items
        ))
        .routes(routes!(role::list_roles, role::create_role))
        .routes(routes!(role::get_role, role::update_role, role::delete_role))
        .routes(routes!(ideal_stock_amount::search_ideal_stock_amounts))
        .routes(routes!(ideal_stock_amount::export_ideal_stock_amounts_csv))
        .routes(routes!(schedule::list_schedules, schedule::create_schedule))
        .routes(routes!(
            schedule::get_schedule,
            schedule::update_schedule,
            schedule::delete_schedule
        ))
        .routes(routes!(schedule::list_schedule_periods))
        .routes(routes!(
            supply_line::search_supply_lines,
            supply_line::save_supply_line
        ))
        .routes(routes!(api_key::create_api_key))
        .routes(routes!(api_key::delete_api_key))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::auth_middleware,
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(protected_router)
        .with_state(state)
        .split_for_parts();

    // 配置 CORS (开发阶段允许所有来源)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 绑定 TCP 端口并启动 HTTP 监听。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8080"`
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("🚀 Reference Data API listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
