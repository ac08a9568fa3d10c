//! # `refdata-api` - HTTP API 网关
//!
//! 本 crate 是物流基础数据服务的 HTTP/REST 入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收来自客户端的 HTTP 请求
//! - 执行 JWT 鉴权后在 Handler 内做细粒度权限校验
//! - 调用下层存储端口与服务完成业务操作
//! - 将领域模型转换为 DTO 返回给前端

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod types;
