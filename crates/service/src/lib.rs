//! # `refdata-service` - 应用服务层
//!
//! 存储端口之上的薄编排层：理想库存量分页检索、角色构造与权限解析、
//! 外部鉴权服务的 API Key 客户端，以及理想库存量 CSV 导出。
//! 编译期仅依赖 `refdata-core` 中的 Trait 定义，具体实现由构造函数注入。

pub mod auth;
pub mod csv_export;
pub mod role;
pub mod stock;
