//! # `refdata-core` - 领域核心
//!
//! 物流主数据服务的领域层：实体、Importer/Exporter 映射契约、
//! 存储端口 (Port Trait) 与各领域错误枚举。
//!
//! ## 架构职责
//! - 定义贸易品、权限/角色、处理周期、理想库存量、供应线等实体
//! - 以 trait 形式声明持久化与外部协作方的抽象接口
//! - 不依赖任何具体数据库或 HTTP 框架

pub mod auth;
pub mod catalog;
pub mod common;
pub mod config;
pub mod rights;
pub mod schedule;
pub mod stock;
pub mod store;
pub mod supply;
