//! # `refdata-store` - SQLite 持久化层
//!
//! `refdata-core` 各存储端口的 SQLite 实现（基于 `sqlx`）。
//! 全部参考数据落在数据根目录下的单一 `refdata.db` 文件中，
//! 每个存储实例在构造时初始化自己负责的表结构。

pub mod catalog;
pub mod config;
pub mod db;
pub mod rights;
pub mod schedule;
pub mod stock;
pub mod supply;
