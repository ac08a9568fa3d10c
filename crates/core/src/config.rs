use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthServerConfig,
    pub export: ExportConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 与外部 OAuth2 鉴权服务共享的 JWT 签名密钥
    pub jwt_secret: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite 数据文件所在目录
    pub data_dir: String,
}

/// 外部鉴权服务 (OAuth2) 协作方配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthServerConfig {
    pub client_id: String,
    pub client_secret: String,
    /// client_credentials 授权端点
    pub authorization_url: String,
    /// 鉴权服务基地址 (API Key 管理接口挂载于此)
    pub auth_url: String,
}

/// CSV 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 处理周期单元格中计划编码与周期名称的分隔符
    pub csv_separator: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                // 开发用默认值，生产环境必须通过配置覆盖
                jwt_secret: "change-me-in-production".to_string(),
            },
            database: DatabaseConfig {
                data_dir: "data".to_string(),
            },
            auth: AuthServerConfig {
                client_id: "trusted-client".to_string(),
                client_secret: "secret".to_string(),
                authorization_url: "http://localhost:8081/oauth/token".to_string(),
                auth_url: "http://localhost:8081".to_string(),
            },
            export: ExportConfig {
                csv_separator: "|".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.data_dir, "data");
        assert_eq!(config.export.csv_separator, "|");
    }
}
