/// 服务器配置 - 后台管理服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | BIND_ADDR | 0.0.0.0 | 监听地址 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SEED_FIXTURES | true | 启动时加载示例数据 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_FIXTURES=false cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 监听地址
    pub bind_addr: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 是否加载示例数据
    pub seed_fixtures: bool,
    /// 日志级别 (RUST_LOG 优先)
    pub log_level: String,
    /// 日志文件目录，未设置时只输出到 stdout
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            seed_fixtures: std::env::var("SEED_FIXTURES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_fixtures: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_fixtures = seed_fixtures;
        config
    }

    /// 监听地址 `bind_addr:http_port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(8088, false);
        assert_eq!(config.http_port, 8088);
        assert!(!config.seed_fixtures);
        assert!(config.listen_addr().ends_with(":8088"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides(5000, true);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".into();
        assert!(config.is_development());
    }
}
