//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::ApiClientConfig;
use crate::infrastructure::http::{MockApiConfig, ServerConfig};
use crate::infrastructure::memory::MockSeed;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 客户端配置
    #[serde(default)]
    pub api: ApiConfig,

    /// Mock 后端配置
    #[serde(default)]
    pub mock: MockConfig,

    /// 本地存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 请求前缀，所有接口路径拼接在其后
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（毫秒）
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5060/api".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 转换为 ApiClient 配置
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new(self.base_url.clone()).with_timeout(self.timeout())
    }
}

/// Mock 后端配置
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 模拟延迟下限（毫秒）
    #[serde(default = "default_latency_min")]
    pub latency_min_ms: u64,

    /// 模拟延迟上限（毫秒）
    #[serde(default = "default_latency_max")]
    pub latency_max_ms: u64,

    /// 业务接口是否校验 Bearer 令牌
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,

    /// 初始订单数量，未设置时随机 10-20
    #[serde(default)]
    pub seed_orders: Option<usize>,

    /// 初始商品数量，未设置时随机 10-20
    #[serde(default)]
    pub seed_products: Option<usize>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

fn default_latency_min() -> u64 {
    300
}

fn default_latency_max() -> u64 {
    600
}

fn default_require_auth() -> bool {
    true
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            latency_min_ms: default_latency_min(),
            latency_max_ms: default_latency_max(),
            require_auth: default_require_auth(),
            seed_orders: None,
            seed_products: None,
        }
    }
}

impl MockConfig {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }

    pub fn api_config(&self) -> MockApiConfig {
        MockApiConfig {
            latency_min_ms: self.latency_min_ms,
            latency_max_ms: self.latency_max_ms,
            require_auth: self.require_auth,
        }
    }

    /// 初始数据规模，未配置的部分随机生成
    pub fn seed(&self) -> MockSeed {
        let random = MockSeed::random();
        MockSeed {
            orders: self.seed_orders.unwrap_or(random.orders),
            products: self.seed_products.unwrap_or(random.products),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// token 文件所在目录
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
