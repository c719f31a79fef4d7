//! Mock State - 路由共享状态

use std::sync::Arc;

use crate::domain::User;
use crate::infrastructure::memory::MockDataStore;

/// 固定的登录凭证
pub const MOCK_USERNAME: &str = "admin";
pub const MOCK_PASSWORD: &str = "123456";
/// 登录成功后签发的令牌
pub const MOCK_TOKEN: &str = "mock-token";

/// Mock 行为配置
#[derive(Debug, Clone)]
pub struct MockApiConfig {
    /// 每个请求的模拟延迟区间（毫秒）
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    /// 业务接口是否校验 Bearer 令牌
    pub require_auth: bool,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: 300,
            latency_max_ms: 600,
            require_auth: true,
        }
    }
}

impl MockApiConfig {
    /// 无延迟，用于测试
    pub fn instant() -> Self {
        Self {
            latency_min_ms: 0,
            latency_max_ms: 0,
            ..Self::default()
        }
    }
}

/// 应用状态
pub struct MockState {
    pub config: MockApiConfig,
    pub store: Arc<MockDataStore>,
}

impl MockState {
    pub fn new(config: MockApiConfig, store: Arc<MockDataStore>) -> Self {
        Self { config, store }
    }
}

/// 登录用户
pub fn mock_user() -> User {
    User {
        id: 1,
        username: MOCK_USERNAME.to_string(),
        role: "admin".to_string(),
        avatar: Some("https://avatars.githubusercontent.com/u/1".to_string()),
    }
}
