//! Token Store Port - 持久化 token 存储
//!
//! 同步接口：启动时和每次导航时都要同步读取

use thiserror::Error;

/// token 在持久化存储中的固定 key
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Token 存储错误
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TokenStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Token Store Port
pub trait TokenStorePort: Send + Sync {
    /// 读取 token，不存在时返回 None
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// 写入 token
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// 删除 token，不存在时视为成功
    fn clear(&self) -> Result<(), TokenStoreError>;
}
