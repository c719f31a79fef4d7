//! File Token Store - 文件系统 token 存储
//!
//! 实现 TokenStorePort trait。token 以纯文本保存在 `<dir>/token` 中，
//! 文件不存在或内容为空都视为没有 token。

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::{TokenStoreError, TokenStorePort, TOKEN_STORAGE_KEY};

/// 文件 token 存储
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// 在目录下使用固定 key 作为文件名
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_STORAGE_KEY),
        }
    }

    /// token 文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStorePort for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        tracing::debug!(path = %self.path.display(), "Token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
