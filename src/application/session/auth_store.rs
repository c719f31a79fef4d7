//! AuthStore - 当前 token 与用户资料
//!
//! 不变量:
//! - token 与 user 在同一个写锁内一起设置、一起清除
//! - 构造时从持久化存储同步读取 token，user 为空直到拉取资料
//! - logout 无论远端调用结果如何都会清空本地状态

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::application::error::ApiError;
use crate::application::facades::AuthApi;
use crate::application::ports::TokenStorePort;
use crate::domain::User;

/// 内存中的会话快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// 会话状态
pub struct AuthStore {
    auth_api: AuthApi,
    token_store: Arc<dyn TokenStorePort>,
    session: RwLock<Session>,
}

impl AuthStore {
    /// 创建会话状态，并从持久化存储读取一次 token
    pub fn new(auth_api: AuthApi, token_store: Arc<dyn TokenStorePort>) -> Self {
        let token = match token_store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted token at startup");
                None
            }
        };

        tracing::debug!(has_token = token.is_some(), "AuthStore initialized");

        Self {
            auth_api,
            token_store,
            session: RwLock::new(Session { token, user: None }),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// 登录
    ///
    /// 先持久化 token 再更新内存；任一步失败都不会修改内存状态
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let resp = self.auth_api.login(username, password).await?;

        self.token_store.save(&resp.token)?;
        {
            let mut session = self.write();
            session.token = Some(resp.token);
            session.user = Some(resp.user.clone());
        }

        tracing::info!(username = %resp.user.username, role = %resp.user.role, "Logged in");
        Ok(resp.user)
    }

    /// 退出登录
    ///
    /// 远端失败只记录日志；本地清理在作用域结束时执行，
    /// 调用方中途丢弃 future 也同样生效
    pub async fn logout(&self) {
        let _reset = SessionReset { store: self };

        if let Err(e) = self.auth_api.logout().await {
            tracing::warn!(
                error = %e,
                transient = e.is_transient(),
                "Remote logout failed, clearing local session anyway"
            );
        }
    }

    /// 拉取当前用户资料并覆盖内存中的 user，不修改 token
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let user = self.auth_api.get_profile().await?;
        self.write().user = Some(user.clone());
        Ok(user)
    }

    /// 持久化存储中有 token 而内存中没有时，采用存储中的 token
    pub fn sync_from_storage(&self) {
        if self.read().token.is_some() {
            return;
        }

        match self.token_store.load() {
            Ok(Some(token)) => {
                let mut session = self.write();
                if session.token.is_none() {
                    tracing::debug!("Adopted persisted token");
                    session.token = Some(token);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read persisted token"),
        }
    }

    fn clear_local(&self) {
        {
            let mut session = self.write();
            session.token = None;
            session.user = None;
        }
        if let Err(e) = self.token_store.clear() {
            tracing::warn!(error = %e, "Failed to remove persisted token");
        }
        tracing::info!("Local session cleared");
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 作用域结束时清空本地会话
struct SessionReset<'a> {
    store: &'a AuthStore,
}

impl Drop for SessionReset<'_> {
    fn drop(&mut self) {
        self.store.clear_local();
    }
}
