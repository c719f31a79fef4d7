//! Router - 带守卫的导航
//!
//! 每一跳先处理路由记录上的 redirect，再执行守卫；
//! 最终位置提交给 NavigatorPort。

use std::sync::Arc;

use thiserror::Error;

use super::guard::{NavigationDecision, RouteGuard};
use super::location::Location;
use super::routes::RouteTable;
use crate::application::ports::NavigatorPort;

/// 单次导航允许的最大重定向次数
const MAX_REDIRECTS: usize = 10;

/// 导航错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Too many redirects while navigating to {0}")]
    TooManyRedirects(String),
}

/// 导航结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// 最终到达的位置
    pub location: Location,
    /// 是否发生过重定向
    pub redirected: bool,
}

/// 路由器
#[derive(Clone)]
pub struct Router {
    routes: Arc<RouteTable>,
    guard: RouteGuard,
    navigator: Arc<dyn NavigatorPort>,
}

impl Router {
    pub fn new(
        routes: Arc<RouteTable>,
        guard: RouteGuard,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            routes,
            guard,
            navigator,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// 当前位置
    pub fn current(&self) -> Location {
        Location::parse(&self.navigator.current())
    }

    /// 导航到目标路径
    pub fn push(&self, target: &str) -> Result<Navigation, NavigationError> {
        let mut location = Location::parse(target);
        let mut redirected = false;

        for _ in 0..=MAX_REDIRECTS {
            if let Some(to) = self
                .routes
                .resolve(&location.path)
                .and_then(|r| r.redirect.clone())
            {
                location = Location::parse(&to);
                redirected = true;
                continue;
            }

            match self.guard.before_each(&location) {
                NavigationDecision::Proceed => {
                    let full_path = location.full_path();
                    self.navigator.push(&full_path);
                    tracing::debug!(to = %full_path, redirected, "Navigation committed");
                    return Ok(Navigation {
                        location,
                        redirected,
                    });
                }
                NavigationDecision::Redirect(next) => {
                    location = next;
                    redirected = true;
                }
            }
        }

        tracing::warn!(target = %target, "Navigation aborted: too many redirects");
        Err(NavigationError::TooManyRedirects(target.to_string()))
    }

    /// 登录成功后回到登录页 query 中保存的原目标，没有则回首页
    pub fn push_after_login(&self) -> Result<Navigation, NavigationError> {
        let current = self.current();
        let target = current
            .query_value(super::guard::REDIRECT_QUERY_KEY)
            .unwrap_or(super::guard::HOME_PATH)
            .to_string();
        self.push(&target)
    }
}
