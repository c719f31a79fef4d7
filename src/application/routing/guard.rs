//! Route Guard - 导航守卫
//!
//! 状态转换:
//! - 目标需要登录且未登录 → /login?redirect=<目标完整路径>
//! - 目标是登录页且已登录 → /
//! - 其他 → 放行

use std::sync::Arc;

use super::location::Location;
use super::routes::RouteTable;
use crate::application::client::LOGIN_PATH;
use crate::application::session::AuthStore;

/// 登录后的首页
pub const HOME_PATH: &str = "/";

/// 登录页上保存原目标的 query key
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// 守卫判断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(Location),
}

/// 导航守卫
#[derive(Clone)]
pub struct RouteGuard {
    auth: Arc<AuthStore>,
    routes: Arc<RouteTable>,
}

impl RouteGuard {
    pub fn new(auth: Arc<AuthStore>, routes: Arc<RouteTable>) -> Self {
        Self { auth, routes }
    }

    /// 每次导航前调用
    pub fn before_each(&self, to: &Location) -> NavigationDecision {
        self.auth.sync_from_storage();
        let decision = decide(
            self.routes.requires_auth(&to.path),
            to,
            self.auth.is_authenticated(),
        );

        if let NavigationDecision::Redirect(target) = &decision {
            tracing::debug!(from = %to, to = %target, "Navigation redirected by guard");
        }
        decision
    }
}

/// 纯判断逻辑
pub(crate) fn decide(requires_auth: bool, to: &Location, authenticated: bool) -> NavigationDecision {
    if requires_auth && !authenticated {
        NavigationDecision::Redirect(
            Location::new(LOGIN_PATH).with_query(REDIRECT_QUERY_KEY, to.full_path()),
        )
    } else if to.path == LOGIN_PATH && authenticated {
        NavigationDecision::Redirect(Location::new(HOME_PATH))
    } else {
        NavigationDecision::Proceed
    }
}
