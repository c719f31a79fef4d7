//! Navigator Port - 页面跳转抽象

/// Navigator Port
///
/// 记录当前页面位置。`push` 是经过路由守卫后的普通跳转，
/// `hard_redirect` 相当于整页跳转，不经过守卫，只由 401 拦截器使用
pub trait NavigatorPort: Send + Sync {
    /// 当前完整路径（含 query）
    fn current(&self) -> String;

    /// 提交一次普通跳转
    fn push(&self, location: &str);

    /// 整页跳转
    fn hard_redirect(&self, location: &str);
}
