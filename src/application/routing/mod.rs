//! Routing - 路由表、导航守卫与路由器
//!
//! 守卫是纯同步判断，不发网络请求，只信任本地 token 是否存在；
//! 服务端 401 由 HTTP 客户端的拦截器兜底。

mod guard;
mod location;
mod router;
mod routes;

pub use guard::{NavigationDecision, RouteGuard, HOME_PATH, REDIRECT_QUERY_KEY};
pub use location::Location;
pub use router::{Navigation, NavigationError, Router};
pub use routes::{RouteDef, RouteRecord, RouteTable};
