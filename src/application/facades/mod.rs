//! Domain API Facades
//!
//! 按领域划分的无状态方法组，路径与动词固定。
//! 只做类型层面的输入约束，错误原样向上传递。

mod auth;
mod dashboard;
mod orders;
mod products;

pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use orders::OrderApi;
pub use products::ProductApi;
