//! Session State
//!
//! 显式持有的会话状态对象，通过 AppContext 注入路由守卫

mod auth_store;

pub use auth_store::{AuthStore, Session};
