//! Transport Adapters - HttpTransportPort 实现
//!
//! - ReqwestTransport: 真实网络请求
//! - RouterTransport: 进程内分发到 Mock 后端路由表

mod reqwest_transport;
mod router_transport;

pub use reqwest_transport::ReqwestTransport;
pub use router_transport::RouterTransport;
