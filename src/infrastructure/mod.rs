//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及 Mock 后端

pub mod adapters;
pub mod http;
pub mod memory;

pub use adapters::{FileTokenStore, HistoryNavigator, ReqwestTransport, RouterTransport};
pub use http::{MockApiConfig, MockApiServer, MockState, ServerConfig};
pub use memory::{InMemoryTokenStore, MockDataStore, MockSeed};
