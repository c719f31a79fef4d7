//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod http_transport;
mod navigator;
mod token_store;

pub use http_transport::{ApiRequest, HttpTransportPort, RawResponse};
pub use navigator::NavigatorPort;
pub use token_store::{TokenStoreError, TokenStorePort, TOKEN_STORAGE_KEY};
