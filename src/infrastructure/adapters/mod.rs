//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod navigation;
pub mod storage;
pub mod transport;

pub use navigation::*;
pub use storage::*;
pub use transport::*;
