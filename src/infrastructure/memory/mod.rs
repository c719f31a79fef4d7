//! Memory Layer - In-Memory State
//!
//! 内存 token 存储与 Mock 后端的数据存储

mod mock_store;
mod token_store;

pub use mock_store::{MockDataStore, MockSeed};
pub use token_store::InMemoryTokenStore;
