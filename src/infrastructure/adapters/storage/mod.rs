//! Storage Adapter - token 持久化

mod file_token_store;

pub use file_token_store::FileTokenStore;
