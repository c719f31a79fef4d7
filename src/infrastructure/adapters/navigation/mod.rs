//! Navigation Adapter

mod history_navigator;

pub use history_navigator::{HistoryEntry, HistoryNavigator};
