//! History Navigator - 内存中的页面历史
//!
//! 实现 NavigatorPort，记录每一次普通跳转与整页跳转

use std::sync::{PoisonError, RwLock};

use crate::application::ports::NavigatorPort;

/// 一条历史记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub location: String,
    /// 是否为整页跳转
    pub hard: bool,
}

/// 内存导航器
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryNavigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(vec![HistoryEntry {
                location: initial.into(),
                hard: false,
            }]),
        }
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 所有整页跳转的目标
    pub fn hard_redirects(&self) -> Vec<String> {
        self.history()
            .into_iter()
            .filter(|e| e.hard)
            .map(|e| e.location)
            .collect()
    }

    fn record(&self, location: &str, hard: bool) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(HistoryEntry {
                location: location.to_string(),
                hard,
            });
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigatorPort for HistoryNavigator {
    fn current(&self) -> String {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|e| e.location.clone())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, location: &str) {
        self.record(location, false);
    }

    fn hard_redirect(&self, location: &str) {
        tracing::info!(to = %location, "Hard redirect");
        self.record(location, true);
    }
}
