/// Known-wallet label lookup

use std::collections::HashMap;

use crate::config::Labels;

/// Address to label lookup used when annotating top holders.
///
/// A miss is not an error; the holder simply carries no label.
pub trait KnownWalletRegistry: Send + Sync {
    fn label_for(&self, address: &str) -> Option<String>;
}

/// Fixed in-memory registry, keyed by exact address match
#[derive(Debug, Clone, Default)]
pub struct StaticWalletLabels {
    labels: HashMap<String, String>,
}

impl StaticWalletLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn with_label(mut self, address: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(address.into(), label.into());
        self
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<&Labels> for StaticWalletLabels {
    fn from(labels: &Labels) -> Self {
        Self::new(labels.0.clone())
    }
}

impl KnownWalletRegistry for StaticWalletLabels {
    fn label_for(&self, address: &str) -> Option<String> {
        self.labels.get(address).cloned()
    }
}
