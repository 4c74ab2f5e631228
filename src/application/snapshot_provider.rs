// Provider trait for department snapshot retrieval
use crate::domain::department::DepartmentSnapshot;
use crate::domain::filters::{FilterState, Timeframe};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Retrieval key. A collection is fetched per store and timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotQuery {
    pub store_id: String,
    pub timeframe: Timeframe,
}

impl SnapshotQuery {
    pub fn new(store_id: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            store_id: store_id.into(),
            timeframe,
        }
    }
}

impl From<&FilterState> for SnapshotQuery {
    fn from(filters: &FilterState) -> Self {
        Self::new(filters.store_id.clone(), filters.timeframe)
    }
}

#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch one snapshot per department for the given store and timeframe
    async fn fetch_snapshots(&self, query: &SnapshotQuery) -> anyhow::Result<Vec<DepartmentSnapshot>>;
}
