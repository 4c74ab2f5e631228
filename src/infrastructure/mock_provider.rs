// Mock snapshot provider with simulated latency
use crate::application::snapshot_provider::{SnapshotProvider, SnapshotQuery};
use crate::domain::department::DepartmentSnapshot;
use crate::infrastructure::snapshot_generator::generate_collection;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MockSnapshotProvider {
    latency: Duration,
}

impl MockSnapshotProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SnapshotProvider for MockSnapshotProvider {
    async fn fetch_snapshots(&self, query: &SnapshotQuery) -> anyhow::Result<Vec<DepartmentSnapshot>> {
        // Store and timeframe do not influence the generated figures yet
        tracing::debug!(
            "Generating mock snapshots for store={} timeframe={} after {:?}",
            query.store_id,
            query.timeframe,
            self.latency
        );
        tokio::time::sleep(self.latency).await;
        Ok(generate_collection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::department::Department;
    use crate::domain::filters::Timeframe;

    #[tokio::test]
    async fn test_resolves_after_latency() {
        let provider = MockSnapshotProvider::new(Duration::from_millis(50));
        let started = tokio::time::Instant::now();

        let snapshots = provider
            .fetch_snapshots(&SnapshotQuery::new("all", Timeframe::Month))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(snapshots.len(), Department::ALL.len());
    }

    #[tokio::test]
    async fn test_each_fetch_is_a_new_collection() {
        let provider = MockSnapshotProvider::new(Duration::ZERO);
        let query = SnapshotQuery::new("hyd-01", Timeframe::Week);

        let first = provider.fetch_snapshots(&query).await.unwrap();
        let second = provider.fetch_snapshots(&query).await.unwrap();
        assert_ne!(first, second);
    }
}
