// Dashboard service - Use case for building dashboard views
use crate::application::snapshot_provider::{SnapshotProvider, SnapshotQuery};
use crate::domain::dashboard::{
    ConfigEntry, Dashboard, DepartmentCard, FocusPanel, MatrixRow, OpsEntry, TargetDefaults,
};
use crate::domain::department::DepartmentSnapshot;
use crate::domain::filters::FilterState;
use crate::domain::kpi::{aggregate, filter_snapshots};
use crate::domain::store::{store_name, Store};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct CachedCollection {
    query: SnapshotQuery,
    fetched_at: Instant,
    snapshots: Arc<Vec<DepartmentSnapshot>>,
}

#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn SnapshotProvider>,
    stores: Vec<Store>,
    target_defaults: TargetDefaults,
    cache_ttl: Duration,
    last_fetch: Arc<Mutex<Option<CachedCollection>>>,
}

impl DashboardService {
    pub fn new(
        provider: Arc<dyn SnapshotProvider>,
        stores: Vec<Store>,
        target_defaults: TargetDefaults,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            stores,
            target_defaults,
            cache_ttl,
            last_fetch: Arc::new(Mutex::new(None)),
        }
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Fetch a fresh collection, bypassing the cache. A failed retrieval
    /// yields an empty collection.
    pub async fn retrieve(&self, query: &SnapshotQuery) -> Vec<DepartmentSnapshot> {
        self.fetch(query).await.unwrap_or_default()
    }

    async fn fetch(&self, query: &SnapshotQuery) -> anyhow::Result<Vec<DepartmentSnapshot>> {
        match self.provider.fetch_snapshots(query).await {
            Ok(snapshots) => {
                tracing::debug!(
                    "Fetched {} snapshots for store={} timeframe={}",
                    snapshots.len(),
                    query.store_id,
                    query.timeframe
                );
                Ok(snapshots)
            }
            Err(e) => {
                tracing::warn!(
                    "Snapshot retrieval failed for store={} timeframe={}: {:#}",
                    query.store_id,
                    query.timeframe,
                    e
                );
                Err(e)
            }
        }
    }

    /// Collection for the selection's store and timeframe. Reuses the last
    /// completed fetch when the key matches and it has not expired. Failed
    /// fetches are served as empty and never cached.
    pub async fn snapshots(&self, filters: &FilterState) -> Arc<Vec<DepartmentSnapshot>> {
        let query = SnapshotQuery::from(filters);

        if let Some(cached) = self.cached(&query) {
            return cached;
        }

        let snapshots = match self.fetch(&query).await {
            Ok(snapshots) => Arc::new(snapshots),
            Err(_) => return Arc::new(Vec::new()),
        };
        let mut slot = self.last_fetch.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(CachedCollection {
            query,
            fetched_at: Instant::now(),
            snapshots: snapshots.clone(),
        });
        snapshots
    }

    fn cached(&self, query: &SnapshotQuery) -> Option<Arc<Vec<DepartmentSnapshot>>> {
        let slot = self.last_fetch.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref()
            .filter(|c| &c.query == query && c.fetched_at.elapsed() < self.cache_ttl)
            .map(|c| c.snapshots.clone())
    }

    pub async fn get_dashboard(&self, filters: &FilterState) -> Dashboard {
        let data = self.snapshots(filters).await;
        let filtered = filter_snapshots(&data, filters);
        let kpi = aggregate(&filtered);

        let title = format!(
            "{} · {}",
            store_name(&self.stores, &filters.store_id),
            filters.timeframe
        );
        let departments = filtered.iter().map(|s| DepartmentCard::from_snapshot(s)).collect();
        let focus = filtered
            .first()
            .copied()
            .or_else(|| data.first())
            .map(FocusPanel::from_snapshot);

        Dashboard::new(title, filters.clone(), kpi, departments, focus)
    }

    pub async fn get_matrix(&self, filters: &FilterState) -> Vec<MatrixRow> {
        let data = self.snapshots(filters).await;
        filter_snapshots(&data, filters)
            .into_iter()
            .map(MatrixRow::from_snapshot)
            .collect()
    }

    pub async fn get_ops(&self, filters: &FilterState) -> Vec<OpsEntry> {
        let data = self.snapshots(filters).await;
        filter_snapshots(&data, filters)
            .into_iter()
            .map(OpsEntry::from_snapshot)
            .collect()
    }

    pub async fn get_config_panel(&self, filters: &FilterState) -> Vec<ConfigEntry> {
        let data = self.snapshots(filters).await;
        filter_snapshots(&data, filters)
            .into_iter()
            .map(|s| ConfigEntry::from_snapshot(s, &self.target_defaults))
            .collect()
    }
}
