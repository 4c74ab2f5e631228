// HTTP snapshot provider backed by a departments API
use crate::application::snapshot_provider::{SnapshotProvider, SnapshotQuery};
use crate::domain::department::{Department, DepartmentSnapshot};
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpSnapshotProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSnapshotProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, query: &SnapshotQuery) -> String {
        format!(
            "{}/departments/snapshots?storeId={}&timeframe={}",
            self.base_url,
            urlencoding::encode(&query.store_id),
            urlencoding::encode(query.timeframe.as_str())
        )
    }
}

#[async_trait]
impl SnapshotProvider for HttpSnapshotProvider {
    async fn fetch_snapshots(&self, query: &SnapshotQuery) -> Result<Vec<DepartmentSnapshot>> {
        let url = self.build_url(query);
        tracing::debug!("Fetching department snapshots from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to departments API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Departments API failed with status {}: {}", status, body);
        }

        let snapshots = response
            .json::<Vec<DepartmentSnapshot>>()
            .await
            .context("Failed to parse departments API response")?;

        check_collection(&snapshots).context("Departments API returned an invalid collection")?;
        Ok(snapshots)
    }
}

/// A collection holds exactly one snapshot per department, with every
/// percentage in 0..=100. Fractional percentages are rejected at decode.
fn check_collection(snapshots: &[DepartmentSnapshot]) -> Result<()> {
    for dept in Department::ALL {
        let count = snapshots.iter().filter(|s| s.department == dept).count();
        anyhow::ensure!(count == 1, "expected one {} snapshot, found {}", dept.label(), count);
    }
    anyhow::ensure!(
        snapshots.len() == Department::ALL.len(),
        "expected {} snapshots, found {}",
        Department::ALL.len(),
        snapshots.len()
    );

    for s in snapshots {
        let percentages = [
            ("stockHealth", s.stock_health),
            ("nps", s.nps),
            ("shrinkageRate", s.shrinkage_rate),
            ("onTimeReplenishment", s.on_time_replenishment),
        ];
        for (field, value) in percentages {
            anyhow::ensure!(
                value <= 100,
                "{} {} out of range: {}",
                s.department.label(),
                field,
                value
            );
        }
    }
    Ok(())
}
