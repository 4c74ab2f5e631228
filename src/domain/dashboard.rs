// Dashboard read models
use super::charts::ChartData;
use super::department::{Alert, Department, DepartmentSnapshot, TopSku};
use super::filters::FilterState;
use super::format::{format_count, format_inr, format_timestamp};
use super::kpi::{pct, KpiSummary};
use serde::{Deserialize, Serialize};

/// Number of alert badges shown on a department card before overflow.
const CARD_ALERT_LIMIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiTile {
    pub id: String,
    pub title: String,
    pub primary: String,
    pub secondary: String,
    pub progress: u32,
}

impl KpiTile {
    fn new(id: &str, title: &str, primary: String, secondary: String, progress: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            primary,
            secondary,
            progress,
        }
    }

    /// The four headline tiles shown above the department grid.
    pub fn from_summary(kpi: &KpiSummary) -> Vec<KpiTile> {
        let to_target = kpi.pct_to_target();
        let pending_headroom = 100u64.saturating_sub(kpi.total_pending) as u32;

        vec![
            KpiTile::new(
                "sales",
                "Sales vs Target",
                format_inr(kpi.total_actual),
                format!("Target: {} ({}%)", format_inr(kpi.total_target), to_target),
                to_target,
            ),
            KpiTile::new(
                "stock",
                "Stock Health",
                format!("{}%", kpi.avg_stock),
                "Weighted average across selected".to_string(),
                kpi.avg_stock,
            ),
            KpiTile::new(
                "footfall",
                "Footfall",
                format_count(kpi.total_footfall),
                format!("Avg NPS: {}", kpi.avg_nps),
                kpi.avg_nps,
            ),
            KpiTile::new(
                "pending",
                "Pending Orders",
                format_count(kpi.total_pending),
                "Supplier POs & customer pickups".to_string(),
                pending_headroom,
            ),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCard {
    pub department: Department,
    pub pct_of_target: u32,
    pub on_target: bool,
    pub sales: String,
    pub target: String,
    pub stock_health: u32,
    pub footfall: String,
    pub nps: u32,
    pub orders_pending: u32,
    pub shrinkage_rate: u32,
    pub on_time_replenishment: u32,
    pub alerts: Vec<Alert>,
    pub more_alerts: usize,
}

impl DepartmentCard {
    pub fn from_snapshot(s: &DepartmentSnapshot) -> Self {
        Self {
            department: s.department,
            pct_of_target: pct(s.actual_sales, s.target_sales),
            on_target: s.actual_sales >= s.target_sales,
            sales: format_inr(s.actual_sales),
            target: format_inr(s.target_sales),
            stock_health: s.stock_health,
            footfall: format_count(u64::from(s.footfall)),
            nps: s.nps,
            orders_pending: s.orders_pending,
            shrinkage_rate: s.shrinkage_rate,
            on_time_replenishment: s.on_time_replenishment,
            alerts: s.alerts.iter().take(CARD_ALERT_LIMIT).cloned().collect(),
            more_alerts: s.alerts.len().saturating_sub(CARD_ALERT_LIMIT),
        }
    }
}

/// Charts and top SKUs for a single department.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusPanel {
    pub department: Department,
    pub charts: Vec<ChartData>,
    pub top_skus: Vec<TopSku>,
}

impl FocusPanel {
    pub fn from_snapshot(s: &DepartmentSnapshot) -> Self {
        Self {
            department: s.department,
            charts: vec![ChartData::sales_trend(s), ChartData::stock_vs_orders(s)],
            top_skus: s.top_skus.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub department: Department,
    pub sales: String,
    pub target: String,
    pub pct_to_target: u32,
    pub stock_health: u32,
    pub nps: u32,
    pub orders_pending: u32,
    pub shrinkage_rate: u32,
    pub on_time_replenishment: u32,
    pub updated: String,
}

impl MatrixRow {
    pub fn from_snapshot(s: &DepartmentSnapshot) -> Self {
        Self {
            department: s.department,
            sales: format_inr(s.actual_sales),
            target: format_inr(s.target_sales),
            pct_to_target: pct(s.actual_sales, s.target_sales),
            stock_health: s.stock_health,
            nps: s.nps,
            orders_pending: s.orders_pending,
            shrinkage_rate: s.shrinkage_rate,
            on_time_replenishment: s.on_time_replenishment,
            updated: format_timestamp(&s.last_updated),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpsEntry {
    pub department: Department,
    pub last_updated: String,
    pub alerts: Vec<Alert>,
    pub status: String,
}

impl OpsEntry {
    pub fn from_snapshot(s: &DepartmentSnapshot) -> Self {
        let status = if s.alerts.is_empty() {
            "No active issues.".to_string()
        } else {
            format!("{} active issue(s)", s.alerts.len())
        };

        Self {
            department: s.department,
            last_updated: format_timestamp(&s.last_updated),
            alerts: s.alerts.clone(),
            status,
        }
    }
}

/// Default thresholds offered on the configuration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDefaults {
    pub stock_health: u32,
    pub nps: u32,
    pub max_pending_orders: u32,
}

impl Default for TargetDefaults {
    fn default() -> Self {
        Self {
            stock_health: 90,
            nps: 75,
            max_pending_orders: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub department: Department,
    pub sales_target: u64,
    pub stock_health_target: u32,
    pub nps_target: u32,
    pub max_pending_orders: u32,
}

impl ConfigEntry {
    pub fn from_snapshot(s: &DepartmentSnapshot, defaults: &TargetDefaults) -> Self {
        Self {
            department: s.department,
            sales_target: s.target_sales,
            stock_health_target: defaults.stock_health,
            nps_target: defaults.nps,
            max_pending_orders: defaults.max_pending_orders,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub filters: FilterState,
    pub kpi: KpiSummary,
    pub tiles: Vec<KpiTile>,
    pub departments: Vec<DepartmentCard>,
    pub focus: Option<FocusPanel>,
}

impl Dashboard {
    pub fn new(
        title: String,
        filters: FilterState,
        kpi: KpiSummary,
        departments: Vec<DepartmentCard>,
        focus: Option<FocusPanel>,
    ) -> Self {
        let tiles = KpiTile::from_summary(&kpi);
        Self {
            title,
            filters,
            kpi,
            tiles,
            departments,
            focus,
        }
    }
}
