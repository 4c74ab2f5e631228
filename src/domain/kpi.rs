// Filtering and KPI aggregation over department snapshots
use super::department::{Alert, DepartmentSnapshot};
use super::filters::FilterState;
use serde::Serialize;

/// Aggregated KPIs over a filtered snapshot list. Never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_target: u64,
    pub total_actual: u64,
    pub avg_stock: u32,
    pub total_footfall: u64,
    pub avg_nps: u32,
    pub total_pending: u64,
    pub alerts: Vec<Alert>,
}

impl KpiSummary {
    pub fn pct_to_target(&self) -> u32 {
        pct(self.total_actual, self.total_target)
    }
}

/// Percentage of `actual` against `target`, rounded. Zero when `target` is zero.
pub fn pct(actual: u64, target: u64) -> u32 {
    if target == 0 {
        return 0;
    }
    (actual as f64 / target as f64 * 100.0).round() as u32
}

/// Keeps the snapshots matching both the department selection and the
/// free-text query, in their original order.
pub fn filter_snapshots<'a>(
    snapshots: &'a [DepartmentSnapshot],
    filter: &FilterState,
) -> Vec<&'a DepartmentSnapshot> {
    let query = filter.query.trim().to_lowercase();

    snapshots
        .iter()
        .filter(|s| filter.selected_dept.matches(s.department))
        .filter(|s| query.is_empty() || s.department.label().to_lowercase().contains(&query))
        .collect()
}

pub fn aggregate(rows: &[&DepartmentSnapshot]) -> KpiSummary {
    let sum = |f: fn(&DepartmentSnapshot) -> u64| rows.iter().map(|r| f(r)).sum::<u64>();
    let divisor = rows.len().max(1) as f64;
    let avg = |total: u64| (total as f64 / divisor).round() as u32;

    KpiSummary {
        total_target: sum(|r| r.target_sales),
        total_actual: sum(|r| r.actual_sales),
        avg_stock: avg(sum(|r| u64::from(r.stock_health))),
        total_footfall: sum(|r| u64::from(r.footfall)),
        avg_nps: avg(sum(|r| u64::from(r.nps))),
        total_pending: sum(|r| u64::from(r.orders_pending)),
        alerts: rows.iter().flat_map(|r| r.alerts.iter().cloned()).collect(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::department::{Alert, Department, DepartmentSnapshot, Severity};
    use chrono::{TimeZone, Utc};

    pub fn snapshot(department: Department, target: u64, actual: u64) -> DepartmentSnapshot {
        DepartmentSnapshot {
            department,
            target_sales: target,
            actual_sales: actual,
            stock_health: 80,
            footfall: 1000,
            nps: 50,
            orders_pending: 5,
            shrinkage_rate: 2,
            on_time_replenishment: 90,
            last_updated: Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap(),
            alerts: Vec::new(),
            sales_trend: Vec::new(),
            top_skus: Vec::new(),
        }
    }

    pub fn alert(id: &str, severity: Severity) -> Alert {
        Alert {
            id: id.to_string(),
            severity,
            message: format!("{:?} alert", severity),
        }
    }

    /// One snapshot per department, targets 1..=8 lakh.
    pub fn collection() -> Vec<DepartmentSnapshot> {
        Department::ALL
            .into_iter()
            .enumerate()
            .map(|(i, d)| {
                let target = (i as u64 + 1) * 100_000;
                snapshot(d, target, target / 2)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{alert, collection, snapshot};
    use super::*;
    use crate::domain::department::{Department, Severity};
    use crate::domain::filters::DepartmentSelection;

    fn filter(selected: DepartmentSelection, query: &str) -> FilterState {
        FilterState {
            selected_dept: selected,
            query: query.to_string(),
            ..FilterState::default()
        }
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(0, 0), 0);
        assert_eq!(pct(1_234, 0), 0);
        assert_eq!(pct(500, 500), 100);
        assert_eq!(pct(0, 500), 0);
        assert_eq!(pct(1_800_000, 2_000_000), 90);
        assert_eq!(pct(2, 3), 67);
        assert_eq!(pct(1, 8), 13);
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let data = collection();
        let kept = filter_snapshots(&data, &FilterState::default());
        let expected: Vec<&DepartmentSnapshot> = data.iter().collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let data = collection();
        let kept = filter_snapshots(&data, &filter(DepartmentSelection::All, "o"));
        let labels: Vec<&str> = kept.iter().map(|s| s.department.label()).collect();
        assert_eq!(
            labels,
            vec!["Grocery", "Frozen", "Personal Care", "Household", "Electronics"]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let data = collection();
        let kept = filter_snapshots(&data, &filter(DepartmentSelection::All, "  fRuItS "));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].department, Department::FruitsAndVegetables);

        let blank = filter_snapshots(&data, &filter(DepartmentSelection::All, "   "));
        assert_eq!(blank.len(), 8);
    }

    #[test]
    fn test_selection_and_query_are_conjunctive() {
        let data = collection();
        let dairy = DepartmentSelection::Only(Department::Dairy);
        assert_eq!(filter_snapshots(&data, &filter(dairy, "dai")).len(), 1);
        assert!(filter_snapshots(&data, &filter(dairy, "frozen")).is_empty());
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), KpiSummary::default());
        assert_eq!(KpiSummary::default().pct_to_target(), 0);
    }

    #[test]
    fn test_aggregate_sums_and_rounded_averages() {
        let mut a = snapshot(Department::Dairy, 600_000, 650_000);
        a.stock_health = 61;
        a.nps = 20;
        a.footfall = 900;
        a.orders_pending = 3;
        let mut b = snapshot(Department::Frozen, 500_000, 400_000);
        b.stock_health = 62;
        b.nps = 25;
        b.footfall = 1_100;
        b.orders_pending = 10;

        let kpi = aggregate(&[&a, &b]);
        assert_eq!(kpi.total_target, 1_100_000);
        assert_eq!(kpi.total_actual, 1_050_000);
        assert_eq!(kpi.total_footfall, 2_000);
        assert_eq!(kpi.total_pending, 13);
        // 61.5 and 22.5 round up
        assert_eq!(kpi.avg_stock, 62);
        assert_eq!(kpi.avg_nps, 23);
    }

    #[test]
    fn test_aggregate_is_additive_over_filtered_rows() {
        let data = collection();
        let kept = filter_snapshots(&data, &filter(DepartmentSelection::All, "e"));
        let kpi = aggregate(&kept);
        assert_eq!(kpi.total_target, kept.iter().map(|s| s.target_sales).sum::<u64>());
        assert_eq!(kpi.total_actual, kept.iter().map(|s| s.actual_sales).sum::<u64>());
        assert_eq!(
            kpi.total_footfall,
            kept.iter().map(|s| u64::from(s.footfall)).sum::<u64>()
        );
        assert_eq!(
            kpi.total_pending,
            kept.iter().map(|s| u64::from(s.orders_pending)).sum::<u64>()
        );
    }

    #[test]
    fn test_alerts_concatenate_without_dedup() {
        let mut a = snapshot(Department::Grocery, 1, 1);
        a.alerts = vec![alert("x", Severity::High), alert("y", Severity::Low)];
        let mut b = snapshot(Department::Dairy, 1, 1);
        b.alerts = vec![alert("x", Severity::Medium)];

        let kpi = aggregate(&[&a, &b]);
        let ids: Vec<&str> = kpi.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "x"]);
        assert_eq!(kpi.alerts[2].severity, Severity::Medium);
    }

    #[test]
    fn test_electronics_scenario() {
        let mut data = collection();
        let electronics = data
            .iter_mut()
            .find(|s| s.department == Department::Electronics)
            .unwrap();
        electronics.target_sales = 2_000_000;
        electronics.actual_sales = 1_800_000;

        let selection = filter(DepartmentSelection::Only(Department::Electronics), "");
        let kept = filter_snapshots(&data, &selection);
        let kpi = aggregate(&kept);

        assert_eq!(kpi.total_target, 2_000_000);
        assert_eq!(kpi.total_actual, 1_800_000);
        assert_eq!(pct(kept[0].actual_sales, kept[0].target_sales), 90);
        assert_eq!(kpi.pct_to_target(), 90);
    }

    #[test]
    fn test_engine_leaves_input_untouched() {
        let data = collection();
        let before = data.clone();
        let kept = filter_snapshots(&data, &filter(DepartmentSelection::All, "d"));
        let _ = aggregate(&kept);
        assert_eq!(data, before);
    }
}
