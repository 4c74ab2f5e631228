// Chart read models for the focus department
use super::department::DepartmentSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub series_name: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    /// Daily sales over the snapshot's trend window.
    pub fn sales_trend(snapshot: &DepartmentSnapshot) -> Self {
        let points = snapshot
            .sales_trend
            .iter()
            .map(|p| ChartPoint::new(p.date.format("%Y-%m-%d").to_string(), p.sales as f64))
            .collect();

        Self {
            id: "sales-trend".to_string(),
            title: format!("{} · Sales Trend", snapshot.department),
            kind: ChartKind::Line,
            series_name: "Sales".to_string(),
            color: "#2563eb".to_string(),
            points,
        }
    }

    pub fn stock_vs_orders(snapshot: &DepartmentSnapshot) -> Self {
        Self {
            id: "stock-vs-orders".to_string(),
            title: format!("{} · Stock vs Orders", snapshot.department),
            kind: ChartKind::Bar,
            series_name: "Metric".to_string(),
            color: "#10b981".to_string(),
            points: vec![
                ChartPoint::new("Stock Health", f64::from(snapshot.stock_health)),
                ChartPoint::new("On-time Repl.", f64::from(snapshot.on_time_replenishment)),
                ChartPoint::new("Pending Orders", f64::from(snapshot.orders_pending)),
            ],
        }
    }
}
