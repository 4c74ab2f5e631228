// Synthetic department snapshots for the mock provider
use crate::domain::department::{
    Alert, Department, DepartmentSnapshot, Severity, TopSku, TrendPoint,
};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

/// Currency unit the department weights are expressed in (one lakh).
const SALES_UNIT: u64 = 100_000;
const TREND_DAYS: i64 = 30;
const TOP_SKU_COUNT: u32 = 5;
const SKU_OFFSET: u32 = 100;

const ALERT_RULES: [(Severity, f64, &str); 3] = [
    (Severity::High, 0.4, "Critical OOS on top SKU."),
    (Severity::Medium, 0.5, "Negative NPS comments spiking."),
    (Severity::Low, 0.6, "Replenishment slightly delayed."),
];

pub fn generate(department: Department) -> DepartmentSnapshot {
    generate_with(&mut rand::thread_rng(), department, Utc::now())
}

/// One snapshot per department, in display order.
pub fn generate_collection() -> Vec<DepartmentSnapshot> {
    Department::ALL.into_iter().map(generate).collect()
}

pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    department: Department,
    now: DateTime<Utc>,
) -> DepartmentSnapshot {
    let target_sales = department.sales_weight() * SALES_UNIT;
    let actual_sales = (target_sales as f64 * rng.gen_range(0.8..=1.3)).round() as u64;

    DepartmentSnapshot {
        department,
        target_sales,
        actual_sales,
        stock_health: rng.gen_range(60..=98),
        footfall: rng.gen_range(800..=5000),
        nps: rng.gen_range(20..=85),
        orders_pending: rng.gen_range(0..=35),
        shrinkage_rate: rng.gen_range(1..=6),
        on_time_replenishment: rng.gen_range(70..=99),
        last_updated: now,
        alerts: generate_alerts(rng),
        sales_trend: generate_trend(rng, target_sales as f64 / TREND_DAYS as f64, now),
        top_skus: generate_top_skus(rng, department),
    }
}

fn generate_alerts<R: Rng + ?Sized>(rng: &mut R) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for (severity, probability, message) in ALERT_RULES {
        if rng.gen_bool(probability) {
            alerts.push(Alert {
                id: uuid::Builder::from_random_bytes(rng.r#gen())
                    .into_uuid()
                    .to_string(),
                severity,
                message: message.to_string(),
            });
        }
    }
    alerts
}

fn generate_trend<R: Rng + ?Sized>(
    rng: &mut R,
    daily_base: f64,
    now: DateTime<Utc>,
) -> Vec<TrendPoint> {
    let today = now.date_naive();
    (0..TREND_DAYS)
        .map(|i| TrendPoint {
            date: today - TimeDelta::days(TREND_DAYS - 1 - i),
            sales: (daily_base * rng.gen_range(0.8..=1.4)).round().max(0.0) as u64,
        })
        .collect()
}

fn generate_top_skus<R: Rng + ?Sized>(rng: &mut R, department: Department) -> Vec<TopSku> {
    let prefix = department.sku_prefix();
    (0..TOP_SKU_COUNT)
        .map(|i| TopSku {
            sku: format!("{}-{}", prefix, SKU_OFFSET + i),
            name: format!("{} Product {}", department, i + 1),
            qty_sold: rng.gen_range(200..=2000),
            revenue: rng.gen_range(50_000..=300_000),
        })
        .collect()
}
