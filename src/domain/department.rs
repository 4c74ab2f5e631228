// Department domain model
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Grocery,
    #[serde(rename = "Fruits & Vegetables")]
    FruitsAndVegetables,
    Dairy,
    Frozen,
    #[serde(rename = "FMCG")]
    Fmcg,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Household,
    Electronics,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 8] = [
        Department::Grocery,
        Department::FruitsAndVegetables,
        Department::Dairy,
        Department::Frozen,
        Department::Fmcg,
        Department::PersonalCare,
        Department::Household,
        Department::Electronics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Grocery => "Grocery",
            Department::FruitsAndVegetables => "Fruits & Vegetables",
            Department::Dairy => "Dairy",
            Department::Frozen => "Frozen",
            Department::Fmcg => "FMCG",
            Department::PersonalCare => "Personal Care",
            Department::Household => "Household",
            Department::Electronics => "Electronics",
        }
    }

    /// Relative sales weight, in lakhs of the period target.
    pub fn sales_weight(self) -> u64 {
        match self {
            Department::Grocery => 14,
            Department::FruitsAndVegetables => 7,
            Department::Dairy => 6,
            Department::Frozen => 5,
            Department::Fmcg => 10,
            Department::PersonalCare => 8,
            Department::Household => 9,
            Department::Electronics => 20,
        }
    }

    /// SKU prefix: first three letters of the label, uppercased.
    pub fn sku_prefix(self) -> String {
        self.label().chars().take(3).collect::<String>().to_uppercase()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sales: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSku {
    pub sku: String,
    pub name: String,
    pub qty_sold: u32,
    pub revenue: u64,
}

/// One department's metrics for the current fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSnapshot {
    pub department: Department,
    pub target_sales: u64,
    pub actual_sales: u64,
    pub stock_health: u32,
    pub footfall: u32,
    pub nps: u32,
    pub orders_pending: u32,
    pub shrinkage_rate: u32,
    pub on_time_replenishment: u32,
    pub last_updated: DateTime<Utc>,
    pub alerts: Vec<Alert>,
    pub sales_trend: Vec<TrendPoint>,
    #[serde(rename = "topSKUs")]
    pub top_skus: Vec<TopSku>,
}
