// Filter selection domain model
use super::department::{Department, UnknownDepartment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ALL_STORES: &str = "all";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown timeframe: {0}")]
pub struct UnknownTimeframe(pub String);

/// Reporting window. Only part of the selection; generation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
}

impl Timeframe {
    pub const ALL: [Timeframe; 4] = [
        Timeframe::Today,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::Quarter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Today => "Today",
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Quarter => "Quarter",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = UnknownTimeframe;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTimeframe(s.to_string()))
    }
}

/// Either every department or exactly one. Serialized as `"All"` or the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DepartmentSelection {
    #[default]
    All,
    Only(Department),
}

impl DepartmentSelection {
    pub fn matches(self, department: Department) -> bool {
        match self {
            DepartmentSelection::All => true,
            DepartmentSelection::Only(selected) => selected == department,
        }
    }
}

impl FromStr for DepartmentSelection {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(DepartmentSelection::All);
        }
        s.parse().map(DepartmentSelection::Only)
    }
}

impl TryFrom<String> for DepartmentSelection {
    type Error = UnknownDepartment;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DepartmentSelection> for String {
    fn from(value: DepartmentSelection) -> Self {
        match value {
            DepartmentSelection::All => "All".to_string(),
            DepartmentSelection::Only(d) => d.label().to_string(),
        }
    }
}

/// The four independent selection variables of a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub store_id: String,
    pub timeframe: Timeframe,
    pub query: String,
    pub selected_dept: DepartmentSelection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            store_id: ALL_STORES.to_string(),
            timeframe: Timeframe::default(),
            query: String::new(),
            selected_dept: DepartmentSelection::default(),
        }
    }
}

impl FilterState {
    pub fn set_store_id(&mut self, store_id: impl Into<String>) {
        self.store_id = store_id.into();
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_selected_dept(&mut self, selected: DepartmentSelection) {
        self.selected_dept = selected;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
