//! Event logs. Append-only: created and read, never updated through this layer.
//!
//! The denormalized name columns (`asset_name`, `state_name`, ...) are filled
//! in by the database on insert.

use crate::impl_from_row;
use crate::table::{Entity, Table};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateLog {
    pub state_log_id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub state_id: i32,
    pub state_name: String,
    pub state_type_id: i32,
    pub state_type_name: String,
    pub from_state_id: Option<i32>,
    pub additional_info: Option<serde_json::Value>,
    pub downtime_reason_id: Option<i32>,
    pub downtime_reason_code: Option<String>,
    pub downtime_reason_name: Option<String>,
    pub logged_by: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(StateLog {
    state_log_id,
    asset_id,
    asset_name,
    state_id,
    state_name,
    state_type_id,
    state_type_name,
    from_state_id,
    additional_info,
    downtime_reason_id,
    downtime_reason_code,
    downtime_reason_name,
    logged_by,
    logged_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for StateLog {
    const TABLE: Table = Table {
        name: "state_log",
        key: &["state_log_id"],
        order_by: Some("logged_at DESC"),
        label: "State log",
    };
    type Key = i32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionLog {
    pub production_log_id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub product_family_id: i32,
    pub product_family_name: String,
    pub start_ts: DateTime<Utc>,
    /// `None` while the run is still open.
    pub end_ts: Option<DateTime<Utc>>,
    pub additional_info: Option<serde_json::Value>,
    pub logged_by: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(ProductionLog {
    production_log_id,
    asset_id,
    asset_name,
    product_id,
    product_name,
    product_family_id,
    product_family_name,
    start_ts,
    end_ts,
    additional_info,
    logged_by,
    logged_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for ProductionLog {
    const TABLE: Table = Table {
        name: "production_log",
        key: &["production_log_id"],
        order_by: Some("start_ts DESC"),
        label: "Production log",
    };
    type Key = i32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountLog {
    pub count_log_id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub production_log_id: Option<i32>,
    pub count_type_id: i32,
    pub count_type_name: String,
    pub quantity: f64,
    pub product_id: i32,
    pub product_name: String,
    pub product_family_id: i32,
    pub product_family_name: String,
    pub additional_info: Option<serde_json::Value>,
    pub logged_by: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(CountLog {
    count_log_id,
    asset_id,
    asset_name,
    production_log_id,
    count_type_id,
    count_type_name,
    quantity,
    product_id,
    product_name,
    product_family_id,
    product_family_name,
    additional_info,
    logged_by,
    logged_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for CountLog {
    const TABLE: Table = Table {
        name: "count_log",
        key: &["count_log_id"],
        order_by: Some("logged_at DESC"),
        label: "Count log",
    };
    type Key = i32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementLog {
    pub measurement_log_id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub product_id: Option<i32>,
    pub product_name: Option<String>,
    pub product_family_id: i32,
    pub product_family_name: String,
    pub measurement_type_id: i32,
    pub measurement_type_name: String,
    pub target_value: Option<f64>,
    pub actual_value: Option<f64>,
    pub unit_of_measure: Option<String>,
    pub tolerance: f64,
    pub in_tolerance: Option<bool>,
    pub additional_info: Option<serde_json::Value>,
    pub logged_by: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(MeasurementLog {
    measurement_log_id,
    asset_id,
    asset_name,
    product_id,
    product_name,
    product_family_id,
    product_family_name,
    measurement_type_id,
    measurement_type_name,
    target_value,
    actual_value,
    unit_of_measure,
    tolerance,
    in_tolerance,
    additional_info,
    logged_by,
    logged_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for MeasurementLog {
    const TABLE: Table = Table {
        name: "measurement_log",
        key: &["measurement_log_id"],
        order_by: Some("logged_at DESC"),
        label: "Measurement log",
    };
    type Key = i32;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiLog {
    pub kpi_log_id: i32,
    pub asset_id: i32,
    pub asset_name: String,
    pub kpi_id: i32,
    pub kpi_name: String,
    pub kpi_value: f64,
    pub start_ts: DateTime<Utc>,
    pub end_ts: DateTime<Utc>,
    pub additional_info: Option<serde_json::Value>,
    pub logged_by: Option<String>,
    pub logged_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(KpiLog {
    kpi_log_id,
    asset_id,
    asset_name,
    kpi_id,
    kpi_name,
    kpi_value,
    start_ts,
    end_ts,
    additional_info,
    logged_by,
    logged_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for KpiLog {
    const TABLE: Table = Table {
        name: "kpi_log",
        key: &["kpi_log_id"],
        order_by: Some("start_ts DESC"),
        label: "KPI log",
    };
    type Key = i32;
}
