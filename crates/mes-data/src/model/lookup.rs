use crate::impl_from_row;
use crate::table::{Entity, Mutable, Table};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetType {
    pub asset_type_id: i32,
    pub asset_type_name: String,
    pub asset_type_description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(AssetType {
    asset_type_id,
    asset_type_name,
    asset_type_description,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for AssetType {
    const TABLE: Table = Table {
        name: "asset_type",
        key: &["asset_type_id"],
        order_by: Some("asset_type_name"),
        label: "Asset type",
    };
    type Key = i32;
}

impl Mutable for AssetType {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateType {
    pub state_type_id: i32,
    pub state_type_name: String,
    pub state_type_description: Option<String>,
    pub state_type_color: String,
    pub is_downtime: bool,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(StateType {
    state_type_id,
    state_type_name,
    state_type_description,
    state_type_color,
    is_downtime,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for StateType {
    const TABLE: Table = Table {
        name: "state_type",
        key: &["state_type_id"],
        order_by: Some("state_type_name"),
        label: "State type",
    };
    type Key = i32;
}

impl Mutable for StateType {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateDefinition {
    pub state_id: i32,
    pub state_type_id: i32,
    pub state_name: String,
    pub state_description: Option<String>,
    pub state_color: String,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(StateDefinition {
    state_id,
    state_type_id,
    state_name,
    state_description,
    state_color,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for StateDefinition {
    const TABLE: Table = Table {
        name: "state_definition",
        key: &["state_id"],
        order_by: Some("state_name"),
        label: "State definition",
    };
    type Key = i32;
}

impl Mutable for StateDefinition {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DowntimeReason {
    pub downtime_reason_id: i32,
    pub downtime_reason_code: String,
    pub downtime_reason_name: String,
    pub downtime_reason_description: Option<String>,
    pub is_planned: bool,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(DowntimeReason {
    downtime_reason_id,
    downtime_reason_code,
    downtime_reason_name,
    downtime_reason_description,
    is_planned,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for DowntimeReason {
    const TABLE: Table = Table {
        name: "downtime_reason",
        key: &["downtime_reason_id"],
        order_by: Some("downtime_reason_code"),
        label: "Downtime reason",
    };
    type Key = i32;
}

impl Mutable for DowntimeReason {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountType {
    pub count_type_id: i32,
    pub count_type_name: String,
    pub count_type_description: Option<String>,
    pub count_type_unit: String,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(CountType {
    count_type_id,
    count_type_name,
    count_type_description,
    count_type_unit,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for CountType {
    const TABLE: Table = Table {
        name: "count_type",
        key: &["count_type_id"],
        order_by: Some("count_type_name"),
        label: "Count type",
    };
    type Key = i32;
}

impl Mutable for CountType {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementType {
    pub measurement_type_id: i32,
    pub measurement_type_name: String,
    pub measurement_type_description: Option<String>,
    pub measurement_type_unit: String,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(MeasurementType {
    measurement_type_id,
    measurement_type_name,
    measurement_type_description,
    measurement_type_unit,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for MeasurementType {
    const TABLE: Table = Table {
        name: "measurement_type",
        key: &["measurement_type_id"],
        order_by: Some("measurement_type_name"),
        label: "Measurement type",
    };
    type Key = i32;
}

impl Mutable for MeasurementType {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiDefinition {
    pub kpi_id: i32,
    pub kpi_name: String,
    pub kpi_description: Option<String>,
    pub kpi_unit: String,
    pub kpi_formula: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(KpiDefinition {
    kpi_id,
    kpi_name,
    kpi_description,
    kpi_unit,
    kpi_formula,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for KpiDefinition {
    const TABLE: Table = Table {
        name: "kpi_definition",
        key: &["kpi_id"],
        order_by: Some("kpi_name"),
        label: "KPI definition",
    };
    type Key = i32;
}

impl Mutable for KpiDefinition {}
