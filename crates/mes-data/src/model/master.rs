use crate::impl_from_row;
use crate::table::{Entity, Mutable, Table};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetDefinition {
    pub asset_id: i32,
    pub asset_name: String,
    pub asset_description: String,
    pub asset_type_id: i32,
    /// `None` for a top-level asset.
    pub parent_asset_id: Option<i32>,
    pub tag_path: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(AssetDefinition {
    asset_id,
    asset_name,
    asset_description,
    asset_type_id,
    parent_asset_id,
    tag_path,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for AssetDefinition {
    const TABLE: Table = Table {
        name: "asset_definition",
        key: &["asset_id"],
        order_by: Some("asset_name"),
        label: "Asset definition",
    };
    type Key = i32;
}

impl Mutable for AssetDefinition {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFamily {
    pub product_family_id: i32,
    pub product_family_name: String,
    pub product_family_description: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(ProductFamily {
    product_family_id,
    product_family_name,
    product_family_description,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for ProductFamily {
    const TABLE: Table = Table {
        name: "product_family",
        key: &["product_family_id"],
        order_by: Some("product_family_name"),
        label: "Product family",
    };
    type Key = i32;
}

impl Mutable for ProductFamily {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDefinition {
    pub product_id: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_family_id: Option<i32>,
    pub unit_of_measure: String,
    pub tolerance: f64,
    /// Seconds per unit at rated speed.
    pub ideal_cycle_time: Option<f64>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(ProductDefinition {
    product_id,
    product_name,
    product_description,
    product_family_id,
    unit_of_measure,
    tolerance,
    ideal_cycle_time,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for ProductDefinition {
    const TABLE: Table = Table {
        name: "product_definition",
        key: &["product_id"],
        order_by: Some("product_name"),
        label: "Product definition",
    };
    type Key = i32;
}

impl Mutable for ProductDefinition {}

/// Target rate of one product on one asset, keyed by `(asset_id, product_id)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceTarget {
    pub asset_id: i32,
    pub product_id: i32,
    pub target_value: f64,
    pub target_unit: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}

impl_from_row!(PerformanceTarget {
    asset_id,
    product_id,
    target_value,
    target_unit,
    created_by,
    created_at,
    updated_by,
    updated_at,
    removed,
});

impl Entity for PerformanceTarget {
    const TABLE: Table = Table {
        name: "performance_target",
        key: &["asset_id", "product_id"],
        order_by: None,
        label: "Performance target",
    };
    type Key = (i32, i32);
}

impl Mutable for PerformanceTarget {}
