use super::{Insertable, Patch, double_option};
use crate::model::{AssetDefinition, PerformanceTarget, ProductDefinition, ProductFamily};
use mes_query::{Changes, Filter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssetDefinition {
    pub asset_name: String,
    pub asset_description: String,
    pub asset_type_id: i32,
    #[serde(default)]
    pub parent_asset_id: Option<i32>,
    #[serde(default)]
    pub tag_path: Option<String>,
}

impl Insertable for NewAssetDefinition {
    type Entity = AssetDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_name", self.asset_name)
            .set("asset_description", self.asset_description)
            .set("asset_type_id", self.asset_type_id)
            .set("parent_asset_id", self.parent_asset_id)
            .set("tag_path", self.tag_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDefinitionPatch {
    pub asset_name: Option<String>,
    pub asset_description: Option<String>,
    pub asset_type_id: Option<i32>,
    /// `Some(None)` moves the asset to the top level.
    #[serde(deserialize_with = "double_option")]
    pub parent_asset_id: Option<Option<i32>>,
    #[serde(deserialize_with = "double_option")]
    pub tag_path: Option<Option<String>>,
}

impl Patch for AssetDefinitionPatch {
    type Entity = AssetDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("asset_name", self.asset_name)
            .set_opt("asset_description", self.asset_description)
            .set_opt("asset_type_id", self.asset_type_id)
            .set_nullable("parent_asset_id", self.parent_asset_id)
            .set_nullable("tag_path", self.tag_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDefinitionFilter {
    pub asset_type_id: Option<i32>,
    pub parent_asset_id: Option<i32>,
}

impl From<AssetDefinitionFilter> for Filter {
    fn from(f: AssetDefinitionFilter) -> Self {
        Filter::new()
            .eq_opt("asset_type_id", f.asset_type_id)
            .eq_opt("parent_asset_id", f.parent_asset_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductFamily {
    pub product_family_name: String,
    #[serde(default)]
    pub product_family_description: Option<String>,
}

impl Insertable for NewProductFamily {
    type Entity = ProductFamily;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("product_family_name", self.product_family_name)
            .set("product_family_description", self.product_family_description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFamilyPatch {
    pub product_family_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub product_family_description: Option<Option<String>>,
}

impl Patch for ProductFamilyPatch {
    type Entity = ProductFamily;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("product_family_name", self.product_family_name)
            .set_nullable("product_family_description", self.product_family_description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductDefinition {
    pub product_name: String,
    pub product_description: String,
    #[serde(default)]
    pub product_family_id: Option<i32>,
    pub unit_of_measure: String,
    pub tolerance: f64,
    #[serde(default)]
    pub ideal_cycle_time: Option<f64>,
}

impl Insertable for NewProductDefinition {
    type Entity = ProductDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("product_name", self.product_name)
            .set("product_description", self.product_description)
            .set("product_family_id", self.product_family_id)
            .set("unit_of_measure", self.unit_of_measure)
            .set("tolerance", self.tolerance)
            .set("ideal_cycle_time", self.ideal_cycle_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDefinitionPatch {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub product_family_id: Option<Option<i32>>,
    pub unit_of_measure: Option<String>,
    pub tolerance: Option<f64>,
    #[serde(deserialize_with = "double_option")]
    pub ideal_cycle_time: Option<Option<f64>>,
}

impl Patch for ProductDefinitionPatch {
    type Entity = ProductDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("product_name", self.product_name)
            .set_opt("product_description", self.product_description)
            .set_nullable("product_family_id", self.product_family_id)
            .set_opt("unit_of_measure", self.unit_of_measure)
            .set_opt("tolerance", self.tolerance)
            .set_nullable("ideal_cycle_time", self.ideal_cycle_time)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDefinitionFilter {
    pub product_family_id: Option<i32>,
}

impl From<ProductDefinitionFilter> for Filter {
    fn from(f: ProductDefinitionFilter) -> Self {
        Filter::new().eq_opt("product_family_id", f.product_family_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPerformanceTarget {
    pub product_id: i32,
    pub asset_id: i32,
    pub target_value: f64,
    #[serde(default)]
    pub target_unit: Option<String>,
}

impl Insertable for NewPerformanceTarget {
    type Entity = PerformanceTarget;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("product_id", self.product_id)
            .set("asset_id", self.asset_id)
            .set("target_value", self.target_value)
            .set("target_unit", self.target_unit)
    }
}

/// The key columns are not patchable; delete and recreate to move a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceTargetPatch {
    pub target_value: Option<f64>,
    #[serde(deserialize_with = "double_option")]
    pub target_unit: Option<Option<String>>,
}

impl Patch for PerformanceTargetPatch {
    type Entity = PerformanceTarget;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("target_value", self.target_value)
            .set_nullable("target_unit", self.target_unit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceTargetFilter {
    pub asset_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl From<PerformanceTargetFilter> for Filter {
    fn from(f: PerformanceTargetFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("product_id", f.product_id)
    }
}
