use super::{Insertable, Patch, double_option};
use crate::model::{
    AssetType, CountType, DowntimeReason, KpiDefinition, MeasurementType, StateDefinition,
    StateType,
};
use mes_query::{Changes, Filter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssetType {
    pub asset_type_name: String,
    #[serde(default)]
    pub asset_type_description: Option<String>,
}

impl Insertable for NewAssetType {
    type Entity = AssetType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_type_name", self.asset_type_name)
            .set("asset_type_description", self.asset_type_description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetTypePatch {
    pub asset_type_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub asset_type_description: Option<Option<String>>,
}

impl Patch for AssetTypePatch {
    type Entity = AssetType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("asset_type_name", self.asset_type_name)
            .set_nullable("asset_type_description", self.asset_type_description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStateType {
    pub state_type_name: String,
    #[serde(default)]
    pub state_type_description: Option<String>,
    pub state_type_color: String,
    pub is_downtime: bool,
}

impl Insertable for NewStateType {
    type Entity = StateType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("state_type_name", self.state_type_name)
            .set("state_type_description", self.state_type_description)
            .set("state_type_color", self.state_type_color)
            .set("is_downtime", self.is_downtime)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateTypePatch {
    pub state_type_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub state_type_description: Option<Option<String>>,
    pub state_type_color: Option<String>,
    pub is_downtime: Option<bool>,
}

impl Patch for StateTypePatch {
    type Entity = StateType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("state_type_name", self.state_type_name)
            .set_nullable("state_type_description", self.state_type_description)
            .set_opt("state_type_color", self.state_type_color)
            .set_opt("is_downtime", self.is_downtime)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStateDefinition {
    pub state_type_id: i32,
    pub state_name: String,
    #[serde(default)]
    pub state_description: Option<String>,
    pub state_color: String,
}

impl Insertable for NewStateDefinition {
    type Entity = StateDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("state_type_id", self.state_type_id)
            .set("state_name", self.state_name)
            .set("state_description", self.state_description)
            .set("state_color", self.state_color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateDefinitionPatch {
    pub state_type_id: Option<i32>,
    pub state_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub state_description: Option<Option<String>>,
    pub state_color: Option<String>,
}

impl Patch for StateDefinitionPatch {
    type Entity = StateDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("state_type_id", self.state_type_id)
            .set_opt("state_name", self.state_name)
            .set_nullable("state_description", self.state_description)
            .set_opt("state_color", self.state_color)
    }
}

/// State definitions, optionally of one state type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateDefinitionFilter {
    pub state_type_id: Option<i32>,
}

impl From<StateDefinitionFilter> for Filter {
    fn from(f: StateDefinitionFilter) -> Self {
        Filter::new().eq_opt("state_type_id", f.state_type_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDowntimeReason {
    pub downtime_reason_code: String,
    pub downtime_reason_name: String,
    #[serde(default)]
    pub downtime_reason_description: Option<String>,
    pub is_planned: bool,
}

impl Insertable for NewDowntimeReason {
    type Entity = DowntimeReason;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("downtime_reason_code", self.downtime_reason_code)
            .set("downtime_reason_name", self.downtime_reason_name)
            .set("downtime_reason_description", self.downtime_reason_description)
            .set("is_planned", self.is_planned)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DowntimeReasonPatch {
    pub downtime_reason_code: Option<String>,
    pub downtime_reason_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub downtime_reason_description: Option<Option<String>>,
    pub is_planned: Option<bool>,
}

impl Patch for DowntimeReasonPatch {
    type Entity = DowntimeReason;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("downtime_reason_code", self.downtime_reason_code)
            .set_opt("downtime_reason_name", self.downtime_reason_name)
            .set_nullable(
                "downtime_reason_description",
                self.downtime_reason_description,
            )
            .set_opt("is_planned", self.is_planned)
    }
}

/// Downtime reasons, optionally only planned (or only unplanned) ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DowntimeReasonFilter {
    pub is_planned: Option<bool>,
}

impl From<DowntimeReasonFilter> for Filter {
    fn from(f: DowntimeReasonFilter) -> Self {
        Filter::new().eq_opt("is_planned", f.is_planned)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCountType {
    pub count_type_name: String,
    #[serde(default)]
    pub count_type_description: Option<String>,
    pub count_type_unit: String,
}

impl Insertable for NewCountType {
    type Entity = CountType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("count_type_name", self.count_type_name)
            .set("count_type_description", self.count_type_description)
            .set("count_type_unit", self.count_type_unit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountTypePatch {
    pub count_type_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub count_type_description: Option<Option<String>>,
    pub count_type_unit: Option<String>,
}

impl Patch for CountTypePatch {
    type Entity = CountType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("count_type_name", self.count_type_name)
            .set_nullable("count_type_description", self.count_type_description)
            .set_opt("count_type_unit", self.count_type_unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeasurementType {
    pub measurement_type_name: String,
    #[serde(default)]
    pub measurement_type_description: Option<String>,
    pub measurement_type_unit: String,
}

impl Insertable for NewMeasurementType {
    type Entity = MeasurementType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("measurement_type_name", self.measurement_type_name)
            .set(
                "measurement_type_description",
                self.measurement_type_description,
            )
            .set("measurement_type_unit", self.measurement_type_unit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementTypePatch {
    pub measurement_type_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub measurement_type_description: Option<Option<String>>,
    pub measurement_type_unit: Option<String>,
}

impl Patch for MeasurementTypePatch {
    type Entity = MeasurementType;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("measurement_type_name", self.measurement_type_name)
            .set_nullable(
                "measurement_type_description",
                self.measurement_type_description,
            )
            .set_opt("measurement_type_unit", self.measurement_type_unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKpiDefinition {
    pub kpi_name: String,
    #[serde(default)]
    pub kpi_description: Option<String>,
    pub kpi_unit: String,
    #[serde(default)]
    pub kpi_formula: Option<String>,
}

impl Insertable for NewKpiDefinition {
    type Entity = KpiDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("kpi_name", self.kpi_name)
            .set("kpi_description", self.kpi_description)
            .set("kpi_unit", self.kpi_unit)
            .set("kpi_formula", self.kpi_formula)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiDefinitionPatch {
    pub kpi_name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub kpi_description: Option<Option<String>>,
    pub kpi_unit: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub kpi_formula: Option<Option<String>>,
}

impl Patch for KpiDefinitionPatch {
    type Entity = KpiDefinition;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set_opt("kpi_name", self.kpi_name)
            .set_nullable("kpi_description", self.kpi_description)
            .set_opt("kpi_unit", self.kpi_unit)
            .set_nullable("kpi_formula", self.kpi_formula)
    }
}
