//! Request-shaped inputs: create payloads, partial updates and list filters.
//!
//! Create payloads send every column they declare, optional ones as `NULL`.
//! Patch fields are `Option<T>` (absent means "leave alone") or, for nullable
//! columns, `Option<Option<T>>` where `Some(None)` clears the column. From JSON,
//! a missing key is `None` and an explicit `null` is `Some(None)`.

mod log;
mod lookup;
mod master;

pub use log::{
    CountLogFilter, DateTimeRange, KpiLogFilter, MeasurementLogFilter, NewCountLog, NewKpiLog,
    NewMeasurementLog, NewProductionLog, NewStateLog, ProductionLogFilter, StateLogFilter,
};
pub use lookup::{
    AssetTypePatch, CountTypePatch, DowntimeReasonFilter, DowntimeReasonPatch, KpiDefinitionPatch,
    MeasurementTypePatch, NewAssetType, NewCountType, NewDowntimeReason, NewKpiDefinition,
    NewMeasurementType, NewStateDefinition, NewStateType, StateDefinitionFilter,
    StateDefinitionPatch, StateTypePatch,
};
pub use master::{
    AssetDefinitionFilter, AssetDefinitionPatch, NewAssetDefinition, NewPerformanceTarget,
    NewProductDefinition, NewProductFamily, PerformanceTargetFilter, PerformanceTargetPatch,
    ProductDefinitionFilter, ProductDefinitionPatch, ProductFamilyPatch,
};

use crate::table::{Entity, Mutable};
use mes_query::Changes;
use serde::{Deserialize, Deserializer};

/// A create payload for one entity.
pub trait Insertable: Send + Sync {
    type Entity: Entity;

    /// Column/value pairs for the `INSERT`.
    fn into_changes(self) -> Changes;
}

/// A partial update for one entity.
pub trait Patch: Send + Sync {
    type Entity: Mutable;

    /// Only the fields the caller provided.
    fn into_changes(self) -> Changes;
}

/// Keep "key present but null" distinct from "key missing" for nullable patch
/// fields. Use with `#[serde(default, deserialize_with = "double_option")]`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
