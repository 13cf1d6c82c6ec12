//! Row types for every MES table.
//!
//! Field names equal column names; nullable columns are `Option`.

mod lookup;
mod log;
mod master;

pub use lookup::{
    AssetType, CountType, DowntimeReason, KpiDefinition, MeasurementType, StateDefinition,
    StateType,
};
pub use log::{CountLog, KpiLog, MeasurementLog, ProductionLog, StateLog};
pub use master::{AssetDefinition, PerformanceTarget, ProductDefinition, ProductFamily};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A note row. All six note tables share this shape; the parent log id is
/// `None` for general notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub note_id: i32,
    pub parent_id: Option<i32>,
    pub note: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub removed: bool,
}
