use super::Insertable;
use crate::model::{CountLog, KpiLog, MeasurementLog, ProductionLog, StateLog};
use chrono::{DateTime, Utc};
use mes_query::{Changes, Filter, Range};
use serde::{Deserialize, Serialize};

/// Inclusive time window; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl From<DateTimeRange> for Range {
    fn from(r: DateTimeRange) -> Self {
        Range::bounds(r.from, r.to)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateLogFilter {
    pub asset_id: Option<i32>,
    pub state_id: Option<i32>,
    pub state_type_id: Option<i32>,
    pub downtime_reason_id: Option<i32>,
    pub logged_at: Option<DateTimeRange>,
}

impl From<StateLogFilter> for Filter {
    fn from(f: StateLogFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("state_id", f.state_id)
            .eq_opt("state_type_id", f.state_type_id)
            .eq_opt("downtime_reason_id", f.downtime_reason_id)
            .range_opt("logged_at", f.logged_at.map(Range::from))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionLogFilter {
    pub asset_id: Option<i32>,
    pub product_id: Option<i32>,
    pub product_family_id: Option<i32>,
    pub start_ts: Option<DateTimeRange>,
}

impl From<ProductionLogFilter> for Filter {
    fn from(f: ProductionLogFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("product_id", f.product_id)
            .eq_opt("product_family_id", f.product_family_id)
            .range_opt("start_ts", f.start_ts.map(Range::from))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountLogFilter {
    pub asset_id: Option<i32>,
    pub product_id: Option<i32>,
    pub count_type_id: Option<i32>,
    pub production_log_id: Option<i32>,
    pub logged_at: Option<DateTimeRange>,
}

impl From<CountLogFilter> for Filter {
    fn from(f: CountLogFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("product_id", f.product_id)
            .eq_opt("count_type_id", f.count_type_id)
            .eq_opt("production_log_id", f.production_log_id)
            .range_opt("logged_at", f.logged_at.map(Range::from))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementLogFilter {
    pub asset_id: Option<i32>,
    pub product_id: Option<i32>,
    pub measurement_type_id: Option<i32>,
    pub logged_at: Option<DateTimeRange>,
}

impl From<MeasurementLogFilter> for Filter {
    fn from(f: MeasurementLogFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("product_id", f.product_id)
            .eq_opt("measurement_type_id", f.measurement_type_id)
            .range_opt("logged_at", f.logged_at.map(Range::from))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiLogFilter {
    pub asset_id: Option<i32>,
    pub kpi_id: Option<i32>,
    pub start_ts: Option<DateTimeRange>,
}

impl From<KpiLogFilter> for Filter {
    fn from(f: KpiLogFilter) -> Self {
        Filter::new()
            .eq_opt("asset_id", f.asset_id)
            .eq_opt("kpi_id", f.kpi_id)
            .range_opt("start_ts", f.start_ts.map(Range::from))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStateLog {
    pub asset_id: i32,
    pub state_id: i32,
    #[serde(default)]
    pub downtime_reason_id: Option<i32>,
    #[serde(default)]
    pub additional_info: Option<serde_json::Value>,
}

impl Insertable for NewStateLog {
    type Entity = StateLog;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_id", self.asset_id)
            .set("state_id", self.state_id)
            .set("downtime_reason_id", self.downtime_reason_id)
            .set("additional_info", self.additional_info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductionLog {
    pub asset_id: i32,
    pub product_id: i32,
    pub product_family_id: i32,
    pub start_ts: DateTime<Utc>,
    #[serde(default)]
    pub end_ts: Option<DateTime<Utc>>,
    #[serde(default)]
    pub additional_info: Option<serde_json::Value>,
}

impl Insertable for NewProductionLog {
    type Entity = ProductionLog;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_id", self.asset_id)
            .set("product_id", self.product_id)
            .set("product_family_id", self.product_family_id)
            .set("start_ts", self.start_ts)
            .set("end_ts", self.end_ts)
            .set("additional_info", self.additional_info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCountLog {
    pub asset_id: i32,
    #[serde(default)]
    pub production_log_id: Option<i32>,
    pub count_type_id: i32,
    pub quantity: f64,
    pub product_id: i32,
    pub product_family_id: i32,
    #[serde(default)]
    pub additional_info: Option<serde_json::Value>,
}

impl Insertable for NewCountLog {
    type Entity = CountLog;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_id", self.asset_id)
            .set("production_log_id", self.production_log_id)
            .set("count_type_id", self.count_type_id)
            .set("quantity", self.quantity)
            .set("product_id", self.product_id)
            .set("product_family_id", self.product_family_id)
            .set("additional_info", self.additional_info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeasurementLog {
    pub asset_id: i32,
    #[serde(default)]
    pub product_id: Option<i32>,
    pub product_family_id: i32,
    pub measurement_type_id: i32,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub actual_value: Option<f64>,
    #[serde(default)]
    pub unit_of_measure: Option<String>,
    pub tolerance: f64,
    #[serde(default)]
    pub in_tolerance: Option<bool>,
    #[serde(default)]
    pub additional_info: Option<serde_json::Value>,
}

impl Insertable for NewMeasurementLog {
    type Entity = MeasurementLog;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_id", self.asset_id)
            .set("product_id", self.product_id)
            .set("product_family_id", self.product_family_id)
            .set("measurement_type_id", self.measurement_type_id)
            .set("target_value", self.target_value)
            .set("actual_value", self.actual_value)
            .set("unit_of_measure", self.unit_of_measure)
            .set("tolerance", self.tolerance)
            .set("in_tolerance", self.in_tolerance)
            .set("additional_info", self.additional_info)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKpiLog {
    pub asset_id: i32,
    pub kpi_id: i32,
    pub kpi_value: f64,
    pub start_ts: DateTime<Utc>,
    pub end_ts: DateTime<Utc>,
    #[serde(default)]
    pub additional_info: Option<serde_json::Value>,
}

impl Insertable for NewKpiLog {
    type Entity = KpiLog;

    fn into_changes(self) -> Changes {
        Changes::new()
            .set("asset_id", self.asset_id)
            .set("kpi_id", self.kpi_id)
            .set("kpi_value", self.kpi_value)
            .set("start_ts", self.start_ts)
            .set("end_ts", self.end_ts)
            .set("additional_info", self.additional_info)
    }
}
