use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// What caused an axis range change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisChangeKind {
    Pan,
    Zoom,
    Reset,
}

/// Change descriptor returned by pan/zoom/reset and sent to observers.
///
/// Deltas are `new - old` on the actual range, so linked axes can follow
/// without polling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisChange {
    pub kind: AxisChangeKind,
    pub delta_minimum: f64,
    pub delta_maximum: f64,
}

/// Read-only view of an axis handed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub kind_name: String,
    pub actual_minimum: f64,
    pub actual_maximum: f64,
    pub clip_minimum: f64,
    pub clip_maximum: f64,
    pub scale: f64,
    pub offset: f64,
    pub view_minimum: Option<f64>,
    pub view_maximum: Option<f64>,
    pub is_reversed: bool,
}

impl AxisSnapshot {
    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

/// Receives axis change notifications.
///
/// Observers only see an owned snapshot, so they cannot mutate the axis
/// that raised the change.
pub trait AxisObserver {
    fn id(&self) -> &str;
    fn on_axis_changed(&mut self, change: AxisChange, snapshot: &AxisSnapshot);
}
