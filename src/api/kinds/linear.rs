use serde::{Deserialize, Serialize};

use crate::api::AxisKind;

/// Identity-transform numeric axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Linear;

impl AxisKind for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }
}
