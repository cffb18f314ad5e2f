//! Placement of axis lines around the plot area.

use std::collections::BTreeMap;

use crate::core::ScreenRect;

use super::{Axis, AxisKind, AxisPosition};

/// Screen coordinate of the axis line, perpendicular to its direction.
///
/// Edge axes sit outside the plot area at `axis_distance + tier_shift`.
/// With `position_at_zero_crossing` and a `perpendicular` axis the line sits
/// where that axis maps zero, clamped into the plot area.
#[must_use]
pub fn axis_line_position<K: AxisKind, P: AxisKind>(
    axis: &Axis<K>,
    perpendicular: Option<&Axis<P>>,
    plot_area: ScreenRect,
    tier_shift: f64,
) -> f64 {
    let config = axis.config();
    let outward = config.axis_distance + tier_shift;
    let edge = match config.position {
        AxisPosition::Left => plot_area.left - outward,
        AxisPosition::Right => plot_area.right() + outward,
        AxisPosition::Top => plot_area.top - outward,
        AxisPosition::Bottom | AxisPosition::All => plot_area.bottom() + outward,
        AxisPosition::None => plot_area.center().y,
    };

    let Some(perpendicular) = perpendicular.filter(|_| config.position_at_zero_crossing) else {
        return edge;
    };
    let crossing = perpendicular.transform(0.0);
    if !crossing.is_finite() {
        return edge;
    }
    if axis.is_vertical() {
        crossing.clamp(plot_area.left, plot_area.right())
    } else {
        crossing.clamp(plot_area.top, plot_area.bottom())
    }
}

/// Outward shift of each `(tier, size)` entry: the sum over lower tiers of
/// the largest size found in that tier.
#[must_use]
pub fn position_tier_shifts(tiers: &[(usize, f64)]) -> Vec<f64> {
    let mut tier_size: BTreeMap<usize, f64> = BTreeMap::new();
    for &(tier, size) in tiers {
        let largest = tier_size.entry(tier).or_insert(0.0);
        *largest = largest.max(size);
    }

    // Tiers are sparse; only occupied ones add to the outward shift.
    let mut shift = 0.0;
    let mut cumulative = BTreeMap::new();
    for (tier, size) in tier_size {
        cumulative.insert(tier, shift);
        shift += size;
    }
    tiers
        .iter()
        .map(|(tier, _)| cumulative.get(tier).copied().unwrap_or(0.0))
        .collect()
}
