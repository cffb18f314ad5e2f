use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ScreenRect, Thickness};
use crate::error::ChartResult;
use crate::render::{TextExtent, TextMeasurer};

use super::{Axis, AxisKind, AxisPosition, TickStyle};

/// Labels of one axis rarely exceed this; longer lists spill to the heap.
type LabelExtents = SmallVec<[(f64, TextExtent); 16]>;

impl<K: AxisKind> Axis<K> {
    /// Estimates the margin this axis needs outside `plot_area` so that no
    /// tick, label or title is clipped.
    ///
    /// Expects an update cycle on the same plot area beforehand; the result
    /// is also stored as [`Axis::desired_margin`].
    pub fn measure_desired_margin<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        plot_area: ScreenRect,
    ) -> ChartResult<Thickness> {
        let plot_area = plot_area.validate()?;
        if self.config.position == AxisPosition::None {
            self.state.desired_margin = Thickness::default();
            return Ok(Thickness::default());
        }

        let config = &self.config;
        let labels: LabelExtents = self
            .get_tick_values()?
            .major_label_values
            .into_iter()
            .map(|value| {
                let text = self.format_value(value);
                (value, measurer.measure_rotated(&text, &config.font, config.angle))
            })
            .collect();
        let widest = labels
            .iter()
            .fold(TextExtent::default(), |widest, (_, extent)| widest.max(*extent));

        let tick_protrusion = match config.tick_style {
            TickStyle::Outside => config.major_tick_size,
            TickStyle::Crossing => config.major_tick_size * 0.75,
            TickStyle::Inside | TickStyle::None => 0.0,
        };
        let label_depth = match config.position {
            AxisPosition::Left | AxisPosition::Right => widest.width,
            AxisPosition::Top | AxisPosition::Bottom => widest.height,
            AxisPosition::All | AxisPosition::None => widest.width.max(widest.height),
        };
        let mut depth = tick_protrusion
            + config.axis_distance
            + config.axis_tick_to_label_distance
            + label_depth;
        if !config.title.is_empty() {
            let title = measurer.measure_text(&config.title, &config.title_font);
            depth += config.axis_title_distance + title.height;
        }

        let overhang = self.end_overhang(&labels, widest, plot_area);
        let margin = match config.position {
            AxisPosition::Left => Thickness::new(depth, overhang.0, 0.0, overhang.1),
            AxisPosition::Right => Thickness::new(0.0, overhang.0, depth, overhang.1),
            AxisPosition::Top => Thickness::new(overhang.0, depth, overhang.1, 0.0),
            AxisPosition::Bottom => Thickness::new(overhang.0, 0.0, overhang.1, depth),
            AxisPosition::All | AxisPosition::None => Thickness::uniform(depth),
        };

        debug!(
            axis = self.kind.name(),
            left = margin.left,
            top = margin.top,
            right = margin.right,
            bottom = margin.bottom,
            "estimated axis margin"
        );
        self.state.desired_margin = margin;
        Ok(margin)
    }

    /// Label overhang past the two plot edges along the axis, as
    /// `(leading, trailing)`: (left, right) for horizontal axes, (top, bottom)
    /// for vertical ones.
    ///
    /// With pan or zoom any label may scroll to an end, so the widest label is
    /// assumed at both ends. Otherwise only the first and last labels count.
    fn end_overhang(
        &self,
        labels: &[(f64, TextExtent)],
        widest: TextExtent,
        plot_area: ScreenRect,
    ) -> (f64, f64) {
        let config = &self.config;
        let horizontal = config.is_horizontal();
        let (low_edge, high_edge) = if horizontal {
            (plot_area.left, plot_area.right())
        } else {
            (plot_area.top, plot_area.bottom())
        };
        let half_along = |extent: TextExtent| {
            if horizontal {
                extent.width * 0.5
            } else {
                extent.height * 0.5
            }
        };

        let mut placed: SmallVec<[(f64, f64); 2]> = SmallVec::new();
        if config.is_pan_enabled || config.is_zoom_enabled {
            let along = |fraction: f64| {
                if horizontal {
                    plot_area.left + fraction * plot_area.width
                } else {
                    plot_area.bottom() - fraction * plot_area.height
                }
            };
            let half = half_along(widest);
            placed.push((along(config.start_position), half));
            placed.push((along(config.end_position), half));
        } else {
            for (value, extent) in labels.first().into_iter().chain(labels.last()) {
                placed.push((self.transform(*value), half_along(*extent)));
            }
        }

        placed
            .iter()
            .filter(|(position, _)| position.is_finite())
            .fold((0.0_f64, 0.0_f64), |(leading, trailing), (position, half)| {
                (
                    leading.max(half - (position - low_edge)),
                    trailing.max(position + half - high_edge),
                )
            })
    }
}
