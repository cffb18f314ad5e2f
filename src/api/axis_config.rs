use serde::{Deserialize, Serialize};

use crate::core::RangeConstraints;
use crate::error::{ChartError, ChartResult};
use crate::render::TextStyle;

/// Locale preset used by axis label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl AxisLabelLocale {
    #[must_use]
    pub fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }
}

/// Plot edge an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
    /// Not attached to an edge (polar axes, hidden axes).
    None,
    /// Reserves margin on every side.
    All,
}

/// How tick marks sit relative to the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickStyle {
    #[default]
    Outside,
    Inside,
    Crossing,
    None,
}

/// Caller-supplied axis configuration.
///
/// Unset bounds are `None`. Values here are never mutated by the axis; pan
/// and zoom only touch the view bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub absolute_minimum: f64,
    pub absolute_maximum: f64,
    pub minimum_range: f64,
    pub maximum_range: f64,
    /// Fraction of the data span added below the data minimum.
    pub minimum_padding: f64,
    /// Fraction of the data span added above the data maximum.
    pub maximum_padding: f64,
    /// Pixels reserved at the start of the axis.
    pub minimum_margin: f64,
    /// Pixels reserved at the end of the axis.
    pub maximum_margin: f64,
    /// Pixels between the actual range start and the clip range start.
    pub minimum_data_margin: f64,
    /// Pixels between the clip range end and the actual range end.
    pub maximum_data_margin: f64,
    /// Fractional placement of the axis start inside the plot area.
    pub start_position: f64,
    /// Fractional placement of the axis end inside the plot area.
    pub end_position: f64,
    pub position: AxisPosition,
    pub position_tier: usize,
    pub position_at_zero_crossing: bool,
    /// Target pixels per major interval.
    pub interval_length: f64,
    pub minimum_major_interval_count: usize,
    pub maximum_major_interval_count: usize,
    pub major_step: Option<f64>,
    pub minor_step: Option<f64>,
    /// Values below this are ignored by `include`.
    pub filter_min_value: f64,
    /// Values above this are ignored by `include`.
    pub filter_max_value: f64,
    pub is_pan_enabled: bool,
    pub is_zoom_enabled: bool,
    /// Minor ticks closer than `ratio * major_step` to a major tick are dropped.
    pub minor_tick_tolerance: f64,
    pub tick_style: TickStyle,
    pub major_tick_size: f64,
    pub minor_tick_size: f64,
    pub axis_distance: f64,
    pub axis_tick_to_label_distance: f64,
    pub axis_title_distance: f64,
    /// Label rotation in degrees.
    pub angle: f64,
    pub title: String,
    pub font: TextStyle,
    pub title_font: TextStyle,
    pub label_locale: AxisLabelLocale,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            minimum: None,
            maximum: None,
            absolute_minimum: f64::MIN,
            absolute_maximum: f64::MAX,
            minimum_range: 0.0,
            maximum_range: f64::MAX,
            minimum_padding: 0.01,
            maximum_padding: 0.01,
            minimum_margin: 0.0,
            maximum_margin: 0.0,
            minimum_data_margin: 0.0,
            maximum_data_margin: 0.0,
            start_position: 0.0,
            end_position: 1.0,
            position: AxisPosition::Left,
            position_tier: 0,
            position_at_zero_crossing: false,
            interval_length: 60.0,
            minimum_major_interval_count: 2,
            maximum_major_interval_count: 20,
            major_step: None,
            minor_step: None,
            filter_min_value: f64::MIN,
            filter_max_value: f64::MAX,
            is_pan_enabled: true,
            is_zoom_enabled: true,
            minor_tick_tolerance: 1e-3,
            tick_style: TickStyle::Outside,
            major_tick_size: 7.0,
            minor_tick_size: 4.0,
            axis_distance: 0.0,
            axis_tick_to_label_distance: 4.0,
            axis_title_distance: 4.0,
            angle: 0.0,
            title: String::new(),
            font: TextStyle::default(),
            title_font: TextStyle::default(),
            label_locale: AxisLabelLocale::EnUs,
        }
    }
}

impl AxisConfig {
    #[must_use]
    pub fn with_position(mut self, position: AxisPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn with_absolute_bounds(mut self, absolute_minimum: f64, absolute_maximum: f64) -> Self {
        self.absolute_minimum = absolute_minimum;
        self.absolute_maximum = absolute_maximum;
        self
    }

    #[must_use]
    pub fn with_range_limits(mut self, minimum_range: f64, maximum_range: f64) -> Self {
        self.minimum_range = minimum_range;
        self.maximum_range = maximum_range;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, minimum_padding: f64, maximum_padding: f64) -> Self {
        self.minimum_padding = minimum_padding;
        self.maximum_padding = maximum_padding;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, minimum_margin: f64, maximum_margin: f64) -> Self {
        self.minimum_margin = minimum_margin;
        self.maximum_margin = maximum_margin;
        self
    }

    #[must_use]
    pub fn with_data_margins(mut self, minimum_data_margin: f64, maximum_data_margin: f64) -> Self {
        self.minimum_data_margin = minimum_data_margin;
        self.maximum_data_margin = maximum_data_margin;
        self
    }

    #[must_use]
    pub fn with_screen_positions(mut self, start_position: f64, end_position: f64) -> Self {
        self.start_position = start_position;
        self.end_position = end_position;
        self
    }

    #[must_use]
    pub fn with_interval_counts(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_major_interval_count = minimum;
        self.maximum_major_interval_count = maximum;
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, is_pan_enabled: bool, is_zoom_enabled: bool) -> Self {
        self.is_pan_enabled = is_pan_enabled;
        self.is_zoom_enabled = is_zoom_enabled;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn at_zero_crossing(mut self) -> Self {
        self.position_at_zero_crossing = true;
        self
    }

    #[must_use]
    pub fn range_constraints(&self) -> RangeConstraints {
        RangeConstraints {
            absolute_minimum: self.absolute_minimum,
            absolute_maximum: self.absolute_maximum,
            minimum_range: self.minimum_range,
            maximum_range: self.maximum_range,
        }
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self.position, AxisPosition::Top | AxisPosition::Bottom)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self.position, AxisPosition::Left | AxisPosition::Right)
    }

    /// Rejects configurations no range can satisfy.
    pub fn validate(&self) -> ChartResult<()> {
        self.range_constraints().validate()?;

        for (name, value) in [
            ("minimum", self.minimum),
            ("maximum", self.maximum),
            ("major_step", self.major_step),
            ("minor_step", self.minor_step),
        ] {
            if value.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidConfiguration(format!(
                    "`{name}` must be finite when set"
                )));
            }
        }
        for (name, value) in [("major_step", self.major_step), ("minor_step", self.minor_step)] {
            if value.is_some_and(|value| value <= 0.0) {
                return Err(ChartError::InvalidConfiguration(format!(
                    "`{name}` must be > 0 when set"
                )));
            }
        }

        for (name, value) in [
            ("minimum_padding", self.minimum_padding),
            ("maximum_padding", self.maximum_padding),
            ("minor_tick_tolerance", self.minor_tick_tolerance),
            ("major_tick_size", self.major_tick_size),
            ("minor_tick_size", self.minor_tick_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("minimum_margin", self.minimum_margin),
            ("maximum_margin", self.maximum_margin),
            ("minimum_data_margin", self.minimum_data_margin),
            ("maximum_data_margin", self.maximum_data_margin),
            ("start_position", self.start_position),
            ("end_position", self.end_position),
            ("axis_distance", self.axis_distance),
            ("axis_tick_to_label_distance", self.axis_tick_to_label_distance),
            ("axis_title_distance", self.axis_title_distance),
            ("angle", self.angle),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfiguration(format!(
                    "`{name}` must be finite"
                )));
            }
        }

        if !self.interval_length.is_finite() || self.interval_length <= 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "`interval_length` must be finite and > 0".to_owned(),
            ));
        }
        if self.minimum_major_interval_count > self.maximum_major_interval_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "minimum interval count ({}) must be <= maximum interval count ({})",
                self.minimum_major_interval_count, self.maximum_major_interval_count
            )));
        }
        if self.filter_min_value.is_nan()
            || self.filter_max_value.is_nan()
            || self.filter_min_value > self.filter_max_value
        {
            return Err(ChartError::InvalidConfiguration(
                "filter bounds must be ordered and not NaN".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize axis config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse axis config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
