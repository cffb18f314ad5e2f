use super::label_cache::{LabelCacheKey, LabelFormatterFn};
use super::{Axis, AxisKind, FormatContext, LabelCacheStats};

impl<K: AxisKind> Axis<K> {
    /// Replaces the kind's default label text with `formatter`.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatterFn) {
        self.label_formatter = Some(formatter);
        self.label_cache.borrow_mut().clear();
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
        self.label_cache.borrow_mut().clear();
    }

    #[must_use]
    pub fn has_label_formatter(&self) -> bool {
        self.label_formatter.is_some()
    }

    /// Label text for `value`, cached per value, major step and unit.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        let context = self.format_context();
        let key = LabelCacheKey::new(value, context.major_step, context.unit);
        let cached = self.label_cache.borrow_mut().get(key);
        if let Some(text) = cached {
            return text;
        }

        let text = match &self.label_formatter {
            Some(formatter) => formatter(value),
            None => self.kind.format_value(value, &context),
        };
        self.label_cache.borrow_mut().insert(key, text.clone());
        text
    }

    #[must_use]
    pub fn label_cache_stats(&self) -> LabelCacheStats {
        self.label_cache.borrow().stats()
    }

    pub fn clear_label_cache(&self) {
        self.label_cache.borrow_mut().clear();
    }

    #[must_use]
    pub fn format_context(&self) -> FormatContext {
        FormatContext {
            major_step: self.state.intervals.major_step,
            unit: self.state.intervals.major_unit,
            locale: self.config.label_locale,
            actual_minimum: self.state.actual_minimum,
            actual_maximum: self.state.actual_maximum,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api::{Axis, AxisConfig, AxisLabelLocale, Linear};
    use crate::core::ScreenRect;

    #[test]
    fn custom_formatter_replaces_default_and_resets_cache() {
        let mut axis =
            Axis::with_config(Linear, AxisConfig::default().with_bounds(0.0, 10.0)).expect("axis");
        let _ = axis.format_value(2.5);
        assert_eq!(axis.label_cache_stats().size, 1);

        axis.set_label_formatter(Arc::new(|value| format!("{value:.1} u")));
        assert_eq!(axis.label_cache_stats().size, 0);
        assert_eq!(axis.format_value(2.5), "2.5 u");
        assert_eq!(axis.format_value(2.5), "2.5 u");
        assert_eq!(axis.label_cache_stats().hits, 1);

        axis.clear_label_formatter();
        assert!(!axis.has_label_formatter());
        assert_ne!(axis.format_value(2.5), "2.5 u");
    }

    #[test]
    fn locale_changes_decimal_separator() {
        let mut config = AxisConfig::default().with_bounds(0.0, 1.0);
        config.label_locale = AxisLabelLocale::EsEs;
        config.major_step = Some(0.5);
        let mut axis = Axis::with_config(Linear, config).expect("axis");
        axis.update(ScreenRect::new(0.0, 0.0, 400.0, 400.0))
            .expect("update");
        assert_eq!(axis.format_value(0.5), "0,5");
    }
}
