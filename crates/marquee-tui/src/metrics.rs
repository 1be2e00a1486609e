//! Resolution of CSS-style lengths to terminal columns

use marquee_core::config::UiConfig;
use marquee_core::{Length, LengthUnit};

/// How lengths map onto terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Pixels covered by one column
    pub cell_width_px: f64,
    /// Font size for `em`/`rem`
    pub font_size_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            font_size_px: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn from_config(config: &UiConfig) -> Self {
        let defaults = Self::default();
        Self {
            cell_width_px: positive_or(config.cell_width_px, defaults.cell_width_px),
            font_size_px: positive_or(config.font_size_px, defaults.font_size_px),
        }
    }

    /// Exact (fractional) number of columns covered by `length`
    pub fn columns(&self, length: Length) -> f64 {
        match length.unit() {
            LengthUnit::Ch => length.value(),
            LengthUnit::Px => length.value() / self.cell_width_px,
            LengthUnit::Em | LengthUnit::Rem => {
                length.value() * self.font_size_px / self.cell_width_px
            }
        }
    }

    /// Whole columns covered by `length`, at least one
    pub fn whole_columns(&self, length: Length) -> u16 {
        self.columns(length).round().clamp(1.0, u16::MAX as f64) as u16
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_resolution() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.columns(Length::px(80.0)), 10.0);
        assert_eq!(metrics.columns(Length::ch(7.0)), 7.0);
        assert_eq!(metrics.columns(Length::new(1.0, LengthUnit::Rem)), 2.0);
        assert_eq!(metrics.columns(Length::px(-40.0)), -5.0);
    }

    #[test]
    fn test_whole_columns_minimum() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.whole_columns(Length::px(1.0)), 1);
        assert_eq!(metrics.whole_columns(Length::px(180.0)), 23);
    }

    #[test]
    fn test_bad_config_falls_back() {
        let config = UiConfig {
            cell_width_px: 0.0,
            ..Default::default()
        };
        assert_eq!(CellMetrics::from_config(&config).cell_width_px, 8.0);
    }
}
