//! Edge fade overlays drawn over both ends of the viewport

use std::fmt;

use serde::Serialize;

use crate::config::SliderConfig;
use crate::length::Length;

const OVERLAY_WIDTH: Length = Length::px(180.0);
const OVERLAY_Z_INDEX: i32 = 10;
/// Gradient position where the fade starts to thin out
const SOLID_UNTIL: f64 = 0.10;
/// Gradient position where the fade is fully transparent
const CLEAR_FROM: f64 = 0.80;
const TRANSPARENT: &str = "rgba(255, 255, 255, 0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: String,
    /// Fraction along the gradient line, 0.0..=1.0
    pub position: f64,
}

/// `linear-gradient(<angle>deg, <stops>...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub angle_deg: f64,
    pub stops: Vec<GradientStop>,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle_deg)?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, (stop.position * 100.0).round())?;
        }
        write!(f, ")")
    }
}

/// One fade overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FadeOverlay {
    pub edge: Edge,
    pub width: Length,
    /// Height relative to the viewport, in percent
    pub height_percent: u16,
    /// Rotated half a turn so the opaque side faces the edge
    pub rotated: bool,
    pub z_index: i32,
    pub color: String,
    pub gradient: LinearGradient,
}

impl FadeOverlay {
    fn new(edge: Edge, color: &str) -> Self {
        let (height_percent, rotated) = match edge {
            Edge::Left => (120, false),
            Edge::Right => (105, true),
        };

        Self {
            edge,
            width: OVERLAY_WIDTH,
            height_percent,
            rotated,
            z_index: OVERLAY_Z_INDEX,
            color: color.to_string(),
            gradient: LinearGradient {
                angle_deg: 90.0,
                stops: vec![
                    GradientStop {
                        color: color.to_string(),
                        position: SOLID_UNTIL,
                    },
                    GradientStop {
                        color: TRANSPARENT.to_string(),
                        position: CLEAR_FROM,
                    },
                ],
            },
        }
    }

    /// CSS `background` value of the overlay
    pub fn background(&self) -> String {
        self.gradient.to_string()
    }

    /// Opacity at `fraction` of the overlay width, measured from its edge
    pub fn opacity_at(&self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= SOLID_UNTIL {
            1.0
        } else if fraction >= CLEAR_FROM {
            0.0
        } else {
            1.0 - (fraction - SOLID_UNTIL) / (CLEAR_FROM - SOLID_UNTIL)
        }
    }
}

/// Overlays for `config`: left and right when `blur_borders` is set, none otherwise
pub fn edge_fades(config: &SliderConfig) -> Vec<FadeOverlay> {
    if !config.blur_borders {
        return Vec::new();
    }

    vec![
        FadeOverlay::new(Edge::Right, &config.blur_border_color),
        FadeOverlay::new(Edge::Left, &config.blur_border_color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blurred(color: &str) -> SliderConfig {
        SliderConfig {
            blur_borders: true,
            blur_border_color: color.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_overlays_without_blur() {
        assert!(edge_fades(&SliderConfig::default()).is_empty());
    }

    #[test]
    fn test_two_overlays_embed_color() {
        let overlays = edge_fades(&blurred("#000"));
        assert_eq!(overlays.len(), 2);

        let edges: Vec<Edge> = overlays.iter().map(|o| o.edge).collect();
        assert!(edges.contains(&Edge::Left));
        assert!(edges.contains(&Edge::Right));

        for overlay in &overlays {
            assert_eq!(
                overlay.background(),
                "linear-gradient(90deg, #000 10%, rgba(255, 255, 255, 0) 80%)"
            );
            assert_eq!(overlay.width.to_string(), "180px");
            assert_eq!(overlay.z_index, 10);
        }
    }

    #[test]
    fn test_right_overlay_is_rotated() {
        let overlays = edge_fades(&blurred("#fff"));
        let right = overlays.iter().find(|o| o.edge == Edge::Right).unwrap();
        let left = overlays.iter().find(|o| o.edge == Edge::Left).unwrap();
        assert!(right.rotated);
        assert_eq!(right.height_percent, 105);
        assert!(!left.rotated);
        assert_eq!(left.height_percent, 120);
    }

    #[test]
    fn test_opacity_profile() {
        let overlay = &edge_fades(&blurred("#fff"))[0];
        assert_eq!(overlay.opacity_at(0.0), 1.0);
        assert_eq!(overlay.opacity_at(0.1), 1.0);
        assert!((overlay.opacity_at(0.45) - 0.5).abs() < 1e-9);
        assert_eq!(overlay.opacity_at(0.8), 0.0);
        assert_eq!(overlay.opacity_at(1.5), 0.0);
    }
}
