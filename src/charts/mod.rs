//! Renderer-independent chart geometry.
//!
//! Components in `crate::components` turn these models into SVG; everything
//! here is plain data so it can be tested off the browser.

pub mod bar;
pub mod hover;
pub mod palette;
pub mod pie;
pub mod scale;

pub use bar::{BarChartConfig, BarChartModel};
pub use hover::HoverState;
pub use pie::{PieChartConfig, PieChartModel};

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Histogram defaults, proportional to the chart size
    pub fn proportional(width: f64, height: f64) -> Self {
        Self {
            top: height / 10.0,
            right: width / 10.0,
            bottom: height * 0.15,
            left: width / 10.0,
        }
    }
}

/// Per-side margin overrides; unset sides fall back to a default margin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarginOverrides {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl MarginOverrides {
    pub fn resolve(&self, defaults: Margin) -> Margin {
        Margin {
            top: self.top.unwrap_or(defaults.top),
            right: self.right.unwrap_or(defaults.right),
            bottom: self.bottom.unwrap_or(defaults.bottom),
            left: self.left.unwrap_or(defaults.left),
        }
    }
}
