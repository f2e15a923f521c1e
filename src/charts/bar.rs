use super::hover::HoverState;
use super::scale::{BandScale, DEFAULT_TICK_COUNT, LinearScale, format_tick};
use super::Margin;
use crate::models::stats::CategoryPoint;

pub const DEFAULT_BAR_COLOR: &str = "steelblue";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "orange";
pub const BAND_PADDING: f64 = 0.1;

/// Everything needed to lay out a histogram besides the data.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub bar_color: String,
    pub highlight_color: String,
    pub x_label: String,
    pub y_label: String,
}

impl BarChartConfig {
    /// Config with proportional margins and default colors and labels
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::proportional(width, height),
            bar_color: DEFAULT_BAR_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            x_label: "Key".to_string(),
            y_label: "Value".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Horizontal guide drawn at the hovered bar's value.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruler {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub label: String,
}

/// Fully resolved histogram geometry for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub config: BarChartConfig,
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    /// Vertical pixel position of the category axis
    pub baseline: f64,
    /// Horizontal extent of the plot area
    pub plot_x: (f64, f64),
    /// Vertical extent of the plot area, top to bottom
    pub plot_y: (f64, f64),
}

impl BarChartModel {
    /// Lays out one bar per point in dataset order. Returns `None` for an
    /// empty dataset, which renders nothing at all.
    pub fn build(data: &[CategoryPoint], config: &BarChartConfig) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let margin = config.margin;
        let plot_x = (margin.left, config.width - margin.right);
        let plot_y = (margin.top, config.height - margin.bottom);

        let labels: Vec<String> = data.iter().map(|p| p.key.to_string()).collect();
        let band = BandScale::new(labels.clone(), plot_x, BAND_PADDING);

        let max = data
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let domain = if max > 0.0 { (0.0, max) } else { (0.0, 1.0) };
        let y = LinearScale::new(domain, (plot_y.1, plot_y.0)).nice(DEFAULT_TICK_COUNT);
        let baseline = y.scale(0.0);

        let bars = data
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (point, label))| {
                let value = if point.value.is_finite() {
                    point.value.max(0.0)
                } else {
                    0.0
                };
                let top = y.scale(value);
                Bar {
                    label,
                    value: point.value,
                    x: band.position_at(i),
                    y: top,
                    width: band.bandwidth(),
                    height: (baseline - top).max(0.0),
                }
            })
            .collect();

        let x_ticks = band
            .domain()
            .iter()
            .enumerate()
            .map(|(i, label)| AxisTick {
                position: band.center_at(i),
                label: label.clone(),
            })
            .collect();

        let step = y.tick_step(DEFAULT_TICK_COUNT);
        let y_ticks = y
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|v| AxisTick {
                position: y.scale(v),
                label: format_tick(v, step),
            })
            .collect();

        Some(Self {
            config: config.clone(),
            bars,
            x_ticks,
            y_ticks,
            baseline,
            plot_x,
            plot_y,
        })
    }

    pub fn bar_fill(&self, index: usize, hover: &HoverState) -> &str {
        if hover.is_hovered(index) {
            &self.config.highlight_color
        } else {
            &self.config.bar_color
        }
    }

    /// The ruler for the hovered bar, spanning the plot width.
    pub fn ruler(&self, hover: &HoverState) -> Option<Ruler> {
        let bar = self.bars.get(hover.index()?)?;
        Some(Ruler {
            x1: self.plot_x.0,
            x2: self.plot_x.1,
            y: bar.y,
            label: format!("{:.2}", bar.value),
        })
    }

    /// Anchor of the x-axis title, centered under the plot
    pub fn x_label_position(&self) -> (f64, f64) {
        let (left, right) = self.plot_x;
        ((right - left) / 2.0 + left, self.config.height - 10.0)
    }

    /// SVG transform placing the rotated y-axis title left of the axis
    pub fn y_label_transform(&self) -> String {
        let (top, bottom) = self.plot_y;
        format!(
            "translate({}, {}) rotate(-90)",
            self.plot_x.0 - 30.0,
            (bottom - top) / 2.0 + top
        )
    }
}
