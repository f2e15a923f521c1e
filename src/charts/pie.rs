use super::hover::HoverState;
use super::palette::{OrdinalColorScale, default_palette};
use super::Margin;
use crate::models::aggregate::bucket_tiny_categories;
use crate::models::stats::{CategoryKey, CategoryPoint, dataset_total};
use std::f64::consts::{PI, TAU};

pub const DEFAULT_TINY_THRESHOLD: f64 = 5.0;
pub const DEFAULT_OTHER_LABEL: &str = "Other";
pub const DEFAULT_HOVER_GROWTH: f64 = 10.0;
pub const DEFAULT_PIE_MARGIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub palette: Vec<String>,
    /// Categories below this share of the total (in percent) are merged
    pub tiny_threshold: f64,
    pub other_label: String,
    /// Extra outer radius of the hovered slice, in pixels
    pub hover_growth: f64,
}

impl PieChartConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::uniform(DEFAULT_PIE_MARGIN),
            palette: default_palette(),
            tiny_threshold: DEFAULT_TINY_THRESHOLD,
            other_label: DEFAULT_OTHER_LABEL.to_string(),
            hover_growth: DEFAULT_HOVER_GROWTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub key: CategoryKey,
    pub value: f64,
    /// Share of the bucketed total, 0-100
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    /// SVG path relative to the pie center
    pub path: String,
    /// Arc centroid relative to the pie center
    pub centroid: (f64, f64),
}

impl PieSlice {
    /// `"<key>: <percent>%"`, shared by the tooltip and the legend
    pub fn label(&self) -> String {
        format!("{}: {:.2}%", self.key, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Resolved pie geometry after tiny-category bucketing.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartModel {
    pub config: PieChartConfig,
    pub center: (f64, f64),
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

impl PieChartModel {
    pub fn build(data: &[CategoryPoint], config: &PieChartConfig) -> Self {
        let bucketed = bucket_tiny_categories(data, config.tiny_threshold, &config.other_label);
        let total = dataset_total(&bucketed);

        let margin = config.margin;
        let inner_width = (config.width - margin.left - margin.right).max(0.0);
        let inner_height = (config.height - margin.top - margin.bottom).max(0.0);
        let radius = inner_width.min(inner_height) / 2.0;
        let center = (
            margin.left + inner_width / 2.0,
            margin.top + inner_height / 2.0,
        );

        let colors = OrdinalColorScale::new(
            bucketed.iter().map(|p| p.key.clone()),
            config.palette.clone(),
        );

        let slices = pie_layout(&bucketed)
            .into_iter()
            .zip(&bucketed)
            .map(|((start_angle, end_angle), point)| PieSlice {
                key: point.key.clone(),
                value: point.value,
                percent: if total > 0.0 {
                    point.value / total * 100.0
                } else {
                    0.0
                },
                start_angle,
                end_angle,
                color: colors.color(&point.key).to_string(),
                path: arc_path(start_angle, end_angle, radius),
                centroid: arc_centroid(start_angle, end_angle, radius),
            })
            .collect();

        Self {
            config: config.clone(),
            center,
            radius,
            total,
            slices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slice indices in paint order; the hovered slice is drawn last so it
    /// sits above its neighbours.
    pub fn paint_order(&self, hover: &HoverState) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.slices.len())
            .filter(|i| !hover.is_hovered(*i))
            .collect();
        if let Some(i) = hover.index().filter(|i| *i < self.slices.len()) {
            order.push(i);
        }
        order
    }

    /// Scale factor that grows the outer radius by `hover_growth` pixels.
    pub fn hover_scale(&self) -> f64 {
        if self.radius > 0.0 {
            (self.radius + self.config.hover_growth) / self.radius
        } else {
            1.0
        }
    }

    /// Tooltip anchored at the hovered slice's centroid, in chart coordinates.
    pub fn tooltip(&self, hover: &HoverState) -> Option<Tooltip> {
        let slice = self.slices.get(hover.index()?)?;
        Some(Tooltip {
            x: self.center.0 + slice.centroid.0,
            y: self.center.1 + slice.centroid.1,
            text: slice.label(),
        })
    }
}

/// Start and end angles for each point, clockwise from 12 o'clock, covering
/// the full circle. Empty when the total is not positive.
pub fn pie_layout(data: &[CategoryPoint]) -> Vec<(f64, f64)> {
    let weight = |p: &CategoryPoint| {
        if p.value.is_finite() {
            p.value.max(0.0)
        } else {
            0.0
        }
    };
    let total: f64 = data.iter().map(weight).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    let last = data.len() - 1;
    data.iter()
        .enumerate()
        .map(|(i, point)| {
            let start = angle;
            let end = if i == last {
                TAU
            } else {
                start + weight(point) / total * TAU
            };
            angle = end;
            (start, end)
        })
        .collect()
}

fn point_at(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Closed wedge path from the center; a full turn is drawn as two half arcs.
pub fn arc_path(start: f64, end: f64, radius: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        return format!(
            "M0,{:.3} A{r:.3},{r:.3} 0 1 1 0,{:.3} A{r:.3},{r:.3} 0 1 1 0,{:.3} Z",
            -radius,
            radius,
            -radius,
            r = radius
        );
    }

    let (x0, y0) = point_at(start, radius);
    let (x1, y1) = point_at(end, radius);
    let large_arc = u8::from(sweep > PI);
    format!(
        "M0,0 L{x0:.3},{y0:.3} A{radius:.3},{radius:.3} 0 {large_arc} 1 {x1:.3},{y1:.3} Z"
    )
}

/// Midpoint of the wedge at half the radius.
pub fn arc_centroid(start: f64, end: f64, radius: f64) -> (f64, f64) {
    point_at((start + end) / 2.0, radius / 2.0)
}
