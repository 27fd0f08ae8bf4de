//! Renderer-agnostic chart scenes.
//!
//! Each builder maps an ordered dataset and a fixed visual style to drawing
//! primitives in pixel space. The web crate turns them into SVG; nothing here
//! knows about the DOM.

use std::f64::consts::PI;

use crate::dataset::{CoreUsage, PerformanceBar, RadarPoint, RADAR_DOMAIN_MAX};
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        Err(DashboardError::InvalidGeometry(format!(
            "viewport must be positive, got {}x{}",
            self.width, self.height
        )))
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    pub anchor: TextAnchor,
}

/// Formats points as an SVG `points` attribute.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

// --- Radar ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarStyle {
    pub viewport: Viewport,
    pub domain_max: f64,
    /// Fraction of half the shorter viewport side used by the outer ring.
    pub outer_radius_ratio: f64,
    pub grid_rings: usize,
    pub label_offset: f64,
    pub label_font_size: f64,
    pub stroke: &'static str,
    pub fill: &'static str,
    pub fill_opacity: f64,
    pub grid_stroke: &'static str,
    pub label_color: &'static str,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(400.0, 320.0),
            domain_max: RADAR_DOMAIN_MAX,
            outer_radius_ratio: 0.8,
            grid_rings: 5,
            label_offset: 12.0,
            label_font_size: 10.0,
            stroke: "#f97316",
            fill: "#f97316",
            fill_opacity: 0.6,
            grid_stroke: "#334155",
            label_color: "#94a3b8",
        }
    }
}

impl RadarStyle {
    fn validate(&self) -> Result<()> {
        self.viewport.ensure_valid()?;
        if !self.domain_max.is_finite() || self.domain_max <= 0.0 {
            return Err(DashboardError::InvalidGeometry(format!(
                "radar domain must be positive, got {}",
                self.domain_max
            )));
        }
        if !(0.0..=1.0).contains(&self.outer_radius_ratio) || self.outer_radius_ratio == 0.0 {
            return Err(DashboardError::InvalidGeometry(format!(
                "radar radius ratio {} outside (0, 1]",
                self.outer_radius_ratio
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarVertex {
    pub subject: &'static str,
    pub value: f64,
    pub point: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarScene {
    pub style: RadarStyle,
    pub center: Point,
    pub radius: f64,
    /// Grid polygons, innermost first.
    pub rings: Vec<Vec<Point>>,
    /// One spoke per subject, from the center to the outer ring.
    pub spokes: Vec<(Point, Point)>,
    pub labels: Vec<TextLabel>,
    pub vertices: Vec<RadarVertex>,
}

impl RadarScene {
    pub fn polygon(&self) -> Vec<Point> {
        self.vertices.iter().map(|v| v.point).collect()
    }
}

/// Angle of axis `index` out of `count`, starting at 12 o'clock and turning
/// clockwise in screen coordinates.
fn axis_angle(index: usize, count: usize) -> f64 {
    -PI / 2.0 + 2.0 * PI * index as f64 / count as f64
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

fn label_anchor(angle: f64) -> TextAnchor {
    let cos = angle.cos();
    if cos.abs() < 1e-6 {
        TextAnchor::Middle
    } else if cos > 0.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    }
}

/// Plots `series_b` of each point against its subject.
pub fn radar_scene(data: &[RadarPoint], style: RadarStyle) -> Result<RadarScene> {
    style.validate()?;
    if data.len() < 3 {
        return Err(DashboardError::InvalidGeometry(format!(
            "radar needs at least 3 axes, got {}",
            data.len()
        )));
    }

    let vp = style.viewport;
    let center = Point::new(vp.width / 2.0, vp.height / 2.0);
    let radius = vp.width.min(vp.height) / 2.0 * style.outer_radius_ratio;
    let count = data.len();

    let rings = (1..=style.grid_rings)
        .map(|ring| {
            let r = radius * ring as f64 / style.grid_rings as f64;
            (0..count).map(|i| polar(center, r, axis_angle(i, count))).collect()
        })
        .collect();

    let spokes = (0..count)
        .map(|i| (center, polar(center, radius, axis_angle(i, count))))
        .collect();

    let labels = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let angle = axis_angle(i, count);
            TextLabel {
                text: p.subject.to_string(),
                position: polar(center, radius + style.label_offset, angle),
                anchor: label_anchor(angle),
            }
        })
        .collect();

    let vertices: Vec<RadarVertex> = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let clamped = p.series_b.clamp(0.0, style.domain_max);
            let r = radius * clamped / style.domain_max;
            RadarVertex {
                subject: p.subject,
                value: p.series_b,
                point: polar(center, r, axis_angle(i, count)),
            }
        })
        .collect();

    if vertices.iter().any(|v| !v.point.is_finite()) {
        return Err(DashboardError::InvalidGeometry(
            "radar vertex is not finite".to_string(),
        ));
    }

    Ok(RadarScene {
        style,
        center,
        radius,
        rings,
        spokes,
        labels,
        vertices,
    })
}

// --- Horizontal bars ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub viewport: Viewport,
    pub margin: f64,
    /// Width reserved for the category axis on the left.
    pub category_width: f64,
    pub bar_size: f64,
    pub corner_radius: f64,
    pub grid_intervals: usize,
    pub grid_dash: &'static str,
    pub grid_stroke: &'static str,
    pub label_color: &'static str,
    pub label_font_size: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(640.0, 256.0),
            margin: 5.0,
            category_width: 100.0,
            bar_size: 40.0,
            corner_radius: 4.0,
            grid_intervals: 4,
            grid_dash: "3 3",
            grid_stroke: "#334155",
            label_color: "#94a3b8",
            label_font_size: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl BarRect {
    /// SVG path with only the right-hand corners rounded.
    pub fn path_data(&self) -> String {
        let r = self.corner_radius.min(self.width / 2.0).min(self.height / 2.0).max(0.0);
        let (x, y, w, h) = (self.x, self.y, self.width, self.height);
        format!(
            "M{x:.2},{y:.2} H{:.2} A{r:.2},{r:.2} 0 0 1 {:.2},{:.2} V{:.2} A{r:.2},{r:.2} 0 0 1 {:.2},{:.2} H{x:.2} Z",
            x + w - r,
            x + w,
            y + r,
            y + h - r,
            x + w - r,
            y + h,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    pub style: BarStyle,
    pub domain_max: f64,
    pub bars: Vec<BarRect>,
    pub labels: Vec<TextLabel>,
    /// Vertical grid lines as (top, bottom) pairs.
    pub grid: Vec<(Point, Point)>,
}

/// Rounds `max` up to a 1/2/2.5/5 step over `intervals` grid intervals.
pub fn nice_ceiling(max: f64, intervals: usize) -> f64 {
    if !max.is_finite() || max <= 0.0 || intervals == 0 {
        return 1.0;
    }
    let raw = max / intervals as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0)
        * magnitude;
    (max / step).ceil() * step
}

pub fn bar_scene(data: &[PerformanceBar], style: BarStyle) -> Result<BarScene> {
    style.viewport.ensure_valid()?;

    let plot_left = style.margin + style.category_width;
    let plot_right = style.viewport.width - style.margin;
    let plot_top = style.margin;
    let plot_bottom = style.viewport.height - style.margin;
    if plot_right <= plot_left || plot_bottom <= plot_top {
        return Err(DashboardError::InvalidGeometry(
            "bar chart plot area is empty".to_string(),
        ));
    }

    let plot_width = plot_right - plot_left;
    let max_value = data.iter().map(|b| b.value).fold(0.0, f64::max);
    let domain_max = nice_ceiling(max_value, style.grid_intervals);

    let grid = (0..=style.grid_intervals)
        .map(|i| {
            let x = plot_left + plot_width * i as f64 / style.grid_intervals.max(1) as f64;
            (Point::new(x, plot_top), Point::new(x, plot_bottom))
        })
        .collect();

    let row_height = if data.is_empty() {
        0.0
    } else {
        (plot_bottom - plot_top) / data.len() as f64
    };
    let bar_height = if style.bar_size <= row_height {
        style.bar_size
    } else {
        row_height * 0.8
    };

    let mut bars = Vec::with_capacity(data.len());
    let mut labels = Vec::with_capacity(data.len());
    for (i, entry) in data.iter().enumerate() {
        let row_top = plot_top + row_height * i as f64;
        let center_y = row_top + row_height / 2.0;
        let width = plot_width * entry.value.max(0.0) / domain_max;
        bars.push(BarRect {
            name: entry.name,
            value: entry.value,
            color: entry.color,
            x: plot_left,
            y: center_y - bar_height / 2.0,
            width,
            height: bar_height,
            corner_radius: style.corner_radius,
        });
        labels.push(TextLabel {
            text: entry.name.to_string(),
            position: Point::new(plot_left - 6.0, center_y),
            anchor: TextAnchor::End,
        });
    }

    Ok(BarScene {
        style,
        domain_max,
        bars,
        labels,
        grid,
    })
}

// --- Core meters ---

#[derive(Debug, Clone, PartialEq)]
pub struct CoreMeter {
    pub label: &'static str,
    pub percent_text: String,
    /// Filled share of the track, in percent.
    pub width_pct: f64,
}

impl CoreMeter {
    /// Inline style for the filled part of the track.
    pub fn fill_style(&self) -> String {
        format!("width: {}%", self.width_pct)
    }
}

pub fn progress_width(usage: f64) -> f64 {
    if usage.is_nan() {
        return 0.0;
    }
    usage.clamp(0.0, 100.0)
}

pub fn core_meters(data: &[CoreUsage]) -> Vec<CoreMeter> {
    data.iter()
        .map(|c| CoreMeter {
            label: c.core,
            percent_text: format!("{}%", c.usage),
            width_pct: progress_width(c.usage),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CORE_USAGE, PERFORMANCE_DATA, RADAR_DATA};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_radar_keeps_order_and_values() {
        let scene = radar_scene(&RADAR_DATA, RadarStyle::default()).unwrap();
        assert_eq!(scene.vertices.len(), 5);
        assert_eq!(scene.labels.len(), 5);
        for (vertex, source) in scene.vertices.iter().zip(RADAR_DATA.iter()) {
            assert_eq!(vertex.subject, source.subject);
            assert_eq!(vertex.value, source.series_b);
        }
        let texts: Vec<_> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            ["Cost Efficiency", "Scalability", "Reliability", "Talent Growth", "Market Speed"]
        );
    }

    #[test]
    fn test_radar_scales_against_fixed_domain() {
        let style = RadarStyle::default();
        let scene = radar_scene(&RADAR_DATA, style).unwrap();
        // 400x320 viewport: radius = 160 * 0.8
        assert!(close(scene.radius, 128.0));

        // First axis points straight up.
        let first = scene.vertices[0].point;
        assert!(close(first.x, scene.center.x));
        assert!(close(scene.center.y - first.y, 128.0 * 110.0 / 150.0));

        for vertex in &scene.vertices {
            let dist = ((vertex.point.x - scene.center.x).powi(2)
                + (vertex.point.y - scene.center.y).powi(2))
            .sqrt();
            assert!(close(dist, scene.radius * vertex.value / 150.0));
        }
    }

    #[test]
    fn test_radar_grid() {
        let scene = radar_scene(&RADAR_DATA, RadarStyle::default()).unwrap();
        assert_eq!(scene.rings.len(), 5);
        assert!(scene.rings.iter().all(|ring| ring.len() == 5));
        assert_eq!(scene.spokes.len(), 5);
        assert_eq!(scene.labels[0].anchor, TextAnchor::Middle);
        assert_eq!(scene.labels[1].anchor, TextAnchor::Start);
        assert_eq!(scene.labels[4].anchor, TextAnchor::End);
    }

    #[test]
    fn test_radar_rejects_bad_input() {
        assert!(radar_scene(&RADAR_DATA[..2], RadarStyle::default()).is_err());
        let style = RadarStyle {
            viewport: Viewport::new(0.0, 100.0),
            ..RadarStyle::default()
        };
        assert!(matches!(
            radar_scene(&RADAR_DATA, style),
            Err(DashboardError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_bar_scene_round_trips_values_and_colors() {
        let scene = bar_scene(&PERFORMANCE_DATA, BarStyle::default()).unwrap();
        assert_eq!(scene.bars.len(), 3);
        let values: Vec<_> = scene.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, [21.0, 84.0, 5.0]);
        assert_eq!(values.iter().sum::<f64>(), 110.0);
        let colors: Vec<_> = scene.bars.iter().map(|b| b.color).collect();
        assert_eq!(colors, ["#38bdf8", "#f97316", "#94a3b8"]);
    }

    #[test]
    fn test_bar_widths_are_proportional() {
        let scene = bar_scene(&PERFORMANCE_DATA, BarStyle::default()).unwrap();
        assert_eq!(scene.domain_max, 100.0);
        let plot_width = 640.0 - 5.0 - 105.0;
        assert!(close(scene.bars[1].width, plot_width * 0.84));
        assert!(close(scene.bars[0].width / scene.bars[2].width, 21.0 / 5.0));
        assert!(scene.bars.iter().all(|b| b.height == 40.0 && b.x == 105.0));
        assert_eq!(scene.grid.len(), 5);
    }

    #[test]
    fn test_bar_path_rounds_right_corners() {
        let scene = bar_scene(&PERFORMANCE_DATA, BarStyle::default()).unwrap();
        let path = scene.bars[0].path_data();
        assert!(path.starts_with("M105.00,"));
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(84.0, 4), 100.0);
        assert_eq!(nice_ceiling(100.0, 4), 100.0);
        assert_eq!(nice_ceiling(7.0, 4), 8.0);
        assert_eq!(nice_ceiling(0.0, 4), 1.0);
    }

    #[test]
    fn test_core_meters() {
        let meters = core_meters(&CORE_USAGE);
        assert_eq!(meters.len(), 8);
        assert_eq!(meters[0].label, "Core 1");
        assert_eq!(meters[0].percent_text, "95%");
        assert_eq!(meters[0].width_pct, 95.0);
        assert_eq!(meters[0].fill_style(), "width: 95%");
        assert_eq!(progress_width(140.0), 100.0);
        assert_eq!(progress_width(-3.0), 0.0);
    }

    #[test]
    fn test_points_attr() {
        let attr = points_attr(&[Point::new(1.0, 2.0), Point::new(3.5, 4.25)]);
        assert_eq!(attr, "1.00,2.00 3.50,4.25");
        assert_eq!(points_attr(&[]), "");
        assert_eq!(points_attr(&[Point::new(0.0, 0.0)]), "0.00,0.00");
    }
}
