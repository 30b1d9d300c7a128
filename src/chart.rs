//! Line Chart Geometry
//!
//! Axis scaling and point placement for the SVG line chart.

/// Y axis range with evenly spaced ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisScale {
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count).map(|i| self.min + self.step * i as f64).collect()
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Round `range` to 1, 2, 5 or 10 times a power of ten
fn nice_num(range: f64) -> f64 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Pick a readable axis covering every value with at most `max_ticks` ticks
pub fn nice_scale<'a, I>(values: I, max_ticks: usize) -> AxisScale
where
    I: IntoIterator<Item = &'a f64>,
{
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if !lo.is_finite() {
        return AxisScale { min: 0.0, max: 1.0, step: 1.0 };
    }
    if lo == hi {
        lo -= 1.0;
        hi += 1.0;
    }
    let intervals = max_ticks.saturating_sub(1).max(1) as f64;
    let step = nice_num((hi - lo) / intervals);
    AxisScale {
        min: (lo / step).floor() * step,
        max: (hi / step).ceil() * step,
        step,
    }
}

/// Plot area inside the SVG viewbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
            pad_left: 48.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 40.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.pad_left - self.pad_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.pad_top - self.pad_bottom
    }

    pub fn bottom(&self) -> f64 {
        self.pad_top + self.plot_height()
    }

    /// X position of category `index` out of `count`
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    pub fn y_for(&self, value: f64, scale: &AxisScale) -> f64 {
        let ratio = if scale.span() > 0.0 { (value - scale.min) / scale.span() } else { 0.0 };
        self.pad_top + self.plot_height() * (1.0 - ratio)
    }

    pub fn points(&self, data: &[f64], scale: &AxisScale) -> Vec<(f64, f64)> {
        data.iter()
            .enumerate()
            .map(|(i, v)| (self.x_at(i, data.len()), self.y_for(*v, scale)))
            .collect()
    }
}

/// SVG `points` attribute for a polyline
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tick label without a trailing `.0` for whole numbers
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 7] = [65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0];

    #[test]
    fn test_nice_scale_sample_data() {
        let scale = nice_scale(&SAMPLE, 11);
        assert_eq!(scale, AxisScale { min: 40.0, max: 85.0, step: 5.0 });
        let ticks = scale.ticks();
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks.first(), Some(&40.0));
        assert_eq!(ticks.last(), Some(&85.0));
    }

    #[test]
    fn test_nice_scale_degenerate() {
        assert_eq!(nice_scale(&Vec::<f64>::new(), 11), AxisScale { min: 0.0, max: 1.0, step: 1.0 });
        let flat = nice_scale(&[3.0, 3.0], 11);
        assert!(flat.min <= 3.0 && flat.max >= 3.0 && flat.max > flat.min);
    }

    #[test]
    fn test_points_span_plot_area() {
        let layout = ChartLayout {
            width: 600.0,
            height: 300.0,
            pad_left: 40.0,
            pad_right: 40.0,
            pad_top: 40.0,
            pad_bottom: 40.0,
        };
        let scale = nice_scale(&SAMPLE, 11);
        let points = layout.points(&SAMPLE, &scale);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].0, 40.0);
        assert_eq!(points[6].0, 560.0);
        // 40 sits on the axis floor
        assert_eq!(points[6].1, 260.0);
        assert_eq!(layout.y_for(85.0, &scale), 40.0);
    }

    #[test]
    fn test_polyline_and_tick_format() {
        assert_eq!(polyline_points(&[(1.0, 2.0), (3.26, 4.0)]), "1.0,2.0 3.3,4.0");
        assert_eq!(format_tick(85.0), "85");
        assert_eq!(format_tick(0.5), "0.50");
    }
}
