//! Pure plotting math: linear scales, tick generation and point layout.
//!
//! Kept free of any Dioxus types so the geometry can be unit tested without a
//! renderer.

/// Maps a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut domain_min, mut domain_max) = domain;
        if !(domain_max > domain_min) {
            // Degenerate or inverted domain: widen so position() stays defined.
            domain_max = domain_min + 1.0;
            domain_min -= 1.0;
        }
        Self {
            domain_min,
            domain_max,
            range_min: range.0,
            range_max: range.1,
        }
    }

    pub fn position(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Roughly `count` evenly spaced tick values on a 1/2/5 step, clipped to
    /// the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let span = self.domain_max - self.domain_min;
        let step = nice_step(span, count.max(2));
        let mut tick = (self.domain_min / step).ceil() * step;
        let mut out = Vec::new();
        while tick <= self.domain_max + step * 1e-9 {
            out.push(tick);
            tick += step;
        }
        out
    }
}

/// Round a raw step up to the nearest 1/2/5 × 10^k value.
pub fn nice_step(span: f64, count: usize) -> f64 {
    if span <= 0.0 {
        return 1.0;
    }
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Evenly spread `len` sample x positions across `width` pixels.
pub fn x_position(index: usize, len: usize, width: f64) -> f64 {
    if len < 2 {
        return width / 2.0;
    }
    index as f64 / (len - 1) as f64 * width
}

/// Inverse of [`x_position`]: the series index nearest to a pixel offset.
pub fn nearest_index(x: f64, len: usize, width: f64) -> usize {
    if len == 0 {
        return 0;
    }
    if len == 1 || width <= 0.0 {
        return 0;
    }
    let t = (x / width).clamp(0.0, 1.0);
    (t * (len - 1) as f64).round() as usize
}

/// Build an SVG `points` attribute for a polyline of y values.
pub fn polyline_points(values: &[f64], y_scale: &LinearScale, width: f64) -> String {
    let mut points = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            points.push(' ');
        }
        let x = x_position(index, values.len(), width);
        let y = y_scale.position(*value);
        points.push_str(&format!("{x:.1},{y:.1}"));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_maps_domain_ends_to_range_ends() {
        let scale = LinearScale::new((0.0, 200.0), (400.0, 0.0));
        assert_eq!(scale.position(0.0), 400.0);
        assert_eq!(scale.position(200.0), 0.0);
        assert_eq!(scale.position(100.0), 200.0);
    }

    #[test]
    fn degenerate_domain_stays_finite() {
        let scale = LinearScale::new((120.0, 120.0), (0.0, 100.0));
        assert!(scale.position(120.0).is_finite());
    }

    #[test]
    fn ticks_land_on_nice_values_inside_domain() {
        let scale = LinearScale::new((0.0, 210.0), (400.0, 0.0));
        let ticks = scale.ticks(5);
        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(*ticks.first().unwrap() >= 0.0);
        assert!(*ticks.last().unwrap() <= 210.0 + 1e-6);
    }

    #[test]
    fn nice_step_prefers_1_2_5() {
        assert_eq!(nice_step(100.0, 5), 20.0);
        assert_eq!(nice_step(7.0, 5), 2.0);
        assert_eq!(nice_step(0.9, 5), 0.2);
    }

    #[test]
    fn nearest_index_clamps_to_series_bounds() {
        assert_eq!(nearest_index(-50.0, 10, 300.0), 0);
        assert_eq!(nearest_index(10_000.0, 10, 300.0), 9);
        assert_eq!(nearest_index(150.0, 10, 300.0), 5);
        assert_eq!(nearest_index(42.0, 0, 300.0), 0);
    }

    #[test]
    fn x_positions_span_the_width() {
        assert_eq!(x_position(0, 3, 300.0), 0.0);
        assert_eq!(x_position(2, 3, 300.0), 300.0);
        assert_eq!(x_position(0, 1, 300.0), 150.0);
    }

    #[test]
    fn polyline_points_is_pairwise() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
        let points = polyline_points(&[0.0, 5.0, 10.0], &scale, 200.0);
        assert_eq!(points, "0.0,100.0 100.0,50.0 200.0,0.0");
    }
}
