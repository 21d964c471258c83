//! Scales mapping data values onto pixel ranges.
//!
//! These mirror the D3 scales the charts draw their axes with, so a mark
//! computed here lands exactly where D3 puts the matching tick.

use serde::Serialize;

/// Minimum and maximum of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `[min, max * 1.05]` so the largest mark does not touch the axis edge.
pub fn padded_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    extent(values).map(|(lo, hi)| (lo, hi * 1.05))
}

/// Continuous linear scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: [domain.0, domain.1],
            range: [range.0, range.1],
        }
    }

    /// Map `value` into the range. A degenerate domain maps every value to
    /// the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Square-root scale: area, not radius, grows linearly with the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SqrtScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: [domain.0, domain.1],
            range: [range.0, range.1],
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let inner = LinearScale::new(
            (signed_sqrt(self.domain[0]), signed_sqrt(self.domain[1])),
            (self.range[0], self.range[1]),
        );
        inner.map(signed_sqrt(value))
    }
}

fn signed_sqrt(x: f64) -> f64 {
    if x < 0.0 {
        -(-x).sqrt()
    } else {
        x.sqrt()
    }
}

/// Categorical band scale with equal inner and outer padding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub range: [f64; 2],
    pub padding: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            domain,
            range: [range.0, range.1],
            padding,
        }
    }

    fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let width = self.range[1] - self.range[0];
        // d3: step = width / (n - paddingInner + 2 * paddingOuter)
        width / (n - self.padding + 2.0 * self.padding).max(1.0)
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `category`.
    pub fn position(&self, category: &str) -> Option<f64> {
        let i = self.domain.iter().position(|c| c == category)?;
        let step = self.step();
        Some(self.range[0] + step * self.padding + step * i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_ignores_non_finite() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, f64::INFINITY, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([f64::NAN]), None);
    }

    #[test]
    fn padded_extent_pads_only_the_max() {
        let (lo, hi) = padded_extent([10.0, 100.0]).unwrap();
        assert_eq!(lo, 10.0);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn linear_maps_endpoints_and_midpoint() {
        let s = LinearScale::new((0.0, 10.0), (60.0, 160.0));
        assert_eq!(s.map(0.0), 60.0);
        assert_eq!(s.map(10.0), 160.0);
        assert_eq!(s.map(5.0), 110.0);
    }

    #[test]
    fn linear_supports_inverted_range() {
        let s = LinearScale::new((0.0, 100.0), (470.0, 30.0));
        assert_eq!(s.map(0.0), 470.0);
        assert_eq!(s.map(100.0), 30.0);
    }

    #[test]
    fn linear_degenerate_domain_maps_to_middle() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 50.0);
        assert_eq!(s.map(123.0), 50.0);
    }

    #[test]
    fn sqrt_scale_is_linear_in_area() {
        let s = SqrtScale::new((0.0, 100.0), (0.0, 10.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(100.0), 10.0);
        assert!((s.map(25.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn band_positions_are_evenly_spaced() {
        let s = BandScale::new(
            vec!["a".into(), "b".into(), "c".into()],
            (0.0, 310.0),
            0.1,
        );
        // step = 310 / (3 - 0.1 + 0.2) = 100
        assert!((s.bandwidth() - 90.0).abs() < 1e-9);
        assert!((s.position("a").unwrap() - 10.0).abs() < 1e-9);
        assert!((s.position("c").unwrap() - 210.0).abs() < 1e-9);
        assert_eq!(s.position("zzz"), None);
    }
}
