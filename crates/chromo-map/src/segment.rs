// SPDX-License-Identifier: MIT
//
// matplotlib-style segment data: per-channel anchor lists `(x, y0, y1)`
// expanded into lookup tables. `y0` is the value approached from the left of
// `x`, `y1` the value leaving it, so a step is written as `y0 != y1`.

use crate::error::{MapError, Result};

/// One anchor of a channel: position, value from the left, value to the right.
pub type Anchor = (f64, f64, f64);

/// Anchor lists for each channel. `alpha` defaults to fully opaque.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentData {
    pub red: Vec<Anchor>,
    pub green: Vec<Anchor>,
    pub blue: Vec<Anchor>,
    pub alpha: Option<Vec<Anchor>>,
}

impl SegmentData {
    #[must_use]
    pub const fn new(red: Vec<Anchor>, green: Vec<Anchor>, blue: Vec<Anchor>) -> Self {
        Self { red, green, blue, alpha: None }
    }

    /// Check every channel the way matplotlib does before building a table.
    pub fn validate(&self) -> Result<()> {
        validate_channel("red", &self.red)?;
        validate_channel("green", &self.green)?;
        validate_channel("blue", &self.blue)?;
        if let Some(alpha) = &self.alpha {
            validate_channel("alpha", alpha)?;
        }
        Ok(())
    }

    /// `n` RGBA entries sampled at `k / (n − 1)`.
    pub fn lookup_table(&self, n: usize) -> Result<Vec<[f64; 4]>> {
        self.validate()?;
        let red = channel_table(&self.red, n);
        let green = channel_table(&self.green, n);
        let blue = channel_table(&self.blue, n);
        let alpha = self.alpha.as_ref().map_or_else(|| vec![1.0; n], |a| channel_table(a, n));

        Ok((0..n).map(|i| [red[i], green[i], blue[i], alpha[i]]).collect())
    }
}

#[allow(clippy::float_cmp)]
fn validate_channel(channel: &'static str, anchors: &[Anchor]) -> Result<()> {
    let invalid = |reason: &str| MapError::InvalidSegments { channel, reason: reason.to_string() };

    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return Err(invalid("no anchors"));
    };
    if first.0 != 0.0 || last.0 != 1.0 {
        return Err(invalid("mapping points must start with x=0 and end with x=1"));
    }
    if anchors.windows(2).any(|w| w[1].0 < w[0].0) {
        return Err(invalid("mapping points must have x in increasing order"));
    }
    Ok(())
}

/// First index whose `x` is `>= value` (numpy `searchsorted`, side left).
fn search_left(xs: &[f64], value: f64) -> usize {
    xs.partition_point(|&x| x < value)
}

/// One channel of the table. Anchors must already be validated.
fn channel_table(anchors: &[Anchor], n: usize) -> Vec<f64> {
    let clip = |v: f64| v.clamp(0.0, 1.0);
    let last_y0 = anchors.last().map_or(0.0, |a| a.1);

    match n {
        0 => return Vec::new(),
        1 => return vec![clip(last_y0)],
        _ => {}
    }

    let scale = (n - 1) as f64;
    let xs: Vec<f64> = anchors.iter().map(|a| a.0 * scale).collect();

    let mut lut = Vec::with_capacity(n);
    lut.push(clip(anchors[0].2));
    for k in 1..n - 1 {
        let target = k as f64;
        let ind = search_left(&xs, target).clamp(1, anchors.len() - 1);
        let (x0, x1) = (xs[ind - 1], xs[ind]);
        let left = anchors[ind - 1].2;
        let right = anchors[ind].1;
        let distance = if x1 > x0 { (target - x0) / (x1 - x0) } else { 0.0 };
        lut.push(clip(distance.mul_add(right - left, left)));
    }
    lut.push(clip(last_y0));
    lut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn ramp() -> Vec<Anchor> {
        vec![(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]
    }

    #[test]
    fn linear_ramp_matches_linspace() {
        let data = SegmentData::new(ramp(), ramp(), ramp());
        let lut = data.lookup_table(5).unwrap();
        for (i, entry) in lut.iter().enumerate() {
            let expected = i as f64 / 4.0;
            assert!(approx_eq(entry[0], expected, 1e-12), "{i}: {entry:?}");
            assert!(approx_eq(entry[3], 1.0, 1e-12));
        }
    }

    #[test]
    fn single_entry_uses_last_y0() {
        let data = SegmentData::new(ramp(), vec![(0.0, 0.2, 0.2), (1.0, 0.7, 0.9)], ramp());
        let lut = data.lookup_table(1).unwrap();
        assert_eq!(lut, vec![[1.0, 0.7, 1.0, 1.0]]);
    }

    #[test]
    fn step_uses_y0_then_y1() {
        // 0 up to the middle, then a jump to 1.
        let step = vec![(0.0, 0.0, 0.0), (0.5, 0.0, 1.0), (1.0, 1.0, 1.0)];
        let data = SegmentData::new(step.clone(), step.clone(), step);
        let lut = data.lookup_table(5).unwrap();
        let reds: Vec<f64> = lut.iter().map(|e| e[0]).collect();
        assert!(approx_eq(reds[1], 0.0, 1e-12));
        assert!(approx_eq(reds[2], 0.0, 1e-12));
        assert!(approx_eq(reds[3], 1.0, 1e-12));
    }

    #[test]
    fn values_are_clipped() {
        let wild = vec![(0.0, -1.0, -1.0), (1.0, 2.0, 2.0)];
        let data = SegmentData::new(wild.clone(), wild.clone(), wild);
        let lut = data.lookup_table(3).unwrap();
        assert_eq!(lut[0][0], 0.0);
        assert_eq!(lut[1][0], 0.5);
        assert_eq!(lut[2][0], 1.0);
    }

    #[test]
    fn alpha_channel_is_used() {
        let data = SegmentData {
            alpha: Some(vec![(0.0, 0.0, 0.0), (1.0, 0.5, 0.5)]),
            ..SegmentData::new(ramp(), ramp(), ramp())
        };
        let lut = data.lookup_table(3).unwrap();
        assert!(approx_eq(lut[1][3], 0.25, 1e-12));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let bad = SegmentData::new(vec![(0.1, 0.0, 0.0), (1.0, 1.0, 1.0)], ramp(), ramp());
        let err = bad.lookup_table(4).unwrap_err();
        assert!(err.to_string().contains("red"), "{err}");

        let short = SegmentData::new(ramp(), ramp(), vec![(0.0, 0.0, 0.0), (0.9, 1.0, 1.0)]);
        assert!(short.validate().is_err());
    }

    #[test]
    fn rejects_decreasing_x() {
        let bad = vec![(0.0, 0.0, 0.0), (0.6, 1.0, 1.0), (0.4, 0.0, 0.0), (1.0, 1.0, 1.0)];
        let data = SegmentData::new(ramp(), bad, ramp());
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("increasing"), "{err}");
    }

    #[test]
    fn rejects_empty_channel() {
        let data = SegmentData::new(Vec::new(), ramp(), ramp());
        assert!(data.validate().is_err());
    }
}
