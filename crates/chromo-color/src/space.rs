// SPDX-License-Identifier: MIT
//
// Color space conversion math.
//
// Single-character variable names (r, g, b, h, s, v, l, c) are the standard
// mathematical convention in color science.
//
// Two families live here:
//
//   sRGB ↔ HSV / HLS     the classic hexcone models, same results as
//                        `colorsys` hexcone formulas (hue in [0, 1))
//   sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//                        Björn Ottosson's perceptual space, used for
//                        distance and perceptual mixing
//
// Every function is pure and total. Out-of-gamut results are returned as-is;
// callers decide whether to clamp.

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle in degrees to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── HSV ─────────────────────────────────────────────────────────────────────

/// Convert sRGB to HSV. All values in [0, 1], hue included.
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if (maxc - minc).abs() < f64::EPSILON {
        return (0.0, 0.0, v);
    }
    let range = maxc - minc;
    let s = range / maxc;
    let h = hexcone_hue(r, g, b, maxc, range);
    (h, s, v)
}

/// Convert HSV (all in [0, 1]) back to sRGB.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h.mul_add(6.0, -sector);
    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(-(1.0 - f), 1.0);
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

// ─── HLS ─────────────────────────────────────────────────────────────────────

/// Convert sRGB to HLS. Returned in `colorsys` order: (hue, lightness, saturation).
#[must_use]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sum = maxc + minc;
    let range = maxc - minc;
    let l = sum / 2.0;
    if range.abs() < f64::EPSILON {
        return (0.0, l, 0.0);
    }
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - maxc - minc)
    };
    let h = hexcone_hue(r, g, b, maxc, range);
    (h, l, s)
}

/// Convert HLS (all in [0, 1]) back to sRGB.
#[must_use]
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let m1 = 2.0f64.mul_add(l, -m2);
    (
        hls_channel(m1, m2, h + 1.0 / 3.0),
        hls_channel(m1, m2, h),
        hls_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        ((m2 - m1) * hue).mul_add(6.0, m1)
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        ((m2 - m1) * (2.0 / 3.0 - hue)).mul_add(6.0, m1)
    } else {
        m1
    }
}

/// Shared hue computation for HSV and HLS. `range` must be non-zero.
fn hexcone_hue(r: f64, g: f64, b: f64, maxc: f64, range: f64) -> f64 {
    let rc = (maxc - r) / range;
    let gc = (maxc - g) / range;
    let bc = (maxc - b) / range;
    #[allow(clippy::float_cmp)]
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Goes through the intermediate LMS cone response space. Matrices from
// https://bottosson.github.io/posts/oklab/

/// Convert Oklab (L, a, b) to linear sRGB.
#[must_use]
pub fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[must_use]
pub fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_)));
    let b_ok = 0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Oklab ↔ OKLCH ──────────────────────────────────────────────────────────

/// Convert Oklab to OKLCH (lightness, chroma, hue in degrees).
#[must_use]
pub fn oklab_to_oklch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // Achromatic: hue is undefined.
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, c, h)
}

/// Convert OKLCH (hue in degrees) to Oklab.
#[must_use]
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

// ─── Composites ──────────────────────────────────────────────────────────────

/// Convert gamma-encoded sRGB to Oklab.
#[must_use]
pub fn srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// Convert Oklab to gamma-encoded sRGB (may be out of gamut).
#[must_use]
pub fn oklab_to_srgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert OKLCH to gamma-encoded sRGB (may be out of gamut).
#[must_use]
pub fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (l, a, b) = oklch_to_oklab(l, c, h);
    oklab_to_srgb(l, a, b)
}

/// Whether an sRGB triple lies inside the displayable gamut (small tolerance).
#[must_use]
pub fn in_gamut(r: f64, g: f64, b: f64) -> bool {
    const EPS: f64 = 1e-9;
    let ok = |v: f64| (-EPS..=1.0 + EPS).contains(&v);
    ok(r) && ok(g) && ok(b)
}
