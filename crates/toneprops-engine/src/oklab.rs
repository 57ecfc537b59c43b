// ABOUTME: OKLab / OKLCH conversions for packed sRGB colors (D65)
// ABOUTME: Direct linear sRGB <-> OKLab transforms with cube-root nonlinearity and gamut mapping

use std::f64::consts::PI;
use toneprops_types::Argb;

/// OKLab color (lightness, green-red, blue-yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCH color (lightness, chroma, hue in radians `[0, 2π)`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Below this chroma the hue angle carries no information.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn linear_rgb(color: Argb) -> [f64; 3] {
    color
        .channels()
        .map(|channel| srgb_to_linear(f64::from(channel) / 255.0))
}

fn oklab_to_linear_rgb(lab: Oklab) -> [f64; 3] {
    // OKLab -> LMS'
    let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
    let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
    let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

    // Inverse nonlinearity
    let l = l_.powi(3);
    let m = m_.powi(3);
    let s = s_.powi(3);

    // LMS -> linear sRGB
    [
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    ]
}

pub fn argb_to_oklab(color: Argb) -> Oklab {
    let [r, g, b] = linear_rgb(color);

    // Linear sRGB -> LMS (OKLab M1)
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // LMS' -> OKLab (OKLab M2)
    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

/// Convert to packed sRGB, clamping out-of-gamut channels.
pub fn oklab_to_argb(lab: Oklab) -> Argb {
    let [r, g, b] = oklab_to_linear_rgb(lab).map(|v| {
        let srgb = linear_to_srgb(v.clamp(0.0, 1.0)).clamp(0.0, 1.0);
        (srgb * 255.0).round() as u8
    });
    Argb::from_rgb(r, g, b)
}

pub fn argb_to_oklch(color: Argb) -> Oklch {
    oklab_to_oklch(argb_to_oklab(color))
}

pub fn oklch_to_argb(lch: Oklch) -> Argb {
    oklab_to_argb(oklch_to_oklab(lch))
}

pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let mut h = lab.b.atan2(lab.a);
    if h < 0.0 {
        h += 2.0 * PI;
    }
    Oklch { l: lab.l, c, h }
}

pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    Oklab {
        l: lch.l,
        a: lch.c * lch.h.cos(),
        b: lch.c * lch.h.sin(),
    }
}

fn in_srgb_gamut(lch: Oklch) -> bool {
    const EPSILON: f64 = 1e-7;
    oklab_to_linear_rgb(oklch_to_oklab(lch))
        .iter()
        .all(|v| (-EPSILON..=1.0 + EPSILON).contains(v))
}

/// Reduce chroma until the color fits the sRGB gamut, preserving hue and lightness.
pub fn clamp_oklch_to_srgb_gamut(lch: Oklch) -> Oklch {
    if in_srgb_gamut(lch) {
        return lch;
    }

    let mut low = 0.0;
    let mut high = lch.c;
    for _ in 0..24 {
        let mid = (low + high) * 0.5;
        if in_srgb_gamut(Oklch { c: mid, ..lch }) {
            low = mid;
        } else {
            high = mid;
        }
    }
    Oklch { c: low, ..lch }
}

/// Signed shortest-arc hue difference `to - from`, in `(-π, π]`.
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > PI {
        delta -= 2.0 * PI;
    } else if delta <= -PI {
        delta += 2.0 * PI;
    }
    delta
}

/// Wrap a hue angle into `[0, 2π)`.
pub fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(2.0 * PI)
}
