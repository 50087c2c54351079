//! Degree-based HSV to RGB conversion
//!
//! Used for seeding colors from hue (the startup rainbow); the steady-state
//! engine itself only moves RGB around.

use crate::color::Rgb;

/// Convert a hue/saturation/value triple to RGB.
///
/// `h` is in integer degrees, expected 0-359 but not range-checked: a hue
/// of 360 or above (or below 0) lands in the last sextant. `s` and `v` are
/// expected in 0.0-1.0; out-of-range inputs propagate through the math and
/// saturate at the channel bounds. Both are the caller's responsibility.
///
/// Channels are truncated toward zero, not rounded.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_degrees_to_rgb(h: i32, s: f32, v: f32) -> Rgb {
    let c = s * v;
    let x = c * (1.0 - libm::fabsf(libm::fmodf(h as f32 / 60.0, 2.0) - 1.0));
    let m = v - c;

    let (r, g, b) = match h {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
    }
}
