/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Exact `value * factor / 255` with truncating integer division. Both the
/// decay and blink render transforms are defined in this form, so the
/// faster `>> 8` approximation is not used here.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, factor: u8) -> u8 {
    ((value as u16 * factor as u16) / 255) as u8
}
