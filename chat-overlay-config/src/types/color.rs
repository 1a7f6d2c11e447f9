//! Packed colour helpers.
//!
//! Chat colours are stored as a single `u32` in `0xRRGGBBAA` order.

/// Build a packed `0xRRGGBBAA` value from its four channels.
#[inline]
pub const fn rgba_components(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32
}

/// Extract the RGB channels of a packed colour, discarding alpha.
#[inline]
pub fn rgba_to_rgb(rgba: u32) -> [u8; 3] {
    [(rgba >> 24) as u8, (rgba >> 16) as u8, (rgba >> 8) as u8]
}

/// Pack an RGB triple into `0xRRGGBBAA` with a fully opaque alpha channel.
#[inline]
pub fn rgb_to_rgba(rgb: [u8; 3]) -> u32 {
    rgba_components(rgb[0], rgb[1], rgb[2], 0xff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        assert_eq!(rgba_to_rgb(0x11223344), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_rgb_to_rgba_is_opaque() {
        assert_eq!(rgb_to_rgba([0xab, 0xcd, 0xef]), 0xabcdefff);
    }

    #[test]
    fn test_zero_colour_is_black() {
        assert_eq!(rgba_to_rgb(0), [0, 0, 0]);
    }
}
