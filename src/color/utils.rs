use crate::{color::Rgb, math8::blend8};

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub const fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Per-channel integer mean of a group of colors
///
/// Returns black for an empty group.
#[allow(clippy::cast_possible_truncation)]
pub fn average_colors<I>(colors: I) -> Rgb
where
    I: IntoIterator<Item = Rgb>,
{
    let (r, g, b, count) = colors
        .into_iter()
        .fold((0u32, 0u32, 0u32, 0u32), |(r, g, b, n), c| {
            (
                r + u32::from(c.r),
                g + u32::from(c.g),
                b + u32::from(c.b),
                n + 1,
            )
        });

    if count == 0 {
        return Rgb::default();
    }

    Rgb {
        r: (r / count) as u8,
        g: (g / count) as u8,
        b: (b / count) as u8,
    }
}
