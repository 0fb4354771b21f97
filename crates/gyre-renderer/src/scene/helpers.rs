/// sRGB → linear conversion for palette colors on sRGB surfaces.
///
/// The shader works in linear light; the surface format converts back
/// on present.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_stays_black() {
        assert!((srgb_to_linear(0.0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn white_stays_white() {
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn dark_values_use_linear_segment() {
        let c = 0.04;
        assert!((srgb_to_linear(c) - c / 12.92).abs() < 1e-7);
    }

    #[test]
    fn mid_gray_darkens() {
        let linear = srgb_to_linear(0.5);
        assert!((linear - 0.2140).abs() < 1e-3);
    }

    #[test]
    fn conversion_is_monotonic() {
        let mut prev = -1.0f32;
        for i in 0..=100 {
            let linear = srgb_to_linear(i as f32 / 100.0);
            assert!(linear > prev);
            prev = linear;
        }
    }
}
