use gyre_config::colors::parse_hex_color;
use gyre_config::schema::GyreConfig;

use crate::scene::srgb_to_linear;

/// Compute the wgpu clear color from the configured background.
///
/// Falls back to the stock deep blue when the hex string is invalid.
pub(crate) fn background_clear_color(config: &GyreConfig) -> wgpu::Color {
    let [r, g, b] = parse_hex_color(&config.scene.background_color).unwrap_or([0.07, 0.2, 0.35]);
    wgpu::Color {
        r: srgb_to_linear(r as f32) as f64,
        g: srgb_to_linear(g as f32) as f64,
        b: srgb_to_linear(b as f32) as f64,
        a: 1.0,
    }
}

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_color_matches_default_background() {
        let config = GyreConfig::default();
        let c = background_clear_color(&config);
        // "#123359" linearized
        assert!((c.r - srgb_to_linear(18.0 / 255.0) as f64).abs() < 1e-6);
        assert!((c.g - srgb_to_linear(51.0 / 255.0) as f64).abs() < 1e-6);
        assert!((c.b - srgb_to_linear(89.0 / 255.0) as f64).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clear_color_falls_back_on_invalid_hex() {
        let mut config = GyreConfig::default();
        config.scene.background_color = "nope".into();
        let c = background_clear_color(&config);
        assert!((c.r - srgb_to_linear(0.07) as f64).abs() < 1e-6);
        assert!((c.b - srgb_to_linear(0.35) as f64).abs() < 1e-6);
    }
}
