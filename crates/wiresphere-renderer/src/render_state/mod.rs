mod frame;
mod helpers;
mod state;

pub use state::RenderState;

#[cfg(test)]
mod tests {
    use super::helpers::{clear_color, physical_extent};
    use wiresphere_common::{Color, Viewport};

    #[test]
    fn clear_color_normalizes_channels() {
        let c = clear_color(Color::from_rgba(255, 0, 51, 255));
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn physical_extent_scales_and_rounds() {
        assert_eq!(physical_extent(Viewport::new(800.0, 600.0), 2.0), (1600, 1200));
        assert_eq!(physical_extent(Viewport::new(100.4, 50.6), 1.0), (100, 51));
    }

    #[test]
    fn physical_extent_never_zero() {
        assert_eq!(physical_extent(Viewport::new(1.0, 1.0), 0.25), (1, 1));
    }
}
