use wiresphere_common::{Color, Viewport};

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "first frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

pub(crate) fn clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_f32_with_opacity(1.0);
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Surface size in physical pixels for a logical viewport.
pub(crate) fn physical_extent(viewport: Viewport, scale_factor: f64) -> (u32, u32) {
    let w = (viewport.width as f64 * scale_factor).round().max(1.0) as u32;
    let h = (viewport.height as f64 * scale_factor).round().max(1.0) as u32;
    (w, h)
}
