//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Square viewBox, teal tile with a white road — window/taskbar icon
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#2dd4bf"/><path d="M24 58 L30 6 L34 6 L40 58 Z" fill="#09090b"/><rect x="31" y="12" width="2" height="8" fill="#fff"/><rect x="31" y="28" width="2" height="9" fill="#fff"/><rect x="30.5" y="45" width="3" height="10" fill="#fff"/></svg>"##;

/// Rasterize the icon SVG to straight-alpha RGBA at `size`×`size`.
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory (settings + logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Drop characters a number-typed input would not accept.
pub fn sanitize_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_numeric() {
        assert_eq!(sanitize_numeric("12.5"), "12.5");
        assert_eq!(sanitize_numeric("1e3"), "1e3");
        assert_eq!(sanitize_numeric("-4"), "-4");
        assert_eq!(sanitize_numeric("1 2a3 km"), "123");
        assert_eq!(sanitize_numeric("abc"), "");
    }

    #[test]
    fn test_icon_svg_is_complete() {
        assert!(ICON_SVG.starts_with("<svg"));
        assert!(ICON_SVG.ends_with("</svg>"));
        assert!(ICON_SVG.contains(r##"fill="#2dd4bf""##));
    }

    #[test]
    fn test_icon_rasterizes() {
        let (rgba, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
        // Corner is outside the rounded tile
        assert_eq!(rgba[3], 0);
        // Left edge, mid height: opaque teal tile
        let px = (16 * 32 + 2) * 4;
        assert_eq!(&rgba[px..px + 4], &[0x2d, 0xd4, 0xbf, 0xff]);
    }
}
