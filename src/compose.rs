//! # Compositing
//!
//! Builds the preview image in memory:
//!
//! 1. Fill a square RGBA canvas with the background color
//! 2. Resize the logo to its fixed side length (Lanczos3)
//! 3. Paste it at the centered offset, using its alpha channel as the mask
//! 4. Flatten to opaque RGB
//!
//! Nothing here touches the filesystem except [`load_logo`].

use std::path::Path;

use image::{ImageError, Rgba, Rgba32FImage, RgbImage, RgbaImage, imageops::FilterType};

use crate::config::OgImageConfig;
use crate::error::OgImageError;

/// Create the solid background canvas.
pub fn background(config: &OgImageConfig) -> RgbaImage {
    RgbaImage::from_pixel(config.size, config.size, config.background.to_rgba())
}

/// Decode the logo and convert it to RGBA8.
pub fn load_logo(path: &Path) -> Result<RgbaImage, OgImageError> {
    let image = image::open(path).map_err(|e| match e {
        ImageError::Unsupported(unsupported) => {
            OgImageError::CodecUnavailable(unsupported.to_string())
        }
        ImageError::IoError(io) => OgImageError::Io(io),
        other => OgImageError::Decode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;
    Ok(image.to_rgba8())
}

/// Resize to exactly `side × side`. Aspect ratio is not preserved.
///
/// Filtering runs on premultiplied alpha, so the color of fully transparent
/// pixels never bleeds into antialiased edges.
pub fn resize_logo(logo: &RgbaImage, side: u32) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(logo.width(), logo.height(), |x, y| {
        let p = logo.get_pixel(x, y);
        let a = p[3] as f32 / 255.0;
        Rgba([
            p[0] as f32 / 255.0 * a,
            p[1] as f32 / 255.0 * a,
            p[2] as f32 / 255.0 * a,
            a,
        ])
    });

    let resized = image::imageops::resize(&premultiplied, side, side, FilterType::Lanczos3);

    RgbaImage::from_fn(side, side, |x, y| {
        let p = resized.get_pixel(x, y);
        let a = p[3].clamp(0.0, 1.0);
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(p[0] / a), to_u8(p[1] / a), to_u8(p[2] / a), alpha])
    })
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Blend one channel: `fg` weighted by `mask`, `bg` by its complement.
#[inline]
fn blend_channel(fg: u8, bg: u8, mask: u8) -> u8 {
    let m = mask as u32;
    ((fg as u32 * m + bg as u32 * (255 - m) + 127) / 255) as u8
}

/// Paste `logo` onto `canvas` at `(x, y)`, masked by the logo's own alpha.
///
/// All four channels are blended. Parts of the logo falling outside the
/// canvas are dropped.
pub fn paste_masked(canvas: &mut RgbaImage, logo: &RgbaImage, x: u32, y: u32) {
    let (cw, ch) = canvas.dimensions();
    if x >= cw || y >= ch {
        return;
    }
    let w = logo.width().min(cw - x);
    let h = logo.height().min(ch - y);

    for ly in 0..h {
        for lx in 0..w {
            let src = logo.get_pixel(lx, ly);
            let mask = src[3];
            let dst = canvas.get_pixel_mut(x + lx, y + ly);
            for c in 0..4 {
                dst[c] = blend_channel(src[c], dst[c], mask);
            }
        }
    }
}

/// Drop the alpha channel.
pub fn flatten(canvas: &RgbaImage) -> RgbImage {
    let (w, h) = canvas.dimensions();
    RgbImage::from_fn(w, h, |x, y| {
        let p = canvas.get_pixel(x, y);
        image::Rgb([p[0], p[1], p[2]])
    })
}

/// Run the full compositing step for an already decoded logo.
pub fn compose(config: &OgImageConfig, logo: &RgbaImage) -> RgbImage {
    let mut canvas = background(config);
    let resized = resize_logo(logo, config.logo_size());
    let (x, y) = config.logo_offset();
    log::debug!(
        "Pasting {}x{} logo at ({}, {}) on {}x{} canvas",
        resized.width(),
        resized.height(),
        x,
        y,
        config.size,
        config.size
    );
    paste_masked(&mut canvas, &resized, x, y);
    flatten(&canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use image::{Rgb, Rgba};

    fn small_config() -> OgImageConfig {
        OgImageConfig {
            size: 20,
            background: Color::new(10, 20, 30),
            logo_scale_percent: 50,
        }
    }

    #[test]
    fn test_background_is_solid_and_opaque() {
        let canvas = background(&small_config());
        assert_eq!(canvas.dimensions(), (20, 20));
        assert!(canvas.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_blend_channel_extremes() {
        assert_eq!(blend_channel(200, 7, 255), 200);
        assert_eq!(blend_channel(200, 7, 0), 7);
        // (255 * 128 + 0 * 127 + 127) / 255 = 128
        assert_eq!(blend_channel(255, 0, 128), 128);
    }

    #[test]
    fn test_paste_masked_respects_alpha() {
        let mut canvas = RgbaImage::from_pixel(4, 1, Rgba([0, 0, 0, 255]));
        let logo = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => Rgba([255, 255, 255, 255]),
            1 => Rgba([255, 255, 255, 0]),
            _ => Rgba([200, 100, 50, 128]),
        });

        paste_masked(&mut canvas, &logo, 1, 0);

        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(1, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.get_pixel(2, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(3, 0), Rgba([100, 50, 25, 191]));
    }

    #[test]
    fn test_paste_masked_clips_to_canvas() {
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let logo = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]));

        paste_masked(&mut canvas, &logo, 2, 2);
        paste_masked(&mut canvas, &logo, 10, 10);

        let painted = canvas.pixels().filter(|p| p[0] == 9).count();
        assert_eq!(painted, 4);
    }

    #[test]
    fn test_flatten_drops_alpha() {
        let canvas = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 40]));
        let flat = flatten(&canvas);
        assert!(flat.pixels().all(|p| *p == Rgb([1, 2, 3])));
    }

    #[test]
    fn test_resize_logo_is_exact_square() {
        let logo = RgbaImage::from_pixel(40, 10, Rgba([255, 0, 0, 255]));
        let resized = resize_logo(&logo, 16);
        assert_eq!(resized.dimensions(), (16, 16));
    }

    #[test]
    fn test_resize_logo_ignores_transparent_color() {
        let logo = RgbaImage::from_fn(20, 20, |x, y| {
            if (5..15).contains(&x) && (5..15).contains(&y) {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 0])
            }
        });

        let resized = resize_logo(&logo, 73);

        for (x, y, p) in resized.enumerate_pixels() {
            assert_eq!(p[1], 0, "green leaked at ({}, {}): {:?}", x, y, p);
        }
        assert_eq!(*resized.get_pixel(36, 36), Rgba([255, 0, 0, 255]));
        assert_eq!(resized.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_compose_centers_opaque_logo() {
        let config = small_config();
        let logo = RgbaImage::from_pixel(7, 3, Rgba([255, 255, 255, 255]));

        let out = compose(&config, &logo);

        assert_eq!(out.dimensions(), (20, 20));
        for (x, y, p) in out.enumerate_pixels() {
            let inside = (5..15).contains(&x) && (5..15).contains(&y);
            let expected = if inside {
                Rgb([255, 255, 255])
            } else {
                Rgb([10, 20, 30])
            };
            assert_eq!(*p, expected, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_compose_transparent_logo_leaves_background() {
        let config = small_config();
        let logo = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 0]));
        let out = compose(&config, &logo);
        assert!(out.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }
}
