//! Pixel statistics over landmark-bounded rectangles.

use image::RgbImage;

/// Axis-aligned rectangle in pixel space. Extents may be negative or reach
/// past the image; [`Rect::clip`] resolves both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Integer pixel bounds, half-open: `x0..x1`, `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBounds {
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn pixel_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.x1 - self.x0) as usize * (self.y1 - self.y0) as usize
        }
    }
}

impl Rect {
    /// Integer bounds of this rectangle inside a `width × height` image.
    ///
    /// Coordinates truncate toward zero, a negative extent grows the rectangle
    /// toward the origin, and the result is clipped to the image.
    pub fn clip(&self, width: u32, height: u32) -> PixelBounds {
        let clamp = |v: f64, limit: u32| -> u32 {
            if v.is_nan() {
                0
            } else {
                v.clamp(0.0, limit as f64) as u32
            }
        };
        let (x0, x1) = span(self.x, self.width);
        let (y0, y1) = span(self.y, self.height);
        PixelBounds {
            x0: clamp(x0, width),
            y0: clamp(y0, height),
            x1: clamp(x1, width),
            y1: clamp(y1, height),
        }
    }

    /// Pixel area of the truncated, normalized rectangle before clipping.
    /// Off-image pixels count toward it as black.
    pub fn area(&self) -> f64 {
        let (x0, x1) = span(self.x, self.width);
        let (y0, y1) = span(self.y, self.height);
        let area = (x1 - x0) * (y1 - y0);
        if area.is_nan() {
            0.0
        } else {
            area
        }
    }
}

fn span(origin: f64, extent: f64) -> (f64, f64) {
    let start = origin.trunc();
    let end = start + extent.trunc();
    if end < start {
        (end, start)
    } else {
        (start, end)
    }
}

/// Per-channel mean plus the RMS color deviation from that mean.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorStats {
    pub mean: [f64; 3],
    /// Square root of the mean, over pixels, of the averaged squared channel
    /// deviations.
    pub deviation: f64,
}

impl ColorStats {
    pub fn brightness(&self) -> f64 {
        (self.mean[0] + self.mean[1] + self.mean[2]) / 3.0
    }
}

/// Mean and population standard deviation of `(R + G + B) / 3`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrayStats {
    pub mean: f64,
    pub std_dev: f64,
}

fn pixels_in(image: &RgbImage, bounds: PixelBounds) -> impl Iterator<Item = [f64; 3]> + '_ {
    (bounds.y0..bounds.y1).flat_map(move |y| {
        (bounds.x0..bounds.x1).map(move |x| {
            let p = image.get_pixel(x, y).0;
            [p[0] as f64, p[1] as f64, p[2] as f64]
        })
    })
}

/// Color statistics of `rect`. Pixels outside the image read as black; a
/// zero-area region yields all zeros.
pub fn color_stats(image: &RgbImage, rect: Rect) -> ColorStats {
    let area = rect.area();
    if area <= 0.0 {
        return ColorStats::default();
    }
    let bounds = rect.clip(image.width(), image.height());
    let outside = area - bounds.pixel_count() as f64;

    let mut sum = [0.0f64; 3];
    for px in pixels_in(image, bounds) {
        for (s, v) in sum.iter_mut().zip(px) {
            *s += v;
        }
    }
    let mean = sum.map(|s| s / area);

    let mut variance = 0.0f64;
    for px in pixels_in(image, bounds) {
        let dr = px[0] - mean[0];
        let dg = px[1] - mean[1];
        let db = px[2] - mean[2];
        variance += (dr * dr + dg * dg + db * db) / 3.0;
    }
    let [r, g, b] = mean;
    variance += outside * (r * r + g * g + b * b) / 3.0;

    ColorStats {
        mean,
        deviation: (variance / area).sqrt(),
    }
}

/// Grayscale statistics of `rect`, with the same black padding as
/// [`color_stats`].
pub fn gray_stats(image: &RgbImage, rect: Rect) -> GrayStats {
    let area = rect.area();
    if area <= 0.0 {
        return GrayStats::default();
    }
    let bounds = rect.clip(image.width(), image.height());
    let outside = area - bounds.pixel_count() as f64;

    let gray = |px: [f64; 3]| (px[0] + px[1] + px[2]) / 3.0;
    let mean = pixels_in(image, bounds).map(gray).sum::<f64>() / area;
    let variance = pixels_in(image, bounds)
        .map(|px| (gray(px) - mean).powi(2))
        .sum::<f64>()
        + outside * mean * mean;

    GrayStats {
        mean,
        std_dev: (variance / area).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{striped_image, uniform_image};

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect { x, y, width, height }
    }

    #[test]
    fn test_clip_inside() {
        let b = rect(2.7, 3.2, 4.9, 5.0).clip(100, 100);
        assert_eq!(b, PixelBounds { x0: 2, y0: 3, x1: 6, y1: 8 });
        assert_eq!(b.pixel_count(), 20);
    }

    #[test]
    fn test_clip_negative_extent() {
        let b = rect(10.0, 10.0, -4.0, -2.0).clip(100, 100);
        assert_eq!(b, PixelBounds { x0: 6, y0: 8, x1: 10, y1: 10 });
    }

    #[test]
    fn test_clip_outside_image() {
        let b = rect(-5.0, 90.0, 20.0, 50.0).clip(100, 100);
        assert_eq!(b, PixelBounds { x0: 0, y0: 90, x1: 15, y1: 100 });

        let b = rect(200.0, 200.0, 10.0, 10.0).clip(100, 100);
        assert!(b.is_empty());
    }

    #[test]
    fn test_clip_nan() {
        let b = rect(f64::NAN, 0.0, 10.0, 10.0).clip(100, 100);
        assert!(b.is_empty());
    }

    #[test]
    fn test_color_stats_uniform() {
        let img = uniform_image(20, 20, [200, 100, 50]);
        let s = color_stats(&img, rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(s.mean, [200.0, 100.0, 50.0]);
        assert_eq!(s.deviation, 0.0);
        assert!((s.brightness() - 350.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_stats_stripes() {
        let img = striped_image(10, 10, [0, 0, 0], [100, 100, 100]);
        let s = color_stats(&img, rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(s.mean, [50.0, 50.0, 50.0]);
        assert!((s.deviation - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_gray_stats_stripes() {
        let img = striped_image(10, 4, [0, 0, 0], [90, 120, 150]);
        let s = gray_stats(&img, rect(0.0, 0.0, 10.0, 4.0));
        assert!((s.mean - 60.0).abs() < 1e-9);
        assert!((s.std_dev - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_region_is_zero() {
        let img = uniform_image(10, 10, [255, 255, 255]);
        assert_eq!(color_stats(&img, rect(5.0, 5.0, 0.0, 3.0)), ColorStats::default());
        assert_eq!(gray_stats(&img, rect(50.0, 50.0, 3.0, 3.0)), GrayStats::default());
    }

    #[test]
    fn test_area_before_clipping() {
        assert_eq!(rect(50.0, 0.0, 100.0, 10.0).area(), 1000.0);
        assert_eq!(rect(10.9, 10.0, -4.0, -2.5).area(), 8.0);
        assert_eq!(rect(f64::NAN, 0.0, 10.0, 10.0).area(), 0.0);
    }

    #[test]
    fn test_region_past_edge_padded_black() {
        // Half of a 100x10 rectangle hangs off the right edge.
        let img = uniform_image(100, 100, [200, 200, 200]);
        let r = rect(50.0, 0.0, 100.0, 10.0);

        let c = color_stats(&img, r);
        assert_eq!(c.mean, [100.0; 3]);
        assert!((c.deviation - 100.0).abs() < 1e-9);
        // smoothness 20 * 0.6 + brightness 80 * 0.4
        assert!((crate::scoring::skin_quality(&c) - 44.0).abs() < 1e-9);

        let g = gray_stats(&img, r);
        assert!((g.mean - 100.0).abs() < 1e-9);
        assert!((g.std_dev - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_region_fully_outside_is_black() {
        let img = uniform_image(10, 10, [255, 255, 255]);
        let c = color_stats(&img, rect(-20.0, -20.0, 5.0, 5.0));
        assert_eq!(c.mean, [0.0; 3]);
        assert_eq!(c.deviation, 0.0);
    }
}
