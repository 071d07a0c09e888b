use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque RGB pixel on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Per-pixel brightness: the mean of the three channels.
    pub fn brightness(&self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }
}

/// A translucent paint color used by the overlay compositor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0,1].
    pub alpha: f32,
}

impl Paint {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            alpha,
        }
    }
}

/// A raster frame of RGB pixels, row-major from the top-left corner.
///
/// This is the camera image the pipelines sample from and the overlay
/// compositor paints onto. An external capture layer owns acquisition; the
/// core only reads and blends pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame {
    data: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl RgbFrame {
    pub fn new(data: Vec<Rgb>, width: u32, height: u32) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::FrameSizeMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Rgb,
    {
        let mut data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            data: vec![color; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.data[(y as u32 * self.width + x as u32) as usize])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.data[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Alpha-over composite a translucent paint onto one pixel:
    /// `out = a * src + (1 - a) * dst` per channel. Out-of-bounds writes are
    /// silently dropped so polygon edges can be clipped by the caller loop.
    pub fn blend(&mut self, x: i32, y: i32, paint: Paint) {
        let Some(dst) = self.get(x, y) else {
            return;
        };
        let a = paint.alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| -> u8 {
            (a * src as f32 + (1.0 - a) * dst as f32).round() as u8
        };
        self.set(
            x,
            y,
            Rgb::new(
                mix(paint.r, dst.r),
                mix(paint.g, dst.g),
                mix(paint.b, dst.b),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_validation() {
        assert!(RgbFrame::new(vec![Rgb::BLACK; 12], 4, 3).is_ok());
        let err = RgbFrame::new(vec![Rgb::BLACK; 11], 4, 3).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::FrameSizeMismatch { expected: 12, got: 11, .. }
        ));
    }

    #[test]
    fn pixel_access_and_bounds() {
        let frame = RgbFrame::from_fn(3, 2, |x, y| Rgb::gray((x + y * 3) as u8));
        assert_eq!(frame.get(0, 0), Some(Rgb::gray(0)));
        assert_eq!(frame.get(2, 1), Some(Rgb::gray(5)));
        assert_eq!(frame.get(-1, 0), None);
        assert_eq!(frame.get(3, 0), None);
        assert_eq!(frame.get(0, 2), None);
    }

    #[test]
    fn blend_full_and_zero_alpha() {
        let mut frame = RgbFrame::filled(2, 2, Rgb::gray(100));

        frame.blend(0, 0, Paint::new(200, 0, 0, 1.0));
        assert_eq!(frame.get(0, 0), Some(Rgb::new(200, 0, 0)));

        frame.blend(1, 0, Paint::new(200, 0, 0, 0.0));
        assert_eq!(frame.get(1, 0), Some(Rgb::gray(100)));
    }

    #[test]
    fn blend_half_alpha_mixes_channels() {
        let mut frame = RgbFrame::filled(1, 1, Rgb::new(0, 100, 200));
        frame.blend(0, 0, Paint::new(100, 0, 0, 0.5));
        assert_eq!(frame.get(0, 0), Some(Rgb::new(50, 50, 100)));
    }

    #[test]
    fn blend_out_of_bounds_is_noop() {
        let mut frame = RgbFrame::filled(2, 2, Rgb::gray(10));
        let before = frame.clone();
        frame.blend(-1, 0, Paint::new(255, 255, 255, 1.0));
        frame.blend(0, 5, Paint::new(255, 255, 255, 1.0));
        assert_eq!(frame, before);
    }

    #[test]
    fn brightness_is_channel_mean() {
        assert!((Rgb::new(30, 60, 90).brightness() - 60.0).abs() < 1e-6);
        assert_eq!(Rgb::BLACK.brightness(), 0.0);
    }
}
