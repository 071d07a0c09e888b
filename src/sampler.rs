//! Disc sampling of face regions.
//!
//! Each named face region is summarized by the pixel statistics of a small
//! disc centered on a single landmark. The disc radius is derived per frame
//! from the subject's eye span, so the same fraction of the face is sampled
//! regardless of distance from the camera.

use serde::{Deserialize, Serialize};

use crate::frame::RgbFrame;
use crate::types::{
    FaceLandmarks, CHIN, FOREHEAD, LEFT_CHEEK, NOSE_TIP, RIGHT_CHEEK, UNDER_LEFT_EYE,
    UNDER_RIGHT_EYE,
};

/// Pixel statistics over one sampled disc, on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStats {
    pub mean_r: f32,
    pub mean_g: f32,
    pub mean_b: f32,
    pub mean_brightness: f32,
    pub std_brightness: f32,
}

impl RegionStats {
    /// The fallback for a disc with no qualifying pixels (fully clipped at a
    /// frame edge). A valid, if uninformative, input for the classifier.
    pub const ZERO: RegionStats = RegionStats {
        mean_r: 0.0,
        mean_g: 0.0,
        mean_b: 0.0,
        mean_brightness: 0.0,
        std_brightness: 0.0,
    };
}

/// Sampling radius policy.
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// Disc radius as a fraction of the eye span.
    pub radius_fraction: f32,
    /// Lower bound on the radius for very small or distant faces.
    pub min_radius_px: i32,
    /// Under-eye discs are tighter to avoid catching cheek or lash pixels.
    pub under_eye_scale: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            radius_fraction: 0.08,
            min_radius_px: 4,
            under_eye_scale: 0.75,
        }
    }
}

impl SamplerConfig {
    /// Per-tick disc radius in pixels for the given face and frame.
    pub fn radius_px(&self, face: &FaceLandmarks, frame: &RgbFrame) -> i32 {
        let span = face.eye_span(frame.width(), frame.height());
        ((span * self.radius_fraction).round() as i32).max(self.min_radius_px)
    }
}

/// The fixed set of sampled regions the skin classifier consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionStatsSet {
    pub forehead: RegionStats,
    pub nose: RegionStats,
    pub left_cheek: RegionStats,
    pub right_cheek: RegionStats,
    pub chin: RegionStats,
    pub under_left_eye: RegionStats,
    pub under_right_eye: RegionStats,
}

impl RegionStatsSet {
    pub fn cheeks_mean(&self) -> f32 {
        (self.left_cheek.mean_brightness + self.right_cheek.mean_brightness) / 2.0
    }

    pub fn under_eyes_mean(&self) -> f32 {
        (self.under_left_eye.mean_brightness + self.under_right_eye.mean_brightness) / 2.0
    }
}

/// Sample the pixel statistics of a disc centered on one landmark.
///
/// The landmark's normalized position is rounded to an integer pixel center;
/// every pixel of the surrounding box within `radius_px` of the center
/// (`dx² + dy² ≤ r²`) contributes to per-channel means and the brightness
/// mean/standard deviation. Deterministic for identical inputs. Returns
/// [`RegionStats::ZERO`] when clipping leaves no qualifying pixels.
pub fn sample_disc(
    frame: &RgbFrame,
    face: &FaceLandmarks,
    landmark_idx: usize,
    radius_px: i32,
) -> RegionStats {
    let center = face.pixel(landmark_idx, frame.width(), frame.height());
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;
    let r2 = radius_px * radius_px;

    let x0 = (cx - radius_px).max(0);
    let x1 = (cx + radius_px).min(frame.width() as i32 - 1);
    let y0 = (cy - radius_px).max(0);
    let y1 = (cy + radius_px).min(frame.height() as i32 - 1);

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_br = 0.0f64;
    let mut sum_br2 = 0.0f64;
    let mut n = 0u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let Some(px) = frame.get(x, y) else {
                continue;
            };
            let br = px.brightness() as f64;
            sum_r += px.r as f64;
            sum_g += px.g as f64;
            sum_b += px.b as f64;
            sum_br += br;
            sum_br2 += br * br;
            n += 1;
        }
    }

    if n == 0 {
        return RegionStats::ZERO;
    }

    let n = n as f64;
    let mean = sum_br / n;
    let variance = (sum_br2 / n - mean * mean).max(0.0);
    RegionStats {
        mean_r: (sum_r / n) as f32,
        mean_g: (sum_g / n) as f32,
        mean_b: (sum_b / n) as f32,
        mean_brightness: mean as f32,
        std_brightness: variance.sqrt() as f32,
    }
}

/// Sample the full region set for one frame. The disc radius is computed once
/// from the face scale; the under-eye discs use the configured tighter scale.
pub fn sample_regions(
    frame: &RgbFrame,
    face: &FaceLandmarks,
    config: &SamplerConfig,
) -> RegionStatsSet {
    let r = config.radius_px(face, frame);
    let under_r = ((r as f32 * config.under_eye_scale).round() as i32).max(1);

    RegionStatsSet {
        forehead: sample_disc(frame, face, FOREHEAD, r),
        nose: sample_disc(frame, face, NOSE_TIP, r),
        left_cheek: sample_disc(frame, face, LEFT_CHEEK, r),
        right_cheek: sample_disc(frame, face, RIGHT_CHEEK, r),
        chin: sample_disc(frame, face, CHIN, r),
        under_left_eye: sample_disc(frame, face, UNDER_LEFT_EYE, under_r),
        under_right_eye: sample_disc(frame, face, UNDER_RIGHT_EYE, under_r),
    }
}
