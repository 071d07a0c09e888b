//! Threshold-based skin classification over sampled region statistics.

use serde::{Deserialize, Serialize};

use crate::sampler::RegionStatsSet;

/// Overall skin type. Exactly one applies per classification; the checks are
/// evaluated in declaration order with first match winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinType {
    Normal,
    Oily,
    Dry,
    #[serde(rename = "Combination (T-zone oily)")]
    Combination,
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinType::Normal => write!(f, "Normal"),
            SkinType::Oily => write!(f, "Oily"),
            SkinType::Dry => write!(f, "Dry"),
            SkinType::Combination => write!(f, "Combination (T-zone oily)"),
        }
    }
}

/// A per-tick skin profile derived from the current region statistics.
/// Never persisted; recomputed from each frame's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinProfile {
    pub skin_type: SkinType,
    /// Red dominance on the cheeks: mean red minus the mean of green and blue.
    pub redness_score: f32,
    pub has_redness: bool,
    pub has_dark_circles: bool,
    pub coarse_texture: bool,
}

/// Classification thresholds on the 0-255 brightness scale.
///
/// The defaults are empirically chosen constants carried over from field
/// tuning; they have no derivation and are exposed here as tunables rather
/// than baked into the rules.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// All four T-zone/cheek regions brighter than this reads as oily sheen.
    pub oily_brightness: f32,
    /// All four regions darker than this reads as dry, matte skin.
    pub dry_brightness: f32,
    /// Forehead and nose must exceed the cheeks by this much for a
    /// combination (oily T-zone) call.
    pub tzone_delta: f32,
    /// Redness score above this flags notable cheek redness.
    pub redness_score: f32,
    /// Cheek-to-under-eye brightness gap above this flags dark circles.
    pub dark_circle_delta: f32,
    /// Averaged brightness standard deviation above this flags coarse texture.
    pub texture_std: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            oily_brightness: 165.0,
            dry_brightness: 105.0,
            tzone_delta: 18.0,
            redness_score: 14.0,
            dark_circle_delta: 22.0,
            texture_std: 22.0,
        }
    }
}

/// Derive a [`SkinProfile`] from one tick's region statistics.
///
/// Skin type checks run in order Oily, Dry, Combination, falling through to
/// Normal; the redness, dark-circle, and texture observations are independent
/// flags layered on top. All comparisons are strict, so a value exactly at a
/// threshold does not trigger it.
pub fn classify(stats: &RegionStatsSet, config: &ClassifierConfig) -> SkinProfile {
    let cheeks = stats.cheeks_mean();
    let under_eyes = stats.under_eyes_mean();
    let zones = [
        stats.forehead.mean_brightness,
        stats.nose.mean_brightness,
        cheeks,
        stats.chin.mean_brightness,
    ];

    let skin_type = if zones.iter().all(|&v| v > config.oily_brightness) {
        SkinType::Oily
    } else if zones.iter().all(|&v| v < config.dry_brightness) {
        SkinType::Dry
    } else if stats.forehead.mean_brightness > cheeks + config.tzone_delta
        && stats.nose.mean_brightness > cheeks + config.tzone_delta
    {
        SkinType::Combination
    } else {
        SkinType::Normal
    };

    let cheek_r = (stats.left_cheek.mean_r + stats.right_cheek.mean_r) / 2.0;
    let cheek_g = (stats.left_cheek.mean_g + stats.right_cheek.mean_g) / 2.0;
    let cheek_b = (stats.left_cheek.mean_b + stats.right_cheek.mean_b) / 2.0;
    let redness_score = cheek_r - (cheek_g + cheek_b) / 2.0;

    let cheek_std =
        (stats.left_cheek.std_brightness + stats.right_cheek.std_brightness) / 2.0;
    let texture = (cheek_std + stats.forehead.std_brightness) / 2.0;

    SkinProfile {
        skin_type,
        redness_score,
        has_redness: redness_score > config.redness_score,
        has_dark_circles: cheeks - under_eyes > config.dark_circle_delta,
        coarse_texture: texture > config.texture_std,
    }
}
