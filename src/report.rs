//! The structured skin analysis report produced each tick a face is seen.

use serde::Serialize;

use crate::classify::{SkinProfile, SkinType};
use crate::sampler::RegionStatsSet;

/// Mean brightness per sampled region, as shown in the report table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionMeans {
    pub forehead: f32,
    pub nose: f32,
    pub left_cheek: f32,
    pub right_cheek: f32,
    pub chin: f32,
    pub under_eyes_avg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observations {
    pub redness: bool,
    pub dark_circles: bool,
    pub texture_uneven: bool,
}

/// One tick's analysis result. Replaces the previous report whenever a face
/// is detected; never updated from stale landmarks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkinReport {
    pub skin_type: SkinType,
    pub region_means: RegionMeans,
    pub observations: Observations,
    pub recommendations: Vec<&'static str>,
}

impl SkinReport {
    pub fn new(
        stats: &RegionStatsSet,
        profile: &SkinProfile,
        recommendations: Vec<&'static str>,
    ) -> Self {
        Self {
            skin_type: profile.skin_type,
            region_means: RegionMeans {
                forehead: stats.forehead.mean_brightness,
                nose: stats.nose.mean_brightness,
                left_cheek: stats.left_cheek.mean_brightness,
                right_cheek: stats.right_cheek.mean_brightness,
                chin: stats.chin.mean_brightness,
                under_eyes_avg: stats.under_eyes_mean(),
            },
            observations: Observations {
                redness: profile.has_redness,
                dark_circles: profile.has_dark_circles,
                texture_uneven: profile.coarse_texture,
            },
            recommendations,
        }
    }
}

impl std::fmt::Display for SkinReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Skin Analysis Report")?;
        writeln!(f, "Overall skin type: {}", self.skin_type)?;
        writeln!(f)?;
        writeln!(f, "Region             Mean brightness")?;
        let m = &self.region_means;
        writeln!(f, "Forehead           {:.1}", m.forehead)?;
        writeln!(f, "Nose               {:.1}", m.nose)?;
        writeln!(f, "Left cheek         {:.1}", m.left_cheek)?;
        writeln!(f, "Right cheek        {:.1}", m.right_cheek)?;
        writeln!(f, "Chin               {:.1}", m.chin)?;
        writeln!(f, "Under-eyes (avg)   {:.1}", m.under_eyes_avg)?;
        writeln!(f)?;
        writeln!(f, "Observations")?;
        let o = &self.observations;
        writeln!(
            f,
            "- {}",
            if o.redness {
                "Cheek redness present."
            } else {
                "No marked cheek redness."
            }
        )?;
        writeln!(
            f,
            "- {}",
            if o.dark_circles {
                "Under-eye shadows observed."
            } else {
                "No significant under-eye darkness."
            }
        )?;
        writeln!(
            f,
            "- {}",
            if o.texture_uneven {
                "Texture appears slightly uneven."
            } else {
                "Texture appears even."
            }
        )?;
        writeln!(f)?;
        writeln!(f, "Recommendations")?;
        for rec in &self.recommendations {
            writeln!(f, "- {rec}")?;
        }
        Ok(())
    }
}
