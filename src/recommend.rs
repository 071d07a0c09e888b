//! Deterministic recommendation lookup for a skin profile.

use crate::classify::{SkinProfile, SkinType};

/// Map a skin profile to an ordered list of advisory strings.
///
/// The base block for the skin type comes first, followed by the conditional
/// lines for redness, dark circles, and texture, in that fixed order. Output
/// depends only on the profile.
pub fn recommendations(profile: &SkinProfile) -> Vec<&'static str> {
    let mut recs: Vec<&'static str> = match profile.skin_type {
        SkinType::Oily => vec![
            "Use a gentle foaming cleanser and a non-comedogenic, oil-free moisturizer.",
            "Introduce 2% salicylic acid or niacinamide (4-10%) to control sebum.",
            "Prefer mineral or gel sunscreen labeled 'oil-free' (SPF 30+).",
        ],
        SkinType::Dry => vec![
            "Use a low-pH hydrating cleanser; avoid harsh scrubs.",
            "Moisturize with ceramides and hyaluronic acid; consider occlusives at night.",
            "Apply broad-spectrum SPF 30+ daily to prevent further barrier stress.",
        ],
        SkinType::Combination => vec![
            "Use a balancing routine: gel textures on the T-zone, richer cream on cheeks.",
            "Spot-treat the T-zone with niacinamide or salicylic acid 2-3x/week.",
            "Choose a lightweight, non-comedogenic sunscreen.",
        ],
        SkinType::Normal => vec![
            "Maintain a consistent routine: gentle cleanse, moisturize, and daily SPF 30+.",
        ],
    };

    if profile.has_redness {
        recs.push(
            "Cheek redness detected: consider azelaic acid (10%) or niacinamide; \
             avoid alcohol-heavy products.",
        );
    }
    if profile.has_dark_circles {
        recs.push(
            "Under-eye darkness noted: prioritize sleep/hydration; consider caffeine \
             or vitamin K eye formulations.",
        );
    }
    if profile.coarse_texture {
        recs.push(
            "Uneven texture observed: gentle chemical exfoliation (lactic acid 5-10% \
             weekly) may help.",
        );
    }

    recs
}
