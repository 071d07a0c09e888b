//! Pointing-gesture recognition and the debounced session state machine.
//!
//! Gestures are evaluated in priority order with first match winning:
//! open-palm reset, then region pointing (lips, cheek, eye), then fist color
//! cycling. Every successful match arms a shared single-shot cooldown that
//! rejects further matches until it expires, so a held gesture fires once per
//! window instead of every tick.

use serde::{Deserialize, Serialize};

use crate::types::{
    FaceLandmarks, HandLandmarks, FINGER_PAIRS, INDEX_FINGERTIP, LEFT_CHEEK, LEFT_EYE_OUTER,
    LIP_CORNER,
};

/// Number of entries in the lipstick palette the color index wraps over.
pub const PALETTE_SIZE: usize = 3;

/// The cosmetic overlay toggles. Mutated only by gesture processing, read
/// only by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayState {
    pub lipstick: bool,
    pub blush: bool,
    pub eyeshadow: bool,
    /// Index into the lipstick palette, always in `0..PALETTE_SIZE`.
    pub color_index: usize,
}

impl OverlayState {
    pub fn any_enabled(&self) -> bool {
        self.lipstick || self.blush || self.eyeshadow
    }
}

/// The only state carried between ticks: the overlay toggles plus the
/// cooldown deadline. Passed in and out of [`process`] by value so tests can
/// replay sequences deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub overlay: OverlayState,
    /// Wall-clock deadline (ms) before which all gesture matches are rejected.
    pub cooldown_until_ms: u64,
}

/// Suffix appended to every feedback line so the reset gesture stays
/// discoverable while a confirmation is showing.
pub const RESET_HINT: &str = " • open palm to reset";

/// Transient confirmation text emitted when a gesture fires. The status layer
/// shows it until `expires_at_ms`, then reverts to the idle summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
    pub expires_at_ms: u64,
}

impl Feedback {
    pub fn active_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }
}

/// Gesture thresholds. The activation radii are pixel distances at the
/// reference capture width; at any other width they scale proportionally so
/// the hit area covers the same fraction of the frame.
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    pub lip_radius_px: f32,
    pub cheek_radius_px: f32,
    pub eye_radius_px: f32,
    /// Width the radii were tuned at.
    pub reference_width: f32,
    /// Shared single-shot lock window after any successful match.
    pub cooldown_ms: u64,
    /// How long feedback text stays on screen.
    pub feedback_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            lip_radius_px: 44.0,
            cheek_radius_px: 56.0,
            eye_radius_px: 52.0,
            reference_width: 640.0,
            cooldown_ms: 900,
            feedback_ms: 1200,
        }
    }
}

/// Evaluate one tick of hand input against the current session state.
///
/// Returns the unchanged state when the hand or face is absent or the
/// cooldown lock is still armed. At most one gesture fires per call; firing
/// re-arms the lock for the full cooldown window regardless of gesture type.
pub fn process(
    config: &GestureConfig,
    now_ms: u64,
    hand: Option<&HandLandmarks>,
    face: Option<&FaceLandmarks>,
    frame_width: u32,
    frame_height: u32,
    state: SessionState,
) -> (SessionState, Option<Feedback>) {
    if now_ms < state.cooldown_until_ms {
        return (state, None);
    }
    let (Some(hand), Some(face)) = (hand, face) else {
        return (state, None);
    };

    let fire = |mut next: SessionState, text: &str| {
        next.cooldown_until_ms = now_ms + config.cooldown_ms;
        let feedback = Feedback {
            text: format!("{text}{RESET_HINT}"),
            expires_at_ms: now_ms + config.feedback_ms,
        };
        (next, Some(feedback))
    };

    // Open palm: all four non-thumb fingertips above their knuckles.
    if is_palm_open(hand) {
        let mut next = state;
        next.overlay.lipstick = false;
        next.overlay.blush = false;
        next.overlay.eyeshadow = false;
        return fire(next, "Reset: cleared all makeup");
    }

    // Pointing: index fingertip near a facial reference point, checked in
    // fixed priority order so overlapping hit areas resolve to the lips.
    let tip = hand.pixel(INDEX_FINGERTIP, frame_width, frame_height);
    let scale = frame_width as f32 / config.reference_width;
    let dist_to = |idx: usize| tip.distance(&face.pixel(idx, frame_width, frame_height));

    if dist_to(LIP_CORNER) < config.lip_radius_px * scale {
        let mut next = state;
        next.overlay.lipstick = true;
        return fire(next, "Lipstick on (pointed to lips)");
    }
    if dist_to(LEFT_CHEEK) < config.cheek_radius_px * scale {
        let mut next = state;
        next.overlay.blush = true;
        return fire(next, "Blush on (pointed to cheek)");
    }
    if dist_to(LEFT_EYE_OUTER) < config.eye_radius_px * scale {
        let mut next = state;
        next.overlay.eyeshadow = true;
        return fire(next, "Eyeshadow on (pointed to eye)");
    }

    // Fist: index, middle, and ring fingertips curled below their knuckles.
    if is_fist(hand) {
        let mut next = state;
        next.overlay.color_index = (next.overlay.color_index + 1) % PALETTE_SIZE;
        next.cooldown_until_ms = now_ms + config.cooldown_ms;
        // Color feedback is only meaningful while lipstick is showing.
        let feedback = state.overlay.lipstick.then(|| Feedback {
            text: format!("Lipstick color changed{RESET_HINT}"),
            expires_at_ms: now_ms + config.feedback_ms,
        });
        return (next, feedback);
    }

    (state, None)
}

/// All four non-thumb fingers extended: each fingertip's normalized y is
/// above (smaller than) its proximal knuckle's y.
fn is_palm_open(hand: &HandLandmarks) -> bool {
    FINGER_PAIRS
        .iter()
        .all(|&(tip, knuckle)| hand.point(tip).y < hand.point(knuckle).y)
}

/// Index, middle, and ring fingers curled: fingertip below its knuckle. The
/// pinky is deliberately excluded so a loose fist still registers.
fn is_fist(hand: &HandLandmarks) -> bool {
    FINGER_PAIRS[..3]
        .iter()
        .all(|&(tip, knuckle)| hand.point(tip).y > hand.point(knuckle).y)
}

/// Idle status line summarizing which overlays are on.
pub fn status_text(overlay: &OverlayState) -> String {
    let mut on = Vec::new();
    if overlay.lipstick {
        on.push("Lipstick");
    }
    if overlay.blush {
        on.push("Blush");
    }
    if overlay.eyeshadow {
        on.push("Eyeshadow");
    }
    if on.is_empty() {
        "Point to lips, cheeks, or eyes; open palm resets".to_string()
    } else {
        format!("ON: {}", on.join(", "))
    }
}
