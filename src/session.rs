//! Per-tick driver tying the gesture/overlay and skin pipelines together.
//!
//! An external capture loop calls [`Session::tick`] once per frame with the
//! current raster and whatever landmark sets the tracker produced. Nothing
//! here blocks or schedules: time is an injected `now_ms`, and the cooldown
//! is a stored deadline checked at tick entry.

use crate::classify::{classify, ClassifierConfig};
use crate::frame::RgbFrame;
use crate::gesture::{self, Feedback, GestureConfig, SessionState};
use crate::overlay;
use crate::recommend::recommendations;
use crate::report::SkinReport;
use crate::sampler::{sample_regions, SamplerConfig};
use crate::types::{FaceLandmarks, HandLandmarks};

/// Status line shown while no face is in frame.
pub const NO_FACE_STATUS: &str = "Face not detected. Please face the camera in good light.";

/// Everything one tick produces besides the mutated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Transient feedback while one is active, otherwise the idle summary
    /// (or the no-face message).
    pub status: String,
    /// Feedback freshly emitted by this tick's gesture, if any.
    pub feedback: Option<Feedback>,
    /// New skin report when a face was analyzed this tick.
    pub report: Option<SkinReport>,
}

/// A live session: configuration plus the only cross-tick state (overlay
/// flags, color index, cooldown deadline, and the last feedback shown).
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub gesture: GestureConfig,
    pub sampler: SamplerConfig,
    pub classifier: ClassifierConfig,
    state: SessionState,
    last_feedback: Option<Feedback>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run both pipelines for one frame.
    ///
    /// Gesture evaluation runs first and may toggle overlay flags; the skin
    /// pipeline then samples the untouched camera pixels before the overlay
    /// is composited on top. Absent inputs degrade to no-ops: no face means
    /// no report, no overlay, and a "not detected" status; no hand just
    /// skips gesture evaluation.
    pub fn tick(
        &mut self,
        now_ms: u64,
        frame: &mut RgbFrame,
        face: Option<&FaceLandmarks>,
        hand: Option<&HandLandmarks>,
    ) -> TickOutput {
        let (next, feedback) = gesture::process(
            &self.gesture,
            now_ms,
            hand,
            face,
            frame.width(),
            frame.height(),
            self.state,
        );
        self.state = next;
        if let Some(fb) = &feedback {
            self.last_feedback = Some(fb.clone());
        }

        let report = face.map(|face| {
            // Sample raw camera pixels before painting over them.
            let stats = sample_regions(frame, face, &self.sampler);
            let profile = classify(&stats, &self.classifier);
            let recs = recommendations(&profile);

            overlay::render(frame, face, &self.state.overlay);

            SkinReport::new(&stats, &profile, recs)
        });

        let status = if face.is_none() {
            NO_FACE_STATUS.to_string()
        } else {
            match &self.last_feedback {
                Some(fb) if fb.active_at(now_ms) => fb.text.clone(),
                _ => gesture::status_text(&self.state.overlay),
            }
        };

        TickOutput {
            status,
            feedback,
            report,
        }
    }
}
