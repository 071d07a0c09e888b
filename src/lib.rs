//! # glowcam
//!
//! Virtual makeup try-on and skin analysis from facial landmarks.
//!
//! This crate is the decision core behind a live "smart mirror": an external
//! tracker (e.g. MediaPipe FaceMesh/Hands) delivers normalized landmark sets
//! once per frame, and glowcam turns them into:
//!
//! - **Overlay pipeline**: a debounced gesture state machine (point at lips,
//!   cheeks, or eyes to enable an overlay; open palm to reset; fist to cycle
//!   lipstick colors) plus an alpha-compositing renderer that paints the
//!   enabled cosmetic regions onto the camera frame.
//! - **Skin pipeline**: disc sampling of seven face regions, a threshold
//!   classifier for skin type, redness, dark circles, and texture, and a
//!   deterministic recommendation table, emitted as a structured report.
//!
//! Camera access, the landmark models themselves, and presentation are all
//! external; the core is single-threaded, frame-driven, and carries no state
//! between ticks beyond the overlay toggles and the gesture cooldown.
//!
//! ## Quick Start
//!
//! ```rust
//! use glowcam::{FaceLandmarks, Point, Rgb, RgbFrame, Session, MIN_FACE_LANDMARKS};
//!
//! // Synthetic inputs standing in for the camera and tracker.
//! let mut frame = RgbFrame::filled(640, 480, Rgb::gray(180));
//! let face = FaceLandmarks::new(vec![Point::new(0.5, 0.5); MIN_FACE_LANDMARKS]).unwrap();
//!
//! let mut session = Session::new();
//! let output = session.tick(0, &mut frame, Some(&face), None);
//!
//! let report = output.report.expect("face was present");
//! println!("{}: {} recommendation(s)", report.skin_type, report.recommendations.len());
//! ```
//!
//! Time is injected as a millisecond timestamp, so gesture debouncing is
//! fully testable without wall-clock waits.

pub mod classify;
mod error;
pub mod frame;
pub mod gesture;
pub mod overlay;
pub mod recommend;
pub mod report;
pub mod sampler;
pub mod session;
pub mod types;

pub use classify::{classify, ClassifierConfig, SkinProfile, SkinType};
pub use error::{Error, Result};
pub use frame::{Paint, Rgb, RgbFrame};
pub use gesture::{Feedback, GestureConfig, OverlayState, SessionState};
pub use recommend::recommendations;
pub use report::{Observations, RegionMeans, SkinReport};
pub use sampler::{sample_disc, sample_regions, RegionStats, RegionStatsSet, SamplerConfig};
pub use session::{Session, TickOutput};
pub use types::{FaceLandmarks, HandLandmarks, Point, HAND_LANDMARK_COUNT, MIN_FACE_LANDMARKS};
