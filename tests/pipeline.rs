//! End-to-end ticks through both pipelines with synthetic camera frames and
//! landmark sets: skin analysis on a staged "studio" frame, then a gesture
//! session driving the overlay flags through their full lifecycle.

use glowcam::types::{
    INDEX_FINGERTIP, LEFT_CHEEK, LEFT_EYE_OUTER, LIP_CONTOUR, RIGHT_EYE_OUTER, UNDER_LEFT_EYE,
    UNDER_RIGHT_EYE,
};
use glowcam::{
    FaceLandmarks, HandLandmarks, Point, Rgb, RgbFrame, Session, SkinType,
    HAND_LANDMARK_COUNT, MIN_FACE_LANDMARKS,
};

const W: u32 = 640;
const H: u32 = 480;

/// A staged portrait: shiny forehead and nose, shadowed under-eyes, warm
/// (red-dominant) base skin everywhere else.
fn studio_frame() -> RgbFrame {
    RgbFrame::from_fn(W, H, |x, y| {
        let dist = |cx: i32, cy: i32| {
            let dx = x as i32 - cx;
            let dy = y as i32 - cy;
            ((dx * dx + dy * dy) as f32).sqrt()
        };
        if dist(320, 96) < 30.0 || dist(320, 240) < 30.0 {
            Rgb::new(200, 190, 180) // T-zone sheen
        } else if dist(224, 216) < 25.0 || dist(416, 216) < 25.0 {
            Rgb::new(90, 80, 70) // under-eye shadow
        } else {
            Rgb::new(150, 120, 110) // base skin
        }
    })
}

/// Landmarks matching the staged frame, with the lip contour laid out as a
/// small ring so the compositor has a real polygon to fill.
fn studio_face() -> FaceLandmarks {
    let mut points = vec![Point::new(0.5, 0.5); MIN_FACE_LANDMARKS];

    points[10] = Point::new(0.5, 0.2); // forehead
    points[1] = Point::new(0.5, 0.5); // nose tip
    points[LEFT_CHEEK] = Point::new(0.3, 0.55);
    points[454] = Point::new(0.7, 0.55); // right cheek
    points[152] = Point::new(0.5, 0.85); // chin
    points[UNDER_LEFT_EYE] = Point::new(0.35, 0.45);
    points[UNDER_RIGHT_EYE] = Point::new(0.65, 0.45);
    points[LEFT_EYE_OUTER] = Point::new(0.35, 0.4);
    points[RIGHT_EYE_OUTER] = Point::new(0.65, 0.4);

    for (k, &idx) in LIP_CONTOUR.iter().enumerate() {
        let angle = k as f32 / LIP_CONTOUR.len() as f32 * std::f32::consts::TAU;
        points[idx] = Point::new(0.5 + 0.05 * angle.cos(), 0.72 + 0.04 * angle.sin());
    }

    FaceLandmarks::new(points).unwrap()
}

fn neutral_hand_with_tip(tip: Point) -> HandLandmarks {
    let mut points = vec![Point::new(0.5, 0.5); HAND_LANDMARK_COUNT];
    points[INDEX_FINGERTIP] = tip;
    HandLandmarks::new(points).unwrap()
}

fn open_palm() -> HandLandmarks {
    let mut points = vec![Point::new(0.5, 0.5); HAND_LANDMARK_COUNT];
    for idx in [8, 12, 16, 20] {
        points[idx] = Point::new(0.5, 0.3);
    }
    HandLandmarks::new(points).unwrap()
}

fn fist() -> HandLandmarks {
    let mut points = vec![Point::new(0.5, 0.5); HAND_LANDMARK_COUNT];
    for idx in [8, 12, 16] {
        points[idx] = Point::new(0.9, 0.9);
    }
    HandLandmarks::new(points).unwrap()
}

#[test]
fn skin_pipeline_classifies_the_staged_portrait() {
    let mut session = Session::new();
    let face = studio_face();
    let mut frame = studio_frame();

    let out = session.tick(0, &mut frame, Some(&face), None);
    let report = out.report.expect("face present");

    // Bright T-zone over warm cheeks reads as combination skin.
    assert_eq!(report.skin_type, SkinType::Combination);
    assert!((report.region_means.forehead - 190.0).abs() < 0.5);
    assert!((report.region_means.nose - 190.0).abs() < 0.5);
    assert!((report.region_means.left_cheek - 126.67).abs() < 0.5);
    assert!((report.region_means.under_eyes_avg - 80.0).abs() < 0.5);

    // Red-dominant base skin and shadowed under-eyes, but even texture.
    assert!(report.observations.redness);
    assert!(report.observations.dark_circles);
    assert!(!report.observations.texture_uneven);

    // Combination base block plus the two observation lines.
    assert_eq!(report.recommendations.len(), 5);

    // Idle status: nothing toggled yet.
    assert!(out.status.starts_with("Point to"));
}

#[test]
fn gesture_session_lifecycle() {
    let mut session = Session::new();
    let face = studio_face();
    let pristine = studio_frame();

    // t=0: point at the lip corner (contour index 61 sits at angle zero of
    // the ring, x = 0.55). Lipstick turns on and paints the lips.
    let mut frame = pristine.clone();
    let hand = neutral_hand_with_tip(Point::new(0.55, 0.72));
    let out = session.tick(0, &mut frame, Some(&face), Some(&hand));
    assert!(session.state().overlay.lipstick);
    assert_eq!(out.status, "Lipstick on (pointed to lips) • open palm to reset");
    assert_ne!(frame, pristine);
    // Lip ring center (0.5, 0.72) -> (320, 345) is tinted.
    assert_ne!(frame.get(320, 345), pristine.get(320, 345));

    // t=500: a fist inside the cooldown window is ignored.
    let mut frame = pristine.clone();
    let out = session.tick(500, &mut frame, Some(&face), Some(&fist()));
    assert_eq!(session.state().overlay.color_index, 0);
    assert!(out.feedback.is_none());

    // t=1500: cooldown expired, fist cycles the palette with feedback
    // because lipstick is showing.
    let mut frame = pristine.clone();
    let out = session.tick(1500, &mut frame, Some(&face), Some(&fist()));
    assert_eq!(session.state().overlay.color_index, 1);
    assert_eq!(out.status, "Lipstick color changed • open palm to reset");

    // Two more fists wrap the 3-entry palette back to the start.
    let mut frame = pristine.clone();
    session.tick(3000, &mut frame, Some(&face), Some(&fist()));
    let mut frame = pristine.clone();
    session.tick(4500, &mut frame, Some(&face), Some(&fist()));
    assert_eq!(session.state().overlay.color_index, 0);

    // t=6000: open palm clears every overlay.
    let mut frame = pristine.clone();
    let out = session.tick(6000, &mut frame, Some(&face), Some(&open_palm()));
    assert!(!session.state().overlay.any_enabled());
    assert_eq!(out.status, "Reset: cleared all makeup • open palm to reset");

    // t=8000: nothing enabled and feedback expired, so a fresh camera frame
    // passes through untouched and the idle hint returns.
    let mut frame = pristine.clone();
    let out = session.tick(8000, &mut frame, Some(&face), None);
    assert_eq!(frame, pristine);
    assert!(out.status.starts_with("Point to"));
}

#[test]
fn hand_without_face_never_toggles_overlays() {
    let mut session = Session::new();
    let mut frame = studio_frame();

    for (tick, hand) in [(0u64, open_palm()), (1000, fist())] {
        let out = session.tick(tick, &mut frame, None, Some(&hand));
        assert!(out.report.is_none());
        assert!(out.feedback.is_none());
    }
    assert!(!session.state().overlay.any_enabled());
    assert_eq!(session.state().overlay.color_index, 0);
}
