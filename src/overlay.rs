//! Cosmetic overlay compositing onto the camera frame.
//!
//! Render order is lips, then blush, then eyeshadow; each fill alpha-over
//! composites against whatever was drawn before it in the same tick.

use crate::frame::{Paint, RgbFrame};
use crate::gesture::OverlayState;
use crate::types::{FaceLandmarks, Point, LEFT_CHEEK, LEFT_EYELID, LIP_CONTOUR, RIGHT_CHEEK, RIGHT_EYELID};

/// Lipstick palette cycled by the fist gesture: soft red, peach nude,
/// dusty rose.
pub const LIPSTICK_PALETTE: [Paint; 3] = [
    Paint::new(180, 76, 67, 0.55),
    Paint::new(225, 170, 150, 0.55),
    Paint::new(190, 115, 120, 0.55),
];

pub const BLUSH_COLOR: Paint = Paint::new(255, 105, 180, 0.25);
pub const EYESHADOW_COLOR: Paint = Paint::new(150, 100, 200, 0.40);

/// Blush disc radii in pixels at the reference capture width.
const BLUSH_INNER_RADIUS: f32 = 6.0;
const BLUSH_OUTER_RADIUS: f32 = 46.0;
const REFERENCE_WIDTH: f32 = 640.0;

/// Composite the enabled cosmetic regions onto the frame in place.
///
/// Pure function of its inputs: with no flags set the frame is untouched, so
/// clearing the overlay state restores the plain camera image on the next
/// tick.
pub fn render(frame: &mut RgbFrame, face: &FaceLandmarks, state: &OverlayState) {
    if state.lipstick {
        let color = LIPSTICK_PALETTE[state.color_index % LIPSTICK_PALETTE.len()];
        fill_polygon(frame, &contour_pixels(face, &LIP_CONTOUR, frame), color);
    }

    if state.blush {
        let scale = frame.width() as f32 / REFERENCE_WIDTH;
        for &idx in &[LEFT_CHEEK, RIGHT_CHEEK] {
            let center = face.pixel(idx, frame.width(), frame.height());
            gradient_disc(
                frame,
                center,
                BLUSH_INNER_RADIUS * scale,
                BLUSH_OUTER_RADIUS * scale,
                BLUSH_COLOR,
            );
        }
    }

    if state.eyeshadow {
        for indices in [&LEFT_EYELID[..], &RIGHT_EYELID[..]] {
            fill_polygon(frame, &contour_pixels(face, indices, frame), EYESHADOW_COLOR);
        }
    }
}

fn contour_pixels(face: &FaceLandmarks, indices: &[usize], frame: &RgbFrame) -> Vec<Point> {
    indices
        .iter()
        .map(|&i| face.pixel(i, frame.width(), frame.height()))
        .collect()
}

/// Scanline fill of a closed polygon with even-odd intersection pairing,
/// blending the paint over each covered pixel.
fn fill_polygon(frame: &mut RgbFrame, points: &[Point], paint: Paint) {
    if points.len() < 3 {
        return;
    }

    let y_min = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
    let y_max = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
    let y_start = (y_min.floor() as i32).max(0);
    let y_end = (y_max.ceil() as i32).min(frame.height() as i32 - 1);

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for y in y_start..=y_end {
        // Sample at the pixel row center so vertices shared by two edges are
        // not double counted.
        let scan = y as f32 + 0.5;

        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            if (a.y <= scan && b.y > scan) || (b.y <= scan && a.y > scan) {
                let t = (scan - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let x_start = (pair[0].round() as i32).max(0);
            let x_end = (pair[1].round() as i32).min(frame.width() as i32 - 1);
            for x in x_start..=x_end {
                frame.blend(x, y, paint);
            }
        }
    }
}

/// Radial gradient disc: full paint alpha out to `inner`, fading linearly to
/// transparent at `outer`.
fn gradient_disc(frame: &mut RgbFrame, center: Point, inner: f32, outer: f32, paint: Paint) {
    let x_start = ((center.x - outer).floor() as i32).max(0);
    let x_end = ((center.x + outer).ceil() as i32).min(frame.width() as i32 - 1);
    let y_start = ((center.y - outer).floor() as i32).max(0);
    let y_end = ((center.y + outer).ceil() as i32).min(frame.height() as i32 - 1);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let d = Point::new(x as f32, y as f32).distance(&center);
            if d > outer {
                continue;
            }
            let alpha = if d <= inner {
                paint.alpha
            } else {
                paint.alpha * (1.0 - (d - inner) / (outer - inner))
            };
            frame.blend(x, y, paint.with_alpha(alpha));
        }
    }
}
