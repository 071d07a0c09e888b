use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
///
/// Landmark points are normalized to [0,1] relative to the frame; pixel-space
/// points carry image coordinates. Which space a point is in depends on
/// context, as with MediaPipe's own output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Map a normalized [0,1] point to pixel coordinates.
    pub fn to_pixel(&self, width: u32, height: u32) -> Point {
        Point::new(self.x * width as f32, self.y * height as f32)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Minimum point count for a facial landmark set (MediaPipe FaceMesh).
/// The highest index the pipelines read is 466, inside the 468-point mesh.
pub const MIN_FACE_LANDMARKS: usize = 468;

/// Point count for a hand landmark set (MediaPipe Hands).
pub const HAND_LANDMARK_COUNT: usize = 21;

// Single-landmark reference indices on the face mesh.
pub const NOSE_TIP: usize = 1;
pub const FOREHEAD: usize = 10;
pub const LEFT_EYE_OUTER: usize = 33;
pub const RIGHT_EYE_OUTER: usize = 263;
pub const LIP_CORNER: usize = 61;
pub const UNDER_LEFT_EYE: usize = 145;
pub const CHIN: usize = 152;
pub const LEFT_CHEEK: usize = 234;
pub const UNDER_RIGHT_EYE: usize = 374;
pub const RIGHT_CHEEK: usize = 454;

/// Outer/inner lip contour, ordered for a closed polygon.
pub const LIP_CONTOUR: [usize; 20] = [
    61, 185, 40, 39, 37, 0, 267, 269, 270, 409, 291, 375, 321, 405, 314, 17, 84, 181, 91, 146,
];

/// Upper eyelid contours, ordered for closed polygons.
pub const LEFT_EYELID: [usize; 8] = [33, 246, 161, 160, 159, 158, 157, 173];
pub const RIGHT_EYELID: [usize; 8] = [362, 398, 384, 385, 386, 387, 388, 466];

/// Index fingertip on the hand mesh.
pub const INDEX_FINGERTIP: usize = 8;

/// (fingertip, proximal knuckle) pairs for the four non-thumb fingers:
/// index, middle, ring, pinky.
pub const FINGER_PAIRS: [(usize, usize); 4] = [(8, 6), (12, 10), (16, 14), (20, 18)];

/// An ordered facial landmark set in normalized [0,1] coordinates, as
/// delivered once per frame by an external face tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    points: Vec<Point>,
}

impl FaceLandmarks {
    /// Wrap a tracker's landmark list. Fails if the set is too short to
    /// contain every index the pipelines read.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < MIN_FACE_LANDMARKS {
            return Err(Error::FaceLandmarkCount {
                expected: MIN_FACE_LANDMARKS,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, idx: usize) -> Point {
        self.points[idx]
    }

    /// Landmark position in pixel coordinates.
    pub fn pixel(&self, idx: usize, width: u32, height: u32) -> Point {
        self.points[idx].to_pixel(width, height)
    }

    /// Face scale in pixels: the distance between the outer eye corners.
    /// Used to size sampling discs relative to the subject's distance from
    /// the camera.
    pub fn eye_span(&self, width: u32, height: u32) -> f32 {
        let a = self.pixel(LEFT_EYE_OUTER, width, height);
        let b = self.pixel(RIGHT_EYE_OUTER, width, height);
        a.distance(&b)
    }

    pub fn num_landmarks(&self) -> usize {
        self.points.len()
    }
}

/// An ordered hand landmark set (21 points) in normalized [0,1] coordinates,
/// for the single most confident hand detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    points: Vec<Point>,
}

impl HandLandmarks {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() != HAND_LANDMARK_COUNT {
            return Err(Error::HandLandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                got: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, idx: usize) -> Point {
        self.points[idx]
    }

    pub fn pixel(&self, idx: usize, width: u32, height: u32) -> Point {
        self.points[idx].to_pixel(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        assert!((a.distance(&b) - 8.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn normalized_to_pixel() {
        let p = Point::new(0.5, 0.25).to_pixel(640, 480);
        assert_eq!(p.x, 320.0);
        assert_eq!(p.y, 120.0);
    }

    #[test]
    fn face_landmarks_rejects_short_set() {
        let err = FaceLandmarks::new(vec![Point::zero(); 68]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::FaceLandmarkCount { expected: 468, got: 68 }
        ));
    }

    #[test]
    fn hand_landmarks_requires_exact_count() {
        assert!(HandLandmarks::new(vec![Point::zero(); 21]).is_ok());
        assert!(HandLandmarks::new(vec![Point::zero(); 20]).is_err());
        assert!(HandLandmarks::new(vec![Point::zero(); 22]).is_err());
    }

    #[test]
    fn eye_span_is_pixel_distance() {
        let mut points = vec![Point::new(0.5, 0.5); MIN_FACE_LANDMARKS];
        points[LEFT_EYE_OUTER] = Point::new(0.25, 0.5);
        points[RIGHT_EYE_OUTER] = Point::new(0.75, 0.5);
        let face = FaceLandmarks::new(points).unwrap();

        // Half the frame width apart horizontally.
        assert!((face.eye_span(640, 480) - 320.0).abs() < 1e-4);
    }
}
