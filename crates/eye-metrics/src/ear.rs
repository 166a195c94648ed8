//! Eye Aspect Ratio computation

use crate::landmarks::{EyeLandmarks, FaceLandmarks, FrameSize};

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Eye Aspect Ratio: vertical lid separation over horizontal eye width.
///
/// Landmarks are projected to pixel coordinates, then the two vertical
/// distances (upper-lid to lower-lid pairs) are divided by twice the
/// corner-to-corner width. Returns exactly 0.0 when the horizontal span is
/// degenerate, so the caller never sees a division by zero or an error.
pub fn eye_aspect_ratio(eye: &EyeLandmarks, frame: FrameSize) -> f32 {
    let vertical_1 = distance(
        eye.upper_outer().to_pixels(frame),
        eye.lower_outer().to_pixels(frame),
    );
    let vertical_2 = distance(
        eye.upper_inner().to_pixels(frame),
        eye.lower_inner().to_pixels(frame),
    );
    let horizontal = distance(
        eye.outer_corner().to_pixels(frame),
        eye.inner_corner().to_pixels(frame),
    );

    if horizontal == 0.0 {
        return 0.0;
    }

    (vertical_1 + vertical_2) / (2.0 * horizontal)
}

/// Per-frame openness signal: EAR of each eye, averaged.
pub fn average_openness(face: &FaceLandmarks, frame: FrameSize) -> f32 {
    let left = eye_aspect_ratio(&face.left_eye, frame);
    let right = eye_aspect_ratio(&face.right_eye, frame);
    (left + right) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::LandmarkPoint;
    use proptest::prelude::*;

    const FRAME: FrameSize = FrameSize {
        width: 640,
        height: 480,
    };

    /// Eye centered at (cx, cy) with the given normalized width and a lid
    /// separation that evaluates to `openness` exactly.
    fn synthetic_eye(cx: f32, cy: f32, width: f32, openness: f32) -> EyeLandmarks {
        let half_w = width / 2.0;
        // Vertical pairs share an x coordinate, so the pixel distance is
        // purely vertical: v_px = openness * h_px.
        let h_px = width * FRAME.width as f32;
        let v_norm = openness * h_px / FRAME.height as f32;
        let top = cy - v_norm / 2.0;
        let bottom = cy + v_norm / 2.0;
        EyeLandmarks::new([
            LandmarkPoint::new(cx - half_w, cy),
            LandmarkPoint::new(cx - half_w * 0.4, top),
            LandmarkPoint::new(cx + half_w * 0.4, top),
            LandmarkPoint::new(cx + half_w, cy),
            LandmarkPoint::new(cx + half_w * 0.4, bottom),
            LandmarkPoint::new(cx - half_w * 0.4, bottom),
        ])
    }

    #[test]
    fn test_open_eye_matches_target_openness() {
        let eye = synthetic_eye(0.35, 0.4, 0.1, 0.3);
        let ear = eye_aspect_ratio(&eye, FRAME);
        assert!((ear - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_closed_eye_has_zero_openness() {
        let eye = synthetic_eye(0.35, 0.4, 0.1, 0.0);
        assert_eq!(eye_aspect_ratio(&eye, FRAME), 0.0);
    }

    #[test]
    fn test_degenerate_horizontal_span_returns_zero() {
        // All six points collapsed onto a single spot.
        let p = LandmarkPoint::new(0.5, 0.5);
        let eye = EyeLandmarks::new([p; 6]);
        assert_eq!(eye_aspect_ratio(&eye, FRAME), 0.0);
    }

    #[test]
    fn test_average_of_both_eyes() {
        let face = FaceLandmarks {
            left_eye: synthetic_eye(0.35, 0.4, 0.1, 0.2),
            right_eye: synthetic_eye(0.65, 0.4, 0.1, 0.4),
        };
        let avg = average_openness(&face, FRAME);
        assert!((avg - 0.3).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn openness_is_finite_and_non_negative(
            coords in proptest::array::uniform12(0.0f32..=1.0f32)
        ) {
            let points: [LandmarkPoint; 6] = std::array::from_fn(|i| {
                LandmarkPoint::new(coords[2 * i], coords[2 * i + 1])
            });
            let eye = EyeLandmarks::new(points);
            let ear = eye_aspect_ratio(&eye, FRAME);
            prop_assert!(ear.is_finite());
            prop_assert!(ear >= 0.0);
        }
    }
}
