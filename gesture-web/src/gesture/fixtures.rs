//! Synthetic hands shared by the gesture and tracking tests

use super::skeleton::{HandSkeleton, Landmark, LANDMARK_COUNT};

fn build(points: [(f32, f32, f32); LANDMARK_COUNT]) -> HandSkeleton {
    let landmarks = points.map(|(x, y, z)| Landmark::new(x, y, z));
    HandSkeleton::new(landmarks).unwrap()
}

/// Upright right hand, fingers spread, palm flat towards the camera.
/// Wrist sits 0.05 behind the knuckles; tips share the knuckles' depth.
pub fn open_palm() -> HandSkeleton {
    build([
        (0.50, 0.80, 0.05),
        // thumb
        (0.42, 0.75, 0.0), (0.37, 0.70, 0.0), (0.33, 0.65, 0.0), (0.30, 0.60, 0.0),
        // index
        (0.44, 0.60, 0.0), (0.43, 0.50, 0.0), (0.425, 0.44, 0.0), (0.42, 0.38, 0.0),
        // middle
        (0.50, 0.58, 0.0), (0.50, 0.47, 0.0), (0.50, 0.40, 0.0), (0.50, 0.33, 0.0),
        // ring
        (0.56, 0.60, 0.0), (0.57, 0.50, 0.0), (0.575, 0.44, 0.0), (0.58, 0.39, 0.0),
        // pinky
        (0.61, 0.64, 0.0), (0.63, 0.56, 0.0), (0.64, 0.51, 0.0), (0.65, 0.46, 0.0),
    ])
}

/// Closed fist: every tip curled back inside its middle joint's reach
pub fn fist() -> HandSkeleton {
    build([
        (0.50, 0.80, 0.0),
        (0.45, 0.76, 0.0), (0.42, 0.70, 0.0), (0.45, 0.66, 0.0), (0.48, 0.66, 0.0),
        (0.44, 0.60, 0.0), (0.44, 0.54, 0.0), (0.45, 0.58, 0.0), (0.46, 0.64, 0.0),
        (0.50, 0.58, 0.0), (0.50, 0.52, 0.0), (0.50, 0.57, 0.0), (0.50, 0.63, 0.0),
        (0.56, 0.60, 0.0), (0.56, 0.54, 0.0), (0.55, 0.58, 0.0), (0.54, 0.64, 0.0),
        (0.61, 0.64, 0.0), (0.61, 0.59, 0.0), (0.60, 0.62, 0.0), (0.59, 0.67, 0.0),
    ])
}

/// Open palm with index and middle extended, ring and pinky curled
pub fn peace_sign() -> HandSkeleton {
    let open = open_palm();
    let curled = fist();
    let mut landmarks = *open.landmarks();
    landmarks[13..21].copy_from_slice(&curled.landmarks()[13..21]);
    HandSkeleton::new(landmarks).unwrap()
}
