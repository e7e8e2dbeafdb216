//! Mapping helpers for placing overlays and driving sliders

use super::skeleton::Point2;

/// Scale a normalized point to pixel coordinates
pub fn normalize_to_screen(point: Point2, width: f32, height: f32) -> Point2 {
    Point2::new(point.x * width, point.y * height)
}

/// Map a signed angle (degrees) linearly onto `[min, max]`.
///
/// -180° maps to `min`, 0° to the midpoint, and the range wraps every 360°:
/// +180° lands back on `min`, while angles just below it approach `max`.
/// The result stays in `[min, max)`.
pub fn rotation_to_slider_value(angle: f32, min: f32, max: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to the modulus itself
    let t = if wrapped >= 360.0 { 0.0 } else { wrapped / 360.0 };
    min + t * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_to_screen_center() {
        let p = normalize_to_screen(Point2::new(0.5, 0.5), 1280.0, 720.0);
        assert_eq!(p, Point2::new(640.0, 360.0));
    }

    #[test]
    fn test_slider_landmarks() {
        assert_eq!(rotation_to_slider_value(0.0, 0.0, 100.0), 50.0);
        assert_eq!(rotation_to_slider_value(-90.0, 0.0, 100.0), 25.0);
        assert_eq!(rotation_to_slider_value(90.0, 0.0, 100.0), 75.0);
        assert_eq!(rotation_to_slider_value(0.0, -1.0, 1.0), 0.0);
    }

    #[test]
    fn test_slider_discontinuity_at_180() {
        assert_eq!(rotation_to_slider_value(-180.0, 0.0, 100.0), 0.0);
        assert_eq!(rotation_to_slider_value(180.0, 0.0, 100.0), 0.0);

        let just_below = rotation_to_slider_value(179.0, 0.0, 100.0);
        assert!(just_below > 99.0 && just_below < 100.0);
    }

    #[test]
    fn test_slider_periodic() {
        for angle in [-725.0f32, -270.0, -181.0, -45.5, 0.0, 33.0, 179.5, 200.0, 540.0] {
            let a = rotation_to_slider_value(angle, 0.0, 100.0);
            let b = rotation_to_slider_value(angle + 360.0, 0.0, 100.0);
            assert!((a - b).abs() < 1e-3, "{} vs {} at {}", a, b, angle);
            assert!((0.0..100.0).contains(&a));
        }
    }

    #[test]
    fn test_slider_never_reaches_max() {
        let just_under = -180.0 - 1e-5f32;
        assert!((just_under + 180.0) < 0.0);
        let value = rotation_to_slider_value(just_under, 0.0, 100.0);
        assert!((0.0..100.0).contains(&value), "{}", value);

        assert!(rotation_to_slider_value(-1e-9 - 180.0, 0.0, 100.0) < 100.0);
    }
}
