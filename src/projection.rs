use druid::kurbo::Point;

use crate::math::Vec3;

/// Projection scale, in pixels per unit of object space at the camera plane.
pub const FOCAL_LENGTH: f64 = 200.0;

/// Fixed camera offset along Z. The cube's z stays in [-1, 1], so the
/// perspective denominator stays in [4, 6] and never crosses zero.
pub const CAMERA_DISTANCE: f64 = 5.0;

/// Perspective-projects a point onto a `view_width` x `view_height` screen,
/// with +y in object space mapping upward on screen.
pub fn project(v: Vec3, view_width: f64, view_height: f64, focal_length: f64) -> Point {
    let depth = v.z + CAMERA_DISTANCE;
    debug_assert!(depth != 0.0, "point on the camera plane cannot be projected");
    Point::new(
        view_width / 2.0 + v.x * focal_length / depth,
        view_height / 2.0 - v.y * focal_length / depth,
    )
}
