/// Truncated pi used for the degree-to-radian conversion. Full-precision
/// `std::f64::consts::PI` differs from this by about 0.05%, which shows up
/// only as a slightly slower spin; the truncated value is kept so the motion
/// matches the classic demo frame for frame.
pub const PI_APPROX: f64 = 3.14;

/// A point in object space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI_APPROX / 180.0
}

/// Rotates a point about the X axis; the x coordinate is unchanged.
pub fn rotate_x(v: Vec3, degrees: f64) -> Vec3 {
    let (sin_a, cos_a) = to_radians(degrees).sin_cos();
    Vec3 {
        x: v.x,
        y: v.y * cos_a - v.z * sin_a,
        z: v.y * sin_a + v.z * cos_a,
    }
}

/// Rotates a point about the Y axis; the y coordinate is unchanged.
pub fn rotate_y(v: Vec3, degrees: f64) -> Vec3 {
    let (sin_a, cos_a) = to_radians(degrees).sin_cos();
    Vec3 {
        x: v.x * cos_a + v.z * sin_a,
        y: v.y,
        z: -v.x * sin_a + v.z * cos_a,
    }
}
