use druid::Data;

/// Degrees added to both rotation angles every frame.
pub const ROTATION_SPEED: f64 = 0.05;

/// Per-frame rotation state. A new value is produced each frame rather than
/// mutating in place; the angles accumulate without wrapping, which the
/// trigonometry absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Data)]
pub struct Rotation {
    /// Current rotation angle around the X axis, in degrees
    pub angle_x: f64,
    /// Current rotation angle around the Y axis, in degrees
    pub angle_y: f64,
}

impl Rotation {
    pub fn advanced(self) -> Rotation {
        Rotation {
            angle_x: self.angle_x + ROTATION_SPEED,
            angle_y: self.angle_y + ROTATION_SPEED,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation {
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }
}
