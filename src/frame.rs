use druid::Color;

use crate::graphics::Canvas;
use crate::math::{rotate_x, rotate_y};
use crate::model::{CUBE_EDGES, CUBE_VERTICES};
use crate::projection::{project, FOCAL_LENGTH};
use crate::state::Rotation;

pub const BACKGROUND: Color = Color::BLACK;
pub const EDGE_COLOR: Color = Color::WHITE;

/// Renders one frame of the spinning cube onto `canvas`: clear, rotate every
/// vertex X-then-Y, project, draw the edges. Screen positions are recomputed
/// from scratch each call.
pub fn render_wireframe(rotation: &Rotation, canvas: &mut impl Canvas) {
    canvas.clear(BACKGROUND);

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let projected: Vec<_> = CUBE_VERTICES
        .iter()
        .map(|&v| {
            let rotated = rotate_y(rotate_x(v, rotation.angle_x), rotation.angle_y);
            project(rotated, width, height, FOCAL_LENGTH)
        })
        .collect();

    for &(start, end) in CUBE_EDGES.iter() {
        canvas.draw_line(projected[start], projected[end], EDGE_COLOR);
    }
}
