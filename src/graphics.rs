use druid::kurbo::Point;
use druid::Color;

/// The drawing capability the render core needs from a display surface:
/// a solid clear plus line segments. Keeping it behind a trait lets the
/// rotation/projection core run against an in-memory buffer in tests.
pub trait Canvas {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
}

/// Software RGBA8 frame buffer, one byte per channel.
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        PixelCanvas {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
        }
    }

    /// Raw RGBA bytes, row-major, for handing to the platform image APIs.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn put_pixel(&mut self, x: isize, y: isize, rgba: (u8, u8, u8, u8)) {
        if x >= 0 && x < self.width as isize && y >= 0 && y < self.height as isize {
            let offset = (y as usize * self.width + x as usize) * 4;
            self.pixels[offset] = rgba.0;
            self.pixels[offset + 1] = rgba.1;
            self.pixels[offset + 2] = rgba.2;
            self.pixels[offset + 3] = rgba.3;
        }
    }
}

impl Canvas for PixelCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: Color) {
        let (r, g, b, a) = color.as_rgba8();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
            pixel[3] = a;
        }
    }

    /// Bresenham line rasterization; pixels falling outside the buffer are
    /// dropped rather than clipped geometrically.
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let rgba = color.as_rgba8();
        let (mut x0, mut y0) = (from.x.round() as isize, from.y.round() as isize);
        let (x1, y1) = (to.x.round() as isize, to.y.round() as isize);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put_pixel(x0, y0, rgba);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_at(canvas: &PixelCanvas, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let offset = (y * canvas.width() + x) * 4;
        let p = canvas.pixels();
        (p[offset], p[offset + 1], p[offset + 2], p[offset + 3])
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = PixelCanvas::new(4, 3);
        canvas.clear(Color::BLACK);
        for pixel in canvas.pixels().chunks_exact(4) {
            assert_eq!(pixel, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn horizontal_line_sets_expected_pixels() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.clear(Color::BLACK);
        canvas.draw_line(Point::new(2.0, 5.0), Point::new(7.0, 5.0), Color::WHITE);
        for x in 2..=7 {
            assert_eq!(pixel_at(&canvas, x, 5), (255, 255, 255, 255));
        }
        assert_eq!(pixel_at(&canvas, 1, 5), (0, 0, 0, 255));
        assert_eq!(pixel_at(&canvas, 8, 5), (0, 0, 0, 255));
    }

    #[test]
    fn diagonal_line_touches_both_endpoints() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.draw_line(Point::new(0.0, 0.0), Point::new(9.0, 9.0), Color::WHITE);
        assert_eq!(pixel_at(&canvas, 0, 0), (255, 255, 255, 255));
        assert_eq!(pixel_at(&canvas, 9, 9), (255, 255, 255, 255));
    }

    #[test]
    fn off_buffer_segment_does_not_panic() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.draw_line(Point::new(-20.0, -3.0), Point::new(30.0, 12.0), Color::WHITE);
    }
}
