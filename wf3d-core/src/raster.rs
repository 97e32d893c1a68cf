/// Framebuffer and Bresenham line rasterization
use nalgebra::Matrix4;

use crate::geometry::Mesh;
use crate::transform::{project_mesh, ScreenPoint};

/// A packed ARGB8888 color (alpha in the high byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const GREEN: Color = Color(0xFF00_FF00);

    /// Opaque color from 8-bit channels
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }
}

/// A row-major pixel buffer: index = y * width + x.
///
/// Allocated once by the caller and written only through the rasterizer;
/// the pixel slice is handed to the presentation layer once per frame.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel array, for blitting to a presentation surface
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    /// Write one pixel. Out-of-range coordinates are silently dropped;
    /// this bounds check is the only clipping the renderer performs.
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color.0;
    }

    /// Draw the 8-connected line between two points, endpoints included,
    /// using Bresenham's algorithm (integer arithmetic only).
    pub fn draw_line(&mut self, p0: ScreenPoint, p1: ScreenPoint, color: Color) {
        // Degenerate projections (clip w = 0) arrive as the sentinel point
        if p0 == ScreenPoint::OFFSCREEN || p1 == ScreenPoint::OFFSCREEN {
            return;
        }

        // Widen so off-screen endpoints cannot overflow the deltas
        let (mut x0, mut y0) = (p0.x as i64, p0.y as i64);
        let (mut x1, mut y1) = (p1.x as i64, p1.y as i64);
        let (w, h) = (self.width as i64, self.height as i64);

        // Both endpoints past the same buffer edge: no pixel can land
        if (x0 < 0 && x1 < 0)
            || (x0 >= w && x1 >= w)
            || (y0 < 0 && y1 < 0)
            || (y0 >= h && y1 >= h)
        {
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut decision = 2 * dy - dx;
        let y_step: i64 = if y0 < y1 { 1 } else { -1 };
        let mut y = y0;

        for x in x0..=x1 {
            if steep {
                self.put(y as i32, x as i32, color);
            } else {
                self.put(x as i32, y as i32, color);
            }

            if decision > 0 {
                y += y_step;
                decision -= 2 * dx;
            }
            decision += 2 * dy;
        }
    }

    /// Draw a mesh's wireframe. Vertices are projected once, then each edge
    /// is rasterized in insertion order; overlapping edges overwrite
    /// (last-write-wins, no blending).
    pub fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
        color: Color,
    ) {
        let points = project_mesh(mesh, model, view, projection, self.width, self.height);
        for edge in mesh.edges() {
            self.draw_line(points[edge.from], points[edge.to], color);
        }
    }
}
