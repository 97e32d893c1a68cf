/// Terminal blitter for ARGB framebuffers
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wf3d_core::Framebuffer;

/// Upper-half-block glyph: one terminal cell carries two stacked pixels,
/// top in the foreground color, bottom in the background color.
const HALF_BLOCK: char = '\u{2580}';

/// Blits a framebuffer to the terminal as truecolor half-block cells
pub struct TermPresenter;

impl TermPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Queue one frame's worth of styled cells into `writer`.
    ///
    /// Each character row covers two pixel rows; an odd final pixel row is
    /// drawn against a black background. The caller positions the cursor
    /// and flushes.
    pub fn present<W: Write>(&self, fb: &Framebuffer, writer: &mut W) -> std::io::Result<()> {
        let width = fb.width() as usize;
        let height = fb.height() as usize;
        let pixels = fb.pixels();

        for row in 0..height.div_ceil(2) {
            for x in 0..width {
                let top = pixels[(2 * row) * width + x];
                let bottom = if 2 * row + 1 < height {
                    pixels[(2 * row + 1) * width + x]
                } else {
                    0
                };

                writer.queue(SetForegroundColor(argb_to_term(top)))?;
                writer.queue(SetBackgroundColor(argb_to_term(bottom)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
            writer.queue(ResetColor)?;
            writer.queue(Print("\r\n"))?;
        }
        Ok(())
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpack a packed ARGB8888 pixel into a truecolor terminal color
fn argb_to_term(pixel: u32) -> Color {
    Color::Rgb {
        r: (pixel >> 16) as u8,
        g: (pixel >> 8) as u8,
        b: pixel as u8,
    }
}
