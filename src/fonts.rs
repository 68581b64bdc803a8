use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::canvas::Canvas;

fn draw_text(canvas: &mut Canvas, font: &MonoFont, x: i32, y: i32, text: &str, color: [u8; 3]) {
    let style = MonoTextStyle::new(font, Rgb888::new(color[0], color[1], color[2]));
    // Drawing into the canvas cannot fail.
    let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(canvas);
}

/// Width in pixels of `text` set in `font`.
fn text_width(font: &MonoFont, text: &str) -> i32 {
    let advance = font.character_size.width + font.character_spacing;
    (text.chars().count() as u32 * advance) as i32
}

pub fn draw_text_small(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: [u8; 3]) {
    draw_text(canvas, &FONT_6X10, x, y, text, color);
}

pub fn draw_text_large(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: [u8; 3]) {
    draw_text(canvas, &FONT_10X20, x, y, text, color);
}

/// Large text horizontally centred on the canvas with its top at `y`.
pub fn draw_text_centered(canvas: &mut Canvas, y: i32, text: &str, color: [u8; 3]) {
    let x = (canvas.width() - text_width(&FONT_10X20, text)) / 2;
    draw_text_large(canvas, x, y, text, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn lit_pixels(frame: &[u8]) -> usize {
        frame.chunks_exact(4).filter(|px| *px != BLACK).count()
    }

    #[test]
    fn small_text_marks_pixels() {
        let mut frame = vec![0u8; 64 * 16 * 4];
        let mut canvas = Canvas::new(&mut frame, 64, 16);
        canvas.clear(BLACK);
        draw_text_small(&mut canvas, 0, 0, "Score", [255, 255, 255]);
        assert!(lit_pixels(&frame) > 0);
    }

    #[test]
    fn offscreen_text_is_clipped() {
        let mut frame = vec![0u8; 16 * 16 * 4];
        let mut canvas = Canvas::new(&mut frame, 16, 16);
        canvas.clear(BLACK);
        draw_text_large(&mut canvas, 100, 100, "GAME OVER", [255, 0, 0]);
        assert_eq!(lit_pixels(&frame), 0);
    }

    #[test]
    fn width_counts_monospace_advance() {
        assert_eq!(text_width(&FONT_10X20, "ABCD"), 40);
        assert_eq!(text_width(&FONT_6X10, ""), 0);
    }
}
