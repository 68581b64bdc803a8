use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

use crate::collision::Rect;
use crate::texture::Texture;

/// RGBA8 frame buffer view with clipped, alpha-blended drawing.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: i32,
    height: i32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), width as usize * height as usize * 4);
        Self {
            frame,
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.index(x, y).map(|idx| {
            let mut out = [0; 4];
            out.copy_from_slice(&self.frame[idx..idx + 4]);
            out
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some(((y * self.width + x) * 4) as usize)
        }
    }

    /// Source-over blend of `color` onto the pixel at (x, y).
    pub fn blend(&mut self, x: i32, y: i32, color: [u8; 4]) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let alpha = color[3] as u32;
        match alpha {
            0 => {}
            255 => self.frame[idx..idx + 4].copy_from_slice(&color),
            _ => {
                for c in 0..3 {
                    let dst = self.frame[idx + c] as u32;
                    let src = color[c] as u32;
                    self.frame[idx + c] = ((src * alpha + dst * (255 - alpha)) / 255) as u8;
                }
                self.frame[idx + 3] = 255;
            }
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: [u8; 4]) {
        for yy in y.max(0)..(y + h).min(self.height) {
            for xx in x.max(0)..(x + w).min(self.width) {
                self.blend(xx, yy, color);
            }
        }
    }

    /// Draws the `src` region of `texture` with its top-left corner at
    /// (`x`, `y`), scaled by `scale` with nearest-neighbour sampling.
    pub fn draw_texture_region(&mut self, texture: &Texture, src: Rect, x: f32, y: f32, scale: f32) {
        if scale <= 0.0 || src.width <= 0.0 || src.height <= 0.0 {
            return;
        }
        let src_x = src.x.max(0.0) as u32;
        let src_y = src.y.max(0.0) as u32;
        let src_right = (src.right() as u32).min(texture.width);
        let src_bottom = (src.bottom() as u32).min(texture.height);
        if src_x >= src_right || src_y >= src_bottom {
            return;
        }

        let left = x.floor() as i32;
        let top = y.floor() as i32;
        let dst_w = (src.width * scale).ceil() as i32;
        let dst_h = (src.height * scale).ceil() as i32;

        for dy in top.max(0)..(top + dst_h).min(self.height) {
            let v = src_y + ((dy - top) as f32 / scale) as u32;
            if v >= src_bottom {
                continue;
            }
            for dx in left.max(0)..(left + dst_w).min(self.width) {
                let u = src_x + ((dx - left) as f32 / scale) as u32;
                if u >= src_right {
                    continue;
                }
                self.blend(dx, dy, texture.texel(u, v));
            }
        }
    }

    pub fn draw_texture_scaled(&mut self, texture: &Texture, x: f32, y: f32, scale: f32) {
        let full = Rect::new(0.0, 0.0, texture.width as f32, texture.height as f32);
        self.draw_texture_region(texture, full, x, y, scale);
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.blend(point.x, point.y, [color.r(), color.g(), color.b(), 255]);
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::solid;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    #[test]
    fn clear_fills_every_pixel() {
        let mut frame = vec![7u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.clear(BLACK);
        assert!(frame.chunks_exact(4).all(|px| px == BLACK));
    }

    #[test]
    fn transparent_texels_leave_background() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.clear(BLACK);
        canvas.draw_texture_scaled(&solid(2, 2, [255, 255, 255, 0]), 0.0, 0.0, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn half_alpha_blends() {
        let mut frame = vec![0u8; 4];
        let mut canvas = Canvas::new(&mut frame, 1, 1);
        canvas.clear(BLACK);
        canvas.blend(0, 0, [255, 255, 255, 128]);
        assert_eq!(canvas.pixel(0, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn scaled_blit_doubles_footprint() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let mut canvas = Canvas::new(&mut frame, 8, 8);
        canvas.clear(BLACK);
        canvas.draw_texture_scaled(&solid(2, 2, RED), 1.0, 1.0, 2.0);
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(4, 4), Some(RED));
        assert_eq!(canvas.pixel(5, 5), Some(BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.clear(BLACK);
        canvas.draw_texture_scaled(&solid(4, 4, RED), -2.0, 3.0, 1.0);
        assert_eq!(canvas.pixel(0, 3), Some(RED));
        assert_eq!(canvas.pixel(1, 3), Some(RED));
        assert_eq!(canvas.pixel(2, 3), Some(BLACK));
        assert_eq!(canvas.pixel(0, 2), Some(BLACK));
    }

    #[test]
    fn region_selects_sheet_frame() {
        // Two 1x1 frames side by side: red then blue.
        let mut pixels = RED.to_vec();
        pixels.extend_from_slice(&[0, 0, 255, 255]);
        let sheet = Texture::from_rgba(2, 1, pixels).unwrap();

        let mut frame = vec![0u8; 4];
        let mut canvas = Canvas::new(&mut frame, 1, 1);
        canvas.draw_texture_region(&sheet, Rect::new(1.0, 0.0, 1.0, 1.0), 0.0, 0.0, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255, 255]));
    }
}
