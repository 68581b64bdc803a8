use crate::canvas::Canvas;
use crate::texture::Texture;

/// Number of side-by-side copies drawn per layer. Three copies cover any
/// viewport up to twice the scaled texture width.
const TILE_COPIES: usize = 3;

/// Moves a layer left by `velocity * dt`, wrapping back to 0 once it has
/// travelled a full scaled texture width.
pub fn scroll_layer(pos_x: f32, scaled_width: f32, velocity: f32, dt: f32) -> f32 {
    if scaled_width <= 0.0 {
        return 0.0;
    }
    let pos_x = pos_x - velocity * dt;
    if pos_x <= -scaled_width {
        0.0
    } else {
        pos_x
    }
}

/// One infinitely tiled parallax layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub offset: f32,
    pub velocity: f32,
    pub scaled_width: f32,
}

impl ParallaxLayer {
    pub fn new(texture_width: f32, scale: f32, velocity: f32) -> Self {
        Self {
            offset: 0.0,
            velocity,
            scaled_width: texture_width * scale,
        }
    }

    pub fn scrolled(self, dt: f32) -> Self {
        Self {
            offset: scroll_layer(self.offset, self.scaled_width, self.velocity, dt),
            ..self
        }
    }

    /// X positions of the tiled copies, left to right.
    pub fn tile_positions(&self) -> [f32; TILE_COPIES] {
        std::array::from_fn(|i| self.offset + i as f32 * self.scaled_width)
    }

    pub fn draw(&self, canvas: &mut Canvas, texture: &Texture, scale: f32) {
        for x in self.tile_positions() {
            canvas.draw_texture_scaled(texture, x, 0.0, scale);
        }
    }
}
