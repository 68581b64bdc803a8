use crate::collision::Rect;
use crate::config::{
    floor_y, FRAME_DURATION, OBSTACLE_RECYCLE_OFFSET, OBSTACLE_SPACING, WIDTH,
};

/// Size of a single animation frame on a sprite sheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

/// A sprite sheet frame window plus its on-screen position and animation clock.
/// Used for the player and for every obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimatedSprite {
    pub frame_rect: Rect,
    pub x: f32,
    pub y: f32,
    pub frame_index: usize,
    pub frame_duration: f32,
    pub elapsed_since_frame: f32,
}

impl AnimatedSprite {
    fn new(frame: FrameSize, x: f32, y: f32) -> Self {
        Self {
            frame_rect: Rect::new(0.0, 0.0, frame.width, frame.height),
            x,
            y,
            frame_index: 0,
            frame_duration: FRAME_DURATION,
            elapsed_since_frame: 0.0,
        }
    }

    /// Player centred horizontally, standing on the floor.
    pub fn player(frame: FrameSize) -> Self {
        let x = WIDTH as f32 / 2.0 - frame.width / 2.0;
        Self::new(frame, x, floor_y() - frame.height)
    }

    /// The `index`-th obstacle, queued off the right edge.
    pub fn obstacle(frame: FrameSize, index: usize) -> Self {
        let x = WIDTH as f32 + index as f32 * OBSTACLE_SPACING;
        Self::new(frame, x, floor_y() - frame.height)
    }

    pub fn width(&self) -> f32 {
        self.frame_rect.width
    }

    pub fn height(&self) -> f32 {
        self.frame_rect.height
    }

    /// Screen-space rectangle covered by the sprite.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }
}

/// Advances the animation clock by `dt`. When a frame's time is used up the
/// accumulator restarts and the sheet window slides to the next frame.
pub fn advance_animation(mut sprite: AnimatedSprite, dt: f32, frame_count: usize) -> AnimatedSprite {
    sprite.elapsed_since_frame += dt;
    if sprite.elapsed_since_frame >= sprite.frame_duration {
        sprite.elapsed_since_frame = 0.0;
        sprite.frame_index = (sprite.frame_index + 1) % frame_count.max(1);
        sprite.frame_rect.x = sprite.frame_index as f32 * sprite.frame_rect.width;
    }
    sprite
}

/// True when advancing by `dt` will move the sprite to its next frame.
pub fn frame_due(sprite: &AnimatedSprite, dt: f32) -> bool {
    sprite.elapsed_since_frame + dt >= sprite.frame_duration
}

/// Sends an obstacle that has fully left the screen back out to the right.
pub fn recycle_if_offscreen(mut sprite: AnimatedSprite) -> AnimatedSprite {
    if sprite.x <= -sprite.width() {
        sprite.x = WIDTH as f32 + OBSTACLE_RECYCLE_OFFSET;
    }
    sprite
}
