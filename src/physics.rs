//! Vertical kinematics for the player: ground test, gravity and jump impulse.

use crate::sprites::AnimatedSprite;

pub fn is_on_ground(sprite: &AnimatedSprite, floor_y: f32) -> bool {
    sprite.y >= floor_y - sprite.height()
}

/// One explicit Euler step of vertical velocity. Grounded sprites stop dead.
pub fn apply_gravity(velocity: f32, grounded: bool, gravity: f32, dt: f32) -> f32 {
    if grounded {
        0.0
    } else {
        velocity + gravity * dt
    }
}

/// Adds the jump impulse when a jump was requested from the ground.
pub fn apply_jump(velocity: f32, grounded: bool, requested: bool, jump_velocity: f32) -> f32 {
    if requested && grounded {
        velocity + jump_velocity
    } else {
        velocity
    }
}

pub fn integrate(mut sprite: AnimatedSprite, velocity: f32, dt: f32) -> AnimatedSprite {
    sprite.y += velocity * dt;
    sprite
}
