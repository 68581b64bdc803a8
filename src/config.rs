// Window
pub const WIDTH: u32 = 512;
pub const HEIGHT: u32 = 380;
pub const TITLE: &str = "Dapper Dasher";

/// Margin framing the play area. The floor sits this far above the window bottom.
pub const BORDER: f32 = 10.0;

pub const TARGET_FPS: f64 = 60.0;
/// Longest delta time fed to the simulation in one frame (seconds).
pub const MAX_FRAME_DT: f32 = 0.25;

// Player kinematics (px/s², px/s)
pub const GRAVITY: f32 = 1800.0;
pub const JUMP_VELOCITY: f32 = -800.0;

// Animation
pub const FRAME_DURATION: f32 = 1.0 / 12.0;
pub const PLAYER_FRAMES: usize = 6;
pub const OBSTACLE_SHEET_COLUMNS: u32 = 8;
pub const OBSTACLE_SHEET_ROWS: u32 = 8;
pub const OBSTACLE_FRAMES: usize = 8;

// Obstacles
pub const OBSTACLE_COUNT: usize = 6;
pub const OBSTACLE_SPACING: f32 = 400.0;
pub const OBSTACLE_VELOCITY: f32 = -300.0;
pub const OBSTACLE_RECYCLE_OFFSET: f32 = 600.0;
pub const COLLISION_PAD: f32 = 20.0;

// Parallax layers, back to front
pub const LAYER_SCALE: f32 = 2.0;
pub const LAYER_VELOCITIES: [f32; 3] = [20.0, 40.0, 80.0];

// Assets
pub const PLAYER_TEXTURE: &str = "textures/scarfy.png";
pub const OBSTACLE_TEXTURE: &str = "textures/12_nebula_spritesheet.png";
pub const LAYER_TEXTURES: [&str; 3] = [
    "textures/far-buildings.png",
    "textures/back-buildings.png",
    "textures/foreground.png",
];

/// Y coordinate of the floor the player and obstacles stand on.
pub fn floor_y() -> f32 {
    HEIGHT as f32 - BORDER
}
