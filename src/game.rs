use crate::background::ParallaxLayer;
use crate::canvas::Canvas;
use crate::collision::obstacle_hits_player;
use crate::config::{
    floor_y, BORDER, COLLISION_PAD, GRAVITY, HEIGHT, JUMP_VELOCITY, OBSTACLE_COUNT,
    OBSTACLE_FRAMES, OBSTACLE_VELOCITY, PLAYER_FRAMES, TITLE, WIDTH,
};
use crate::fonts::{draw_text_centered, draw_text_small};
use crate::input::{InputState, Key};
use crate::physics::{apply_gravity, apply_jump, integrate, is_on_ground};
use crate::sprites::{advance_animation, frame_due, recycle_if_offscreen, AnimatedSprite, FrameSize};
use crate::texture::Assets;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    GameOver,
}

/// Geometry the session derives from the loaded textures.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub player_frame: FrameSize,
    pub obstacle_frame: FrameSize,
    pub layer_widths: [f32; 3],
    pub layer_scale: f32,
    pub layer_velocities: [f32; 3],
}

/// All mutable state of one play session.
pub struct Game {
    layout: Layout,
    pub mode: Mode,
    pub player: AnimatedSprite,
    pub obstacles: Vec<AnimatedSprite>,
    pub velocity: f32,
    pub collision: bool,
    pub score: u64,
    pub layers: [ParallaxLayer; 3],
}

impl Game {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            mode: Mode::Running,
            player: AnimatedSprite::player(layout.player_frame),
            obstacles: Self::spawn_obstacles(layout.obstacle_frame),
            velocity: 0.0,
            collision: false,
            score: 0,
            layers: std::array::from_fn(|i| {
                ParallaxLayer::new(
                    layout.layer_widths[i],
                    layout.layer_scale,
                    layout.layer_velocities[i],
                )
            }),
        }
    }

    fn spawn_obstacles(frame: FrameSize) -> Vec<AnimatedSprite> {
        (0..OBSTACLE_COUNT)
            .map(|i| AnimatedSprite::obstacle(frame, i))
            .collect()
    }

    /// Back to the initial session: player on the ground, obstacles re-spread,
    /// score and collision cleared.
    fn restart(&mut self) {
        *self = Self::new(self.layout);
        log::info!("Restarted");
    }

    /// Advances the session by one frame of `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        for layer in self.layers.iter_mut() {
            *layer = layer.scrolled(dt);
        }

        let floor = floor_y();
        let grounded = is_on_ground(&self.player, floor);
        self.velocity = apply_gravity(self.velocity, grounded, GRAVITY, dt);

        if self.mode == Mode::GameOver && input.is_just_pressed(Key::Restart) {
            self.restart();
        }

        self.velocity = apply_jump(
            self.velocity,
            grounded,
            input.is_just_pressed(Key::Jump),
            JUMP_VELOCITY,
        );
        self.player = integrate(self.player, self.velocity, dt);

        if grounded {
            self.player = advance_animation(self.player, dt, PLAYER_FRAMES);
        }

        if self.mode == Mode::Running {
            self.check_collisions();
        }

        if self.collision {
            return;
        }

        self.update_obstacles(dt);
        self.score += 1;
    }

    fn check_collisions(&mut self) {
        let player = self.player.bounds();
        let hit = self
            .obstacles
            .iter()
            .any(|o| obstacle_hits_player(&o.bounds(), &player, COLLISION_PAD));
        if hit {
            self.collision = true;
            self.mode = Mode::GameOver;
            log::info!("Game over, score {}", self.score);
        }
    }

    fn update_obstacles(&mut self, dt: f32) {
        for o in self.obstacles.iter_mut() {
            o.x += OBSTACLE_VELOCITY * dt;
            let due = frame_due(o, dt);
            *o = advance_animation(*o, dt, OBSTACLE_FRAMES);
            if due {
                *o = recycle_if_offscreen(*o);
            }
        }
    }

    pub fn render(&self, canvas: &mut Canvas, assets: &Assets) {
        canvas.clear([255, 255, 255, 255]);

        for (layer, texture) in self.layers.iter().zip(assets.layers.iter()) {
            layer.draw(canvas, texture, self.layout.layer_scale);
        }

        match self.mode {
            Mode::Running => {
                for o in &self.obstacles {
                    canvas.draw_texture_region(&assets.obstacle, o.frame_rect, o.x, o.y, 1.0);
                }
            }
            Mode::GameOver => {
                let mid = HEIGHT as i32 / 2;
                draw_text_centered(canvas, mid - 30, "GAME OVER", [230, 41, 55]);
                draw_text_centered(canvas, mid, "Press Enter to restart", [255, 255, 255]);
            }
        }

        canvas.draw_texture_region(
            &assets.player,
            self.player.frame_rect,
            self.player.x,
            self.player.y,
            1.0,
        );

        self.render_border(canvas);
        self.render_hud(canvas);
    }

    fn render_border(&self, canvas: &mut Canvas) {
        let b = BORDER as i32;
        let (w, h) = (WIDTH as i32, HEIGHT as i32);
        let color = [20, 20, 28, 255];
        canvas.fill_rect(0, 0, w, b, color);
        canvas.fill_rect(0, h - b, w, b, color);
        canvas.fill_rect(0, 0, b, h, color);
        canvas.fill_rect(w - b, 0, b, h, color);
    }

    fn render_hud(&self, canvas: &mut Canvas) {
        let b = BORDER as i32;
        draw_text_small(canvas, b + 6, b + 6, TITLE, [255, 255, 255]);
        let score_txt = format!("Score: {}", self.score);
        draw_text_small(canvas, b + 6, b + 20, &score_txt, [255, 230, 0]);
        if self.mode == Mode::Running {
            let hint_y = canvas.height() - b - 16;
            draw_text_small(canvas, b + 6, hint_y, "SPACE to jump", [200, 200, 200]);
        }
    }
}
