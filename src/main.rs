mod background;
mod canvas;
mod collision;
mod config;
mod fonts;
mod game;
mod input;
mod physics;
mod sprites;
mod texture;

use std::time::{Duration, Instant};

use crate::canvas::Canvas;
use crate::config::{HEIGHT, MAX_FRAME_DT, TARGET_FPS, TITLE, WIDTH};
use crate::game::Game;
use crate::input::InputState;
use crate::texture::Assets;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("{} starting...", TITLE);

    let assets = Assets::load()?;
    let mut game = Game::new(assets.layout()?);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|err| anyhow::anyhow!("failed to create window: {err}"))?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(WIDTH, HEIGHT, surface_texture)
        .map_err(|err| anyhow::anyhow!("failed to create pixel surface: {err}"))?;

    let mut input = InputState::new();
    let frame_time = Duration::from_secs_f64(1.0 / TARGET_FPS);
    let mut last_time = Instant::now();
    let mut next_frame = last_time;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    log::info!("Close requested, exiting.");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(keycode),
                            ..
                        },
                    ..
                } => {
                    let pressed = state == ElementState::Pressed;
                    if pressed && keycode == VirtualKeyCode::Escape {
                        log::info!("Escape pressed, exiting.");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    input.on_key(keycode, pressed);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now < next_frame {
                    *control_flow = ControlFlow::WaitUntil(next_frame);
                    return;
                }
                next_frame = (next_frame + frame_time).max(now);

                let mut dt = (now - last_time).as_secs_f32();
                last_time = now;
                if dt > MAX_FRAME_DT {
                    log::warn!(
                        "Frame took {:.1}ms, capping to {:.0}ms",
                        dt * 1000.0,
                        MAX_FRAME_DT * 1000.0
                    );
                    dt = MAX_FRAME_DT;
                }

                game.update(dt, &input);
                input.end_frame();

                let mut canvas = Canvas::new(pixels.frame_mut(), WIDTH, HEIGHT);
                game.render(&mut canvas, &assets);

                if let Err(err) = pixels.render() {
                    log::error!("Presenting frame failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                *control_flow = ControlFlow::WaitUntil(next_frame);
            }
            _ => {}
        }
    });
}
