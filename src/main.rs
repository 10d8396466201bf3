//! Interactive playground for the `vect2d` operations.
//!
//! Scatters random segments over the window and marks, for each one, the point
//! closest to the mouse cursor. A red tracker chases the cursor at bounded speed
//! and a cyan arrow at the centre turns toward it at bounded angular speed.
//! Press `R` to scatter new segments and `Escape` to quit.

mod scene;

use crate::scene::{Scene, SceneConfig};
use log::{info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::time::{Duration, Instant};
use vect2d::Vect;

/// Window title displayed in the title bar
const TITLE: &str = "vect2d playground";
/// Width of the window in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the window in pixels
const WINDOW_HEIGHT: u32 = 600;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Frames per second the loop aims for
const TARGET_FPS: u32 = 60;
/// Frames slower than this are reported
const SLOW_FRAME: Duration = Duration::from_millis(50);
/// Path to the font used for the heading readout
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Updates and renders the scene for one frame.
///
/// # Arguments
///
/// * `scene` - The segments, tracker and pointer being shown
/// * `canvas` - SDL2 canvas for rendering
/// * `font` - Font for the heading readout, if one could be loaded
/// * `cursor` - Mouse position in window coordinates
/// * `dt` - Time delta in seconds since last frame
fn main_loop(
    scene: &mut Scene,
    canvas: &mut Canvas<Window>,
    font: Option<&Font>,
    cursor: Vect,
    dt: f64,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    scene.update(cursor, dt);
    scene.draw(canvas, cursor);

    if let Some(font) = font {
        draw_readout(canvas, font, scene, cursor)?;
    }
    Ok(())
}

/// Renders the pointer heading and cursor position in the top-left corner.
fn draw_readout(
    canvas: &mut Canvas<Window>,
    font: &Font,
    scene: &Scene,
    cursor: Vect,
) -> Result<(), String> {
    let text = format!("heading {:>7.2} deg   cursor {}", scene.pointer.degrees(), cursor);
    let surface = font
        .render(&text)
        .blended(Color::RGB(255, 255, 255))
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    let query = texture.query();
    let target = Rect::new(10, 10, query.width, query.height);
    canvas.copy(&texture, None, Some(target))
}

/// Entry point: initializes SDL2 and logging, then runs the loop at 60 FPS.
fn main() -> Result<(), String> {
    env_logger::init();

    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    // The readout is optional; the scene is still useful without it.
    let font = match ttf_context.load_font(FONT_PATH, 16) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("no heading readout, could not load {}: {}", FONT_PATH, e);
            None
        }
    };

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| e.to_string())?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let config = SceneConfig::default();
    info!("starting {}x{} scene with {:?}", WINDOW_WIDTH, WINDOW_HEIGHT, config);
    let mut scene = Scene::new(config, WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => scene.scatter(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame_time);
        last_frame_time = now;
        if elapsed > SLOW_FRAME {
            warn!("slow frame: {:?}", elapsed);
        }

        let mouse = event_pump.mouse_state();
        let cursor = Vect::new(mouse.x() as f64, mouse.y() as f64);

        main_loop(
            &mut scene,
            &mut canvas,
            font.as_ref(),
            cursor,
            elapsed.as_secs_f64(),
        )?;

        canvas.present();
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / TARGET_FPS));
    }

    info!("shutting down");
    Ok(())
}
