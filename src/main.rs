use anyhow::Result;
use glam::IVec2;
use log::{debug, info, warn};
use std::path::Path;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::game_loop::{TickClock, TICK_RATE};
use engine::input::KeyboardState;
use engine::map::{MapProvider, StaticMap, DEMO_ARENA};
use engine::renderer::HeadlessRenderer;
use game::characters::{ActionTable, AnimationSet, CharacterController, ControllerConfig};
use game::Level;

/// Root directory holding `animations/`
const ASSET_DIR: &str = "assets";

/// Sprite top-left corner at spawn
const SPAWN_POINT: IVec2 = IVec2::new(64, 64);

/// Action played on demand with the X key
const DEATH_ACTION: &str = "death";

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG is re-read last so it overrides the Info default
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Tilewalker...");

    // Configuration errors stop us here, before the first tick
    let animations = AnimationSet::load(ActionTable::standard()?, &AssetLoader::new(ASSET_DIR));
    if animations.degraded_count() > 0 {
        warn!(
            "{} of {} animations are using placeholder frames",
            animations.degraded_count(),
            animations.table().len()
        );
    }
    let controller =
        CharacterController::new(animations, &ControllerConfig::standard(), SPAWN_POINT)?;

    let maps = StaticMap::demo_arena();
    let mut level = Level::new(controller, maps.load_map(Path::new(DEMO_ARENA))?);
    info!(
        "Level ready: {} walls, {} render layers",
        level.walls().len(),
        level.layers().len()
    );

    let mut renderer = HeadlessRenderer::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
        .with_capture(log::log_enabled!(log::Level::Trace));
    let mut keyboard = KeyboardState::new();
    let mut clock = TickClock::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tilewalker")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created, simulating at {} ticks/s", TICK_RATE);

    // Main event loop
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} ticks and {} draws, shutting down...",
                    level.tick_count(),
                    renderer.draw_count()
                );
                if let Some(draw) = renderer.last_draw() {
                    info!(
                        "Last frame: '{}' {}x{} at {:?}{}",
                        level.controller().current_action_name(),
                        draw.frame_size.0,
                        draw.frame_size.1,
                        draw.sprite,
                        if draw.flipped { " (mirrored)" } else { "" }
                    );
                }
                if let Some(image) = renderer.last_image() {
                    debug!("Captured last frame: {}x{}", image.width(), image.height());
                }
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let pressed = event.state == ElementState::Pressed && !event.repeat;
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) if pressed => elwt.exit(),
                    PhysicalKey::Code(KeyCode::KeyP) if pressed => {
                        clock.toggle_pause();
                        window.set_title(if clock.is_paused() {
                            "Tilewalker (paused)"
                        } else {
                            "Tilewalker"
                        });
                    }
                    PhysicalKey::Code(KeyCode::KeyX) if pressed => {
                        let controller = level.controller_mut();
                        if let Some(death) = controller.action_id(DEATH_ACTION) {
                            if !controller.trigger(death) {
                                info!("Cannot play '{}' right now", DEATH_ACTION);
                            }
                        }
                    }
                    PhysicalKey::Code(KeyCode::F5) if pressed => {
                        match maps.load_map(Path::new(DEMO_ARENA)) {
                            Ok(map) => level.replace_map(map),
                            Err(e) => warn!("Failed to reload map: {}", e),
                        }
                    }
                    _ => keyboard.process_keyboard_event(&event),
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are lost while unfocused
                debug!("Focus lost, releasing {} keys", keyboard.pressed_count());
                keyboard.clear();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                renderer.resize(physical_size.width as f32, physical_size.height as f32);
                info!(
                    "Window resized to {:?}, viewport {:?}",
                    physical_size,
                    renderer.camera().viewport()
                );
            }
            Event::AboutToWait => {
                for _ in 0..clock.begin_frame() {
                    level.tick(&keyboard, &mut renderer);
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
