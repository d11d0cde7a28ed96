//! Terminal Game of Life runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and a custom framebuffer-based
//! renderer. Configuration comes from `LIFE_*` environment variables (see
//! `tui_life::core::config`); set `LIFE_LOG=debug` and redirect stderr to get a
//! log.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_life::core::{SimConfig, SimSnapshot, Simulation};
use tui_life::input::{handle_key_event, pan_delta, should_quit, PointerHandler};
use tui_life::term::{Camera, FrameBuffer, GridView, RenderThrottle, TerminalRenderer, Viewport};

/// Refresh interval while the simulation is paused and nothing changed.
const STATIC_REFRESH_MS: u64 = 500;

fn main() -> Result<()> {
    init_logging();

    let config = SimConfig::from_env();
    info!(
        "starting {}x{} grid, seed {}, tick {}ms",
        config.width, config.height, config.seed, config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() {
    let Some(level) = std::env::var("LIFE_LOG")
        .ok()
        .and_then(|v| v.parse::<log::Level>().ok())
    else {
        return;
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("logger already installed: {e}");
    }
}

fn run(term: &mut TerminalRenderer, config: &SimConfig) -> Result<()> {
    let mut sim = Simulation::new(config);
    sim.start();

    let view = GridView::default();
    let mut pointer = PointerHandler::new();
    let mut throttle = RenderThrottle::new(STATIC_REFRESH_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SimSnapshot::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut camera = view.centered_camera(sim.width(), sim.height(), viewport);

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let layout = view.layout(sim.width(), sim.height(), viewport);
        let hover = pointer
            .position()
            .and_then(|(col, row)| view.screen_to_grid(&layout, camera, col, row));
        sim.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, &snap, view_key(camera, hover, viewport)) {
            view.render_into(sim.grid(), &snap, camera, hover, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!("action {}", action.as_str());
                        sim.apply_action(action);
                    } else if let Some((dx, dy)) = pan_delta(key) {
                        camera = view.clamp_camera(camera.pan(dx, dy), sim.width(), sim.height(), viewport);
                    }
                }
                Event::Mouse(mouse) => pointer.handle_mouse(mouse),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    camera = view.clamp_camera(camera, sim.width(), sim.height(), viewport);
                    term.invalidate();
                    throttle.invalidate();
                }
                Event::FocusLost => pointer.release_all(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let layout = view.layout(sim.width(), sim.height(), viewport);
            for edit in pointer.update() {
                if let Some((x, y)) = view.screen_to_grid(&layout, camera, edit.column, edit.row) {
                    sim.apply_brush(edit.brush, x, y);
                }
            }

            sim.tick();
        }
    }
}

/// Mix view-only state into one value for the render throttle.
fn view_key(camera: Camera, hover: Option<(i32, i32)>, viewport: Viewport) -> u64 {
    let (hx, hy) = hover.unwrap_or((-1, -1));
    let parts = [
        camera.x as u32 as u64,
        camera.y as u32 as u64,
        hx as u32 as u64,
        hy as u32 as u64,
        (viewport.width as u64) << 16 | viewport.height as u64,
    ];
    parts
        .iter()
        .fold(0xcbf29ce484222325u64, |h, p| (h ^ p).wrapping_mul(0x00000100000001B3))
}
