use tui_life::core::SimSnapshot;
use tui_life::term::RenderThrottle;

fn paused(generation: u64) -> SimSnapshot {
    SimSnapshot {
        generation,
        ..SimSnapshot::default()
    }
}

fn running() -> SimSnapshot {
    SimSnapshot {
        running: true,
        ..SimSnapshot::default()
    }
}

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &paused(0), 0));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &paused(0), 0));
    assert!(t.should_render(1, &paused(1), 0));
}

#[test]
fn render_throttle_static_renders_on_view_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &paused(0), 7));
    assert!(!t.should_render(1, &paused(0), 7));
    assert!(t.should_render(2, &paused(0), 8));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &paused(0), 0));
    assert!(!t.should_render(10, &paused(0), 0));
    assert!(!t.should_render(249, &paused(0), 0));
    assert!(t.should_render(250, &paused(0), 0));
}

#[test]
fn render_throttle_running_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &running(), 0));
    assert!(t.should_render(1, &running(), 0));
    assert!(t.should_render(2, &running(), 0));
}

#[test]
fn render_throttle_pending_step_renders() {
    let mut t = RenderThrottle::new(250);
    let snap = SimSnapshot {
        step_pending: true,
        ..SimSnapshot::default()
    };
    assert!(t.should_render(0, &snap, 0));
    assert!(t.should_render(1, &snap, 0));
}

#[test]
fn render_throttle_invalidate_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, &paused(0), 0));
    assert!(!t.should_render(1, &paused(0), 0));
    t.invalidate();
    assert!(t.should_render(2, &paused(0), 0));
}
