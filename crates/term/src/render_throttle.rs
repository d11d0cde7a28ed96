//! Redraw gate for the frame loop.
//!
//! While the simulation runs every tick produces a new frame. While it is
//! paused the picture only changes on edits, camera moves or pointer moves, so
//! redraws are skipped unless something changed or a refresh interval passed.

use crate::core::SimSnapshot;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to draw a frame.
    ///
    /// `view_key` covers view-only state (camera, pointer, terminal size).
    pub fn should_render(&mut self, now_ms: u64, snap: &SimSnapshot, view_key: u64) -> bool {
        let fingerprint = snap.fingerprint() ^ view_key.rotate_left(17);

        let render = !self.has_rendered
            || !snap.is_static()
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}
