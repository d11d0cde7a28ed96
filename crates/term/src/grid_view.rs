//! GridView: maps a window of the simulation grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn from the top-left corner of the viewport inside a
//! one-character border; a status panel sits to its right when there is room.
//! Each grid cell takes `cell_w x cell_h` terminal characters, and the
//! [`Camera`] picks which grid cell is shown in the board's top-left corner.

use crate::core::{Grid, SimSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Width of the status panel, including its left margin.
pub const PANEL_WIDTH: u16 = 20;

const BACKGROUND: Rgb = Rgb::new(93, 95, 102);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Grid coordinate shown in the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

impl Camera {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn pan(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Where the board lands on screen for a given grid and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Screen column of the first board cell (inside the border).
    pub origin_x: u16,
    /// Screen row of the first board cell (inside the border).
    pub origin_y: u16,
    /// Visible grid columns.
    pub cols: u16,
    /// Visible grid rows.
    pub rows: u16,
    /// Whether the status panel fits.
    pub panel: bool,
}

/// A terminal renderer for the simulation grid.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Compute the board placement for a grid of `grid_w x grid_h` cells.
    pub fn layout(&self, grid_w: u32, grid_h: u32, viewport: Viewport) -> BoardLayout {
        let panel = viewport.width >= PANEL_WIDTH + 2 + self.cell_w;
        let usable_w = viewport
            .width
            .saturating_sub(2)
            .saturating_sub(if panel { PANEL_WIDTH } else { 0 });
        let usable_h = viewport.height.saturating_sub(2);

        let cols = (usable_w / self.cell_w).min(grid_w.min(u16::MAX as u32) as u16);
        let rows = (usable_h / self.cell_h).min(grid_h.min(u16::MAX as u32) as u16);
        BoardLayout {
            origin_x: 1,
            origin_y: 1,
            cols,
            rows,
            panel,
        }
    }

    /// Clamp a camera so the visible window stays inside the grid.
    pub fn clamp_camera(&self, camera: Camera, grid_w: u32, grid_h: u32, viewport: Viewport) -> Camera {
        let layout = self.layout(grid_w, grid_h, viewport);
        let max_x = grid_w as i32 - layout.cols as i32;
        let max_y = grid_h as i32 - layout.rows as i32;
        Camera {
            x: camera.x.clamp(0, max_x.max(0)),
            y: camera.y.clamp(0, max_y.max(0)),
        }
    }

    /// Camera that centers the visible window on the grid.
    pub fn centered_camera(&self, grid_w: u32, grid_h: u32, viewport: Viewport) -> Camera {
        let layout = self.layout(grid_w, grid_h, viewport);
        let camera = Camera::new(
            (grid_w as i32 - layout.cols as i32) / 2,
            (grid_h as i32 - layout.rows as i32) / 2,
        );
        self.clamp_camera(camera, grid_w, grid_h, viewport)
    }

    /// Map a screen position to the grid cell drawn there.
    ///
    /// Returns None for positions on the border, the panel, or past the board.
    pub fn screen_to_grid(
        &self,
        layout: &BoardLayout,
        camera: Camera,
        column: u16,
        row: u16,
    ) -> Option<(i32, i32)> {
        let bx = column.checked_sub(layout.origin_x)? / self.cell_w;
        let by = row.checked_sub(layout.origin_y)? / self.cell_h;
        if bx >= layout.cols || by >= layout.rows {
            return None;
        }
        Some((camera.x + bx as i32, camera.y + by as i32))
    }

    /// Render the visible part of `grid` plus the status panel into `fb`.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        grid: &Grid,
        snap: &SimSnapshot,
        camera: Camera,
        pointer: Option<(i32, i32)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let layout = self.layout(grid.width(), grid.height(), viewport);
        let frame_w = layout.cols * self.cell_w + 2;
        let frame_h = layout.rows * self.cell_h + 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
        self.draw_border(fb, 0, 0, frame_w, frame_h, border);

        let dead = CellStyle::plain(BACKGROUND, BACKGROUND);
        let alive = CellStyle::plain(Rgb::WHITE, BACKGROUND);
        for by in 0..layout.rows {
            let gy = camera.y + by as i32;
            for bx in 0..layout.cols {
                let gx = camera.x + bx as i32;
                let (ch, style) = if grid.is_active(gx, gy) {
                    ('█', alive)
                } else {
                    (' ', dead)
                };
                self.fill_cell_rect(fb, &layout, bx, by, ch, style);
            }
        }

        // Pointer marker.
        if let Some((px, py)) = pointer {
            let bx = px - camera.x;
            let by = py - camera.y;
            if (0..layout.cols as i32).contains(&bx) && (0..layout.rows as i32).contains(&by) {
                let ch = if grid.is_active(px, py) { '▓' } else { '░' };
                let style = CellStyle::plain(Rgb::new(250, 210, 90), BACKGROUND).bold();
                self.fill_cell_rect(fb, &layout, bx as u16, by as u16, ch, style);
            }
        }

        if layout.panel {
            self.draw_side_panel(fb, snap, pointer, camera, viewport, frame_w);
        }

        if !snap.running {
            self.draw_overlay_text(fb, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        snap: &SimSnapshot,
        camera: Camera,
        pointer: Option<(i32, i32)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, snap, camera, pointer, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        bx: u16,
        by: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.origin_x + bx * self.cell_w;
        let py = layout.origin_y + by * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SimSnapshot,
        pointer: Option<(i32, i32)>,
        camera: Camera,
        viewport: Viewport,
        frame_w: u16,
    ) {
        let x = frame_w.saturating_add(2);
        if x >= viewport.width {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
        let hint = value.dim();

        let mut y = 0;
        fb.put_str(x, y, if snap.running { "RUNNING" } else { "PAUSED" }, label);
        y += 2;

        fb.put_str(x, y, "GEN", label);
        fb.put_u64(x + 5, y, snap.generation, value);
        y += 1;
        fb.put_str(x, y, "POP", label);
        fb.put_u64(x + 5, y, snap.population as u64, value);
        y += 1;

        fb.put_str(x, y, "POS", label);
        match pointer {
            Some((px, py)) if px >= 0 && py >= 0 => {
                let w = fb.put_u64(x + 5, y, px as u64, value);
                fb.put_char(x + 5 + w, y, ',', value);
                fb.put_u64(x + 6 + w, y, py as u64, value);
            }
            _ => {
                fb.put_str(x + 5, y, "-", value);
            }
        }
        y += 1;

        fb.put_str(x, y, "VIEW", label);
        let w = fb.put_u64(x + 5, y, camera.x.max(0) as u64, value);
        fb.put_char(x + 5 + w, y, ',', value);
        fb.put_u64(x + 6 + w, y, camera.y.max(0) as u64, value);
        y += 1;

        fb.put_str(x, y, "SIZE", label);
        let w = fb.put_u64(x + 5, y, snap.width as u64, value);
        fb.put_char(x + 5 + w, y, 'x', value);
        fb.put_u64(x + 6 + w, y, snap.height as u64, value);
        y += 2;

        for line in [
            "SPC run/pause",
            "F   step",
            "C   clear",
            "R   randomize",
            "LMB paint",
            "RMB erase",
            "hjkl pan",
            "Q   quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame_w: u16, frame_h: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        if frame_w < text_w + 2 || frame_h < 3 {
            return;
        }
        let x = (frame_w - text_w) / 2;
        let style = CellStyle::plain(Rgb::WHITE, Rgb::BLACK).bold();
        fb.put_str(x, frame_h - 1, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fits_small_grid_entirely() {
        let view = GridView::default();
        let layout = view.layout(8, 4, Viewport::new(80, 24));
        assert_eq!((layout.cols, layout.rows), (8, 4));
        assert!(layout.panel);
    }

    #[test]
    fn layout_clips_large_grid_to_viewport() {
        let view = GridView::default();
        let layout = view.layout(1024, 1024, Viewport::new(80, 24));
        // 80 - 2 border - 20 panel = 58 columns => 29 cells; 24 - 2 = 22 rows.
        assert_eq!((layout.cols, layout.rows), (29, 22));
    }

    #[test]
    fn clamp_camera_keeps_window_inside_grid() {
        let view = GridView::default();
        let vp = Viewport::new(80, 24);
        assert_eq!(view.clamp_camera(Camera::new(-5, -5), 1024, 1024, vp), Camera::new(0, 0));
        assert_eq!(
            view.clamp_camera(Camera::new(5000, 5000), 1024, 1024, vp),
            Camera::new(1024 - 29, 1024 - 22)
        );
        // A grid smaller than the window pins the camera to the origin.
        assert_eq!(view.clamp_camera(Camera::new(3, 3), 4, 4, vp), Camera::new(0, 0));
    }

    #[test]
    fn screen_to_grid_accounts_for_border_and_cell_width() {
        let view = GridView::default();
        let layout = view.layout(1024, 1024, Viewport::new(80, 24));
        let camera = Camera::new(100, 200);

        assert_eq!(view.screen_to_grid(&layout, camera, 0, 5), None);
        assert_eq!(view.screen_to_grid(&layout, camera, 5, 0), None);
        assert_eq!(view.screen_to_grid(&layout, camera, 1, 1), Some((100, 200)));
        assert_eq!(view.screen_to_grid(&layout, camera, 2, 1), Some((100, 200)));
        assert_eq!(view.screen_to_grid(&layout, camera, 3, 4), Some((101, 203)));
        // Panel area.
        assert_eq!(view.screen_to_grid(&layout, camera, 70, 4), None);
    }
}
