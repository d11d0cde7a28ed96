//! Pointer handler for painting and erasing with held mouse buttons.
//!
//! Terminals report mouse buttons as press/drag/release events, while the
//! simulation wants "paint at the pointer every tick while held". This handler
//! turns the former into the latter. Drag positions reported between two ticks
//! are kept so a fast stroke does not leave gaps.

use arrayvec::ArrayVec;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Brush;

/// Most edits produced by a single [`PointerHandler::update`].
pub const MAX_EDITS: usize = 32;

/// One brush application at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEdit {
    pub brush: Brush,
    pub column: u16,
    pub row: u16,
}

/// Tracks pointer position and held buttons.
#[derive(Debug, Clone, Default)]
pub struct PointerHandler {
    position: Option<(u16, u16)>,
    held: Option<Brush>,
    trail: ArrayVec<PointerEdit, MAX_EDITS>,
}

fn brush_for(button: MouseButton) -> Option<Brush> {
    match button {
        MouseButton::Left => Some(Brush::Paint),
        MouseButton::Right => Some(Brush::Erase),
        MouseButton::Middle => None,
    }
}

impl PointerHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported pointer position (terminal column, row)
    pub fn position(&self) -> Option<(u16, u16)> {
        self.position
    }

    /// Brush of the currently held button, if any
    pub fn held(&self) -> Option<Brush> {
        self.held
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let pos = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => {
                self.position = Some(pos);
                if let Some(brush) = brush_for(button) {
                    self.held = Some(brush);
                    self.record(brush, pos);
                }
            }
            MouseEventKind::Up(button) => {
                self.position = Some(pos);
                if self.held.is_some() && self.held == brush_for(button) {
                    self.held = None;
                }
            }
            MouseEventKind::Moved => {
                self.position = Some(pos);
            }
            _ => {}
        }
    }

    /// Drop any held button (e.g. when the terminal loses focus)
    pub fn release_all(&mut self) {
        self.held = None;
        self.trail.clear();
    }

    /// Edits to apply this tick: the recorded stroke, then the held position.
    pub fn update(&mut self) -> ArrayVec<PointerEdit, MAX_EDITS> {
        let mut edits: ArrayVec<PointerEdit, MAX_EDITS> = self.trail.drain(..).collect();

        if let (Some(brush), Some((column, row))) = (self.held, self.position) {
            let current = PointerEdit { brush, column, row };
            if edits.last() != Some(&current) {
                if edits.is_full() {
                    edits.pop();
                }
                edits.push(current);
            }
        }
        edits
    }

    fn record(&mut self, brush: Brush, (column, row): (u16, u16)) {
        let edit = PointerEdit { brush, column, row };
        if self.trail.last() == Some(&edit) {
            return;
        }
        if self.trail.is_full() {
            // Keep the newest position.
            self.trail.pop();
        }
        self.trail.push(edit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_idle_pointer_produces_no_edits() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Moved, 3, 4));
        assert_eq!(ph.position(), Some((3, 4)));
        assert!(ph.update().is_empty());
    }

    #[test]
    fn test_held_button_paints_every_tick() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));

        for _ in 0..3 {
            let edits = ph.update();
            assert_eq!(
                edits.as_slice(),
                &[PointerEdit {
                    brush: Brush::Paint,
                    column: 1,
                    row: 1
                }]
            );
        }

        ph.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1));
        assert_eq!(ph.held(), None);
        assert!(ph.update().is_empty());
    }

    #[test]
    fn test_drag_trail_is_replayed() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        ph.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Right), 1, 0));
        ph.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Right), 2, 0));

        let edits = ph.update();
        let cols: Vec<u16> = edits.iter().map(|e| e.column).collect();
        assert_eq!(cols, vec![0, 1, 2]);
        assert!(edits.iter().all(|e| e.brush == Brush::Erase));
    }

    #[test]
    fn test_click_released_before_tick_still_applies() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 7, 2));
        ph.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 7, 2));

        let edits = ph.update();
        assert_eq!(edits.len(), 1);
        assert_eq!((edits[0].column, edits[0].row), (7, 2));
        assert!(ph.update().is_empty());
    }

    #[test]
    fn test_trail_overflow_keeps_newest() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        for x in 1..100 {
            ph.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), x, 0));
        }
        let edits = ph.update();
        assert_eq!(edits.len(), MAX_EDITS);
        assert_eq!(edits.last().map(|e| e.column), Some(99));
    }

    #[test]
    fn test_middle_button_is_ignored() {
        let mut ph = PointerHandler::new();
        ph.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Middle), 5, 5));
        assert_eq!(ph.held(), None);
        assert!(ph.update().is_empty());
    }
}
