/// Per-frame copy of simulation metadata for renderers.
///
/// The grid itself is not copied; views borrow it from the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimSnapshot {
    pub width: u32,
    pub height: u32,
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub step_pending: bool,
    pub seed: u64,
    /// Bumped on every change to the displayed grid (steps and edits).
    pub revision: u64,
}

impl SimSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when the next tick will not step, so the grid cannot change on its own.
    pub fn is_static(&self) -> bool {
        !self.running && !self.step_pending
    }

    /// FNV-1a over the fields a view displays.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let words = [
            self.width as u64,
            self.height as u64,
            self.generation,
            self.population as u64,
            self.running as u64 | (self.step_pending as u64) << 1,
            self.revision,
        ];
        for word in words {
            for b in word.to_le_bytes() {
                h ^= b as u64;
                h = h.wrapping_mul(0x00000100000001B3);
            }
        }
        h
    }
}
