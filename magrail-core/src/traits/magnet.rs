//! Electromagnet bank trait

/// A fixed row of electromagnets addressed by zero-based slot
pub trait MagnetBank {
    /// Number of magnets in the bank
    fn count(&self) -> usize;

    /// Energize (`true`) or release (`false`) one magnet
    ///
    /// Slots at or past [`count`](Self::count) are ignored.
    fn set(&mut self, slot: usize, on: bool);

    /// Check whether a magnet is energized
    fn is_on(&self, slot: usize) -> bool;

    /// Set every magnet to the same state
    fn set_all(&mut self, on: bool) {
        for slot in 0..self.count() {
            self.set(slot, on);
        }
    }
}
