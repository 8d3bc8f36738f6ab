//! Cat domain: pet counter and its easter-egg milestones.

/// Counts that pay out a hunger bonus of the same size. Exact match only.
pub const PET_MILESTONES: [u32; 7] = [21, 69, 112, 420, 666, 1000, 2021];

/// Session-local pet tally. Only ever goes up.
#[derive(Debug, Clone, Default)]
pub struct PetCounter {
    count: u32,
}

impl PetCounter {
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record one pet. Returns the reward if the new count hits a milestone.
    pub fn record(&mut self) -> Option<u32> {
        self.count = self.count.saturating_add(1);
        PET_MILESTONES.contains(&self.count).then_some(self.count)
    }
}
