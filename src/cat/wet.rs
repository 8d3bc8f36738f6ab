//! Cat domain: the wet slowdown countdown.

/// Timed slowdown applied after touching a puddle.
///
/// `remaining` only counts down while no puddle is being touched. Any new or
/// continuing contact resets it to the full duration; it never stacks.
#[derive(Debug, Clone, Default)]
pub struct WetEffect {
    remaining: f32,
    contacts: u32,
}

/// What happened to the effect during a countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WetStep {
    Unchanged,
    DriedOff,
}

impl WetEffect {
    pub fn active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn in_contact(&self) -> bool {
        self.contacts > 0
    }

    /// Reset the countdown to exactly `duration`.
    pub fn soak(&mut self, duration: f32) {
        self.remaining = duration;
    }

    pub fn enter_contact(&mut self, duration: f32) {
        self.contacts += 1;
        self.soak(duration);
    }

    pub fn exit_contact(&mut self) {
        self.contacts = self.contacts.saturating_sub(1);
    }

    /// Advance the countdown by `dt` if nothing wet is being touched.
    pub fn tick(&mut self, dt: f32) -> WetStep {
        if self.in_contact() || !self.active() {
            return WetStep::Unchanged;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            WetStep::DriedOff
        } else {
            WetStep::Unchanged
        }
    }

    /// Drop the effect and any tracked contacts.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.contacts = 0;
    }
}
