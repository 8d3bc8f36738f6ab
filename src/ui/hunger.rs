//! UI domain: the hunger meter and the pause flag it owns.

use bevy::prelude::*;

use crate::cat::HungerSink;

pub(crate) const STARTING_HUNGER: f32 = 100.0;

/// Fullness of the current cat. Drains over time; pets and food refill it.
/// Milestone rewards may push it past `max_hunger`.
#[derive(Resource, Debug)]
pub struct HungerMeter {
    pub hunger: f32,
    pub max_hunger: f32,
    /// Drain per second, set every frame by the cat
    pub hunger_speed: f32,
    pub cats_lost: u32,
    paused: bool,
}

impl Default for HungerMeter {
    fn default() -> Self {
        Self {
            hunger: STARTING_HUNGER,
            max_hunger: STARTING_HUNGER,
            hunger_speed: 0.5,
            cats_lost: 0,
            paused: false,
        }
    }
}

impl HungerMeter {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fill level for the HUD bar, clamped to [0, 1].
    pub fn percent(&self) -> f32 {
        if self.max_hunger <= 0.0 {
            return 0.0;
        }
        (self.hunger / self.max_hunger).clamp(0.0, 1.0)
    }

    pub fn drain(&mut self, dt: f32) {
        self.hunger = (self.hunger - self.hunger_speed * dt).max(0.0);
    }

    pub fn is_starving(&self) -> bool {
        self.hunger <= 0.0
    }
}

impl HungerSink for HungerMeter {
    fn add_hunger(&mut self, amount: f32) {
        self.hunger += amount;
    }

    fn set_hunger_speed(&mut self, rate: f32) {
        self.hunger_speed = rate;
    }

    fn cats_update(&mut self) {
        self.cats_lost += 1;
        self.hunger = self.max_hunger;
    }

    fn pressed_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(meter: Res<HungerMeter>) -> bool {
    !meter.is_paused()
}

pub(crate) fn drain_hunger(time: Res<Time>, mut meter: ResMut<HungerMeter>) {
    let was_starving = meter.is_starving();
    meter.drain(time.delta_secs());

    if meter.is_starving() && !was_starving {
        warn!("The cat is starving - pet it to feed it");
    }
}
