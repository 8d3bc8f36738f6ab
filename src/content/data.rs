//! Data definitions for the cat configuration file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level shape of `assets/data/cat.ron`.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatConfig {
    pub tuning: CatTuning,
    pub options: GameOptions,
}

/// Physical tuning for the cat. Units are world units and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatTuning {
    /// Horizontal speed at full axis deflection
    pub speed: f32,
    /// Apex height of a standing jump
    pub jump_height: f32,
    /// Vertical acceleration, must be negative
    pub gravity: f32,
    /// Lower clamp for vertical velocity (terminal fall speed)
    pub min_fall_speed: f32,
    /// Upper clamp for vertical velocity
    pub max_rise_speed: f32,
    /// Radius of the grounding probe sphere
    pub probe_radius: f32,
    /// Vertical offset from the cat's center to its feet
    pub probe_offset_y: f32,
    /// Seconds the wet slowdown lasts after leaving a puddle
    pub wet_duration: f32,
    /// Seconds between death and control returning
    pub respawn_grace: f32,
    /// Max units per second the cat travels back to spawn
    pub respawn_speed: f32,
    /// Hunger drain rate while up and about
    pub active_hunger_rate: f32,
    /// Hunger drain rate while lying down
    pub resting_hunger_rate: f32,
}

impl Default for CatTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            jump_height: 1.5,
            gravity: -9.85,
            min_fall_speed: -30.0,
            max_rise_speed: 200.0,
            probe_radius: 0.28,
            probe_offset_y: -0.3,
            wet_duration: 3.0,
            respawn_grace: 3.0,
            respawn_speed: 1000.0,
            active_hunger_rate: 0.5,
            resting_hunger_rate: 0.25,
        }
    }
}

impl CatTuning {
    /// Launch speed that reaches `jump_height` at the apex under constant gravity.
    /// From v² = 2·|g|·h, written with signed gravity as sqrt(h · g · -2).
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * self.gravity * -2.0).sqrt()
    }
}

/// Player-facing multipliers chosen in the options menu.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameOptions {
    pub speed_rate: f32,
    pub hunger_rate: f32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            speed_rate: 1.0,
            hunger_rate: 1.0,
        }
    }
}
