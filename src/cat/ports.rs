//! Cat domain: capability traits the controller talks to.
//!
//! The controller never touches the physics world, the animator or the HUD
//! directly. The host hands it implementations of these traits on every call,
//! so the core can be driven from a Bevy system or a plain test loop alike.

use bevy::math::Vec3;

use crate::core::InputMode;

/// Overlap test against ground-classified colliders.
pub trait GroundingQuery {
    /// True iff a sphere at `center` with `radius` touches any ground collider.
    fn touches_ground(&self, center: Vec3, radius: f32) -> bool;
}

/// Resolved movement with collision sliding.
pub trait BoundedMover {
    /// Move from `from` by `displacement`, stopping or sliding at colliders.
    /// Returns the resolved position.
    fn move_and_slide(&mut self, from: Vec3, displacement: Vec3) -> Vec3;

    /// Toggle collision response for the character's own collider.
    fn set_collision_enabled(&mut self, enabled: bool);
}

/// Named animation, audio and particle signals. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatSignal {
    /// Absolute horizontal intent, drives walk/idle blending
    AnimSpeed(f32),
    /// Vertical velocity, drives rise/fall frames
    JumpSpeed(f32),
    IsJumping(bool),
    SpacePressed(bool),
    MeowButton,
    LayButton,
    PetCat,
    CatWet(bool),
    /// Start or stop the meow particle/sound effect
    MeowSfx(bool),
}

pub trait AnimationSink {
    fn emit(&mut self, signal: CatSignal);
}

impl AnimationSink for Vec<CatSignal> {
    fn emit(&mut self, signal: CatSignal) {
        self.push(signal);
    }
}

/// The hunger meter and pause toggle owned by the HUD.
pub trait HungerSink {
    fn add_hunger(&mut self, amount: f32);
    fn set_hunger_speed(&mut self, rate: f32);
    /// Called when a cat is lost and the next one takes over.
    fn cats_update(&mut self);
    /// Toggle pause and report whether the game is now paused.
    fn pressed_pause(&mut self) -> bool;
}

/// Pause and win overlays plus the active input map.
pub trait MenuSink {
    fn pause_overlay_visible(&self) -> bool;
    fn set_pause_overlay(&mut self, visible: bool);
    fn set_win_overlay(&mut self, visible: bool);
    fn set_input_mode(&mut self, mode: InputMode);
}
