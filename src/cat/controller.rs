//! Cat domain: the per-frame character state machine.

use bevy::prelude::*;

use crate::cat::pets::PetCounter;
use crate::cat::ports::{
    AnimationSink, BoundedMover, CatSignal, GroundingQuery, HungerSink, MenuSink,
};
use crate::cat::wet::{WetEffect, WetStep};
use crate::content::{CatConfig, CatTuning, GameOptions};
use crate::core::InputMode;

/// Vertical shortfall beyond which a move counts as blocked.
const BLOCKED_EPSILON: f32 = 1e-4;

/// Mutually exclusive actions. Only one is ever active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Jumping,
    Vocalizing,
    Lying,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Lifecycle {
    #[default]
    Alive,
    /// Dead and travelling back to spawn; control returns when `remaining` hits 0.
    Respawning { remaining: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Frame-local movement intent in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatVelocity {
    /// Normalized axis in [-1, 1], scaled by speed at integration time
    pub horizontal: f32,
    pub vertical: f32,
}

/// The playable cat. Owns its position; the host only mirrors it into the scene.
#[derive(Component, Debug, Clone)]
pub struct CatController {
    tuning: CatTuning,
    options: GameOptions,
    position: Vec3,
    spawn_position: Vec3,
    velocity: CatVelocity,
    grounded: bool,
    lifecycle: Lifecycle,
    action: ActionState,
    facing: Facing,
    wet: WetEffect,
    pets: PetCounter,
    collision_enabled: bool,
}

impl CatController {
    pub fn new(config: &CatConfig, spawn_position: Vec3) -> Self {
        Self {
            tuning: config.tuning,
            options: config.options,
            position: spawn_position,
            spawn_position,
            velocity: CatVelocity::default(),
            grounded: false,
            lifecycle: Lifecycle::Alive,
            action: ActionState::Idle,
            facing: Facing::Right,
            wet: WetEffect::default(),
            pets: PetCounter::default(),
            collision_enabled: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.spawn_position
    }

    pub fn velocity(&self) -> CatVelocity {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Alive)
    }

    pub fn is_respawning(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Respawning { .. })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn action(&self) -> ActionState {
        self.action
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn wet(&self) -> &WetEffect {
        &self.wet
    }

    pub fn pet_count(&self) -> u32 {
        self.pets.count()
    }

    pub fn collision_enabled(&self) -> bool {
        self.collision_enabled
    }

    pub fn tuning(&self) -> &CatTuning {
        &self.tuning
    }

    /// Where the grounding probe sits this frame.
    pub fn probe_center(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.tuning.probe_offset_y, 0.0)
    }

    /// Horizontal displacement for one tick at the given axis value.
    pub fn horizontal_step(&self, axis: f32, dt: f32) -> f32 {
        let step = axis * dt * self.tuning.speed * self.options.speed_rate;
        if self.wet.active() { step / 2.0 } else { step }
    }

    /// Advance one frame.
    pub fn tick(
        &mut self,
        dt: f32,
        axis: f32,
        ground: &impl GroundingQuery,
        mover: &mut impl BoundedMover,
        signals: &mut impl AnimationSink,
        hunger: &mut impl HungerSink,
    ) {
        if let Lifecycle::Respawning { remaining } = self.lifecycle {
            self.tick_respawn(dt, remaining, mover, signals);
            return;
        }

        signals.emit(CatSignal::AnimSpeed(self.velocity.horizontal.abs()));
        signals.emit(CatSignal::JumpSpeed(self.velocity.vertical));

        let was_grounded = self.grounded;
        self.grounded = ground.touches_ground(self.probe_center(), self.tuning.probe_radius);

        if self.grounded {
            if !was_grounded {
                self.land(signals);
            }
        } else {
            self.velocity.vertical = (self.velocity.vertical + self.tuning.gravity * dt)
                .clamp(self.tuning.min_fall_speed, self.tuning.max_rise_speed);
        }

        if self.action != ActionState::Vocalizing && self.is_alive() {
            self.velocity.horizontal = axis.clamp(-1.0, 1.0);
        }

        let displacement = Vec3::new(
            self.horizontal_step(self.velocity.horizontal, dt),
            self.velocity.vertical * dt,
            0.0,
        );
        let from = self.position;
        self.position = mover.move_and_slide(from, displacement);

        // Blocked by a floor or ceiling: drop the leftover vertical speed so it
        // can't carry into the next airborne phase.
        let moved_y = self.position.y - from.y;
        if (displacement.y - moved_y).abs() > BLOCKED_EPSILON {
            self.velocity.vertical = 0.0;
        }

        // A jump capped by a low ceiling never leaves the probe's reach
        if self.grounded && self.action == ActionState::Jumping && self.velocity.vertical <= 0.0 {
            self.land(signals);
        }

        if self.velocity.horizontal < 0.0 {
            self.facing = Facing::Left;
        } else if self.velocity.horizontal > 0.0 {
            self.facing = Facing::Right;
        }

        if self.wet.tick(dt) == WetStep::DriedOff {
            debug!("Cat dried off");
            signals.emit(CatSignal::CatWet(false));
        }

        let rate = if self.action == ActionState::Lying {
            self.tuning.resting_hunger_rate
        } else {
            self.tuning.active_hunger_rate
        };
        hunger.set_hunger_speed(rate * self.options.hunger_rate);

        // Any sideways input gets the cat back up
        if self.velocity.horizontal != 0.0 && self.action == ActionState::Lying {
            self.action = ActionState::Idle;
        }
    }

    fn land(&mut self, signals: &mut impl AnimationSink) {
        debug!("Cat landed at {:?}", self.position);
        if self.action == ActionState::Jumping {
            self.action = ActionState::Idle;
            signals.emit(CatSignal::IsJumping(false));
            signals.emit(CatSignal::SpacePressed(false));
        }
    }

    fn tick_respawn(
        &mut self,
        dt: f32,
        remaining: f32,
        mover: &mut impl BoundedMover,
        signals: &mut impl AnimationSink,
    ) {
        self.position = move_towards(
            self.position,
            self.spawn_position,
            self.tuning.respawn_speed * dt,
        );

        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.lifecycle = Lifecycle::Respawning { remaining };
            return;
        }

        self.lifecycle = Lifecycle::Alive;
        self.collision_enabled = true;
        mover.set_collision_enabled(true);
        if self.wet.active() {
            signals.emit(CatSignal::CatWet(false));
        }
        self.wet.clear();
        self.grounded = false;
        info!("Cat respawned at {:?}", self.position);
    }

    fn can_act(&self) -> bool {
        self.grounded && self.is_alive()
    }

    pub fn on_jump(&mut self, signals: &mut impl AnimationSink) {
        if !self.can_act() {
            debug!(
                "Jump ignored: grounded={}, alive={}",
                self.grounded,
                self.is_alive()
            );
            return;
        }

        self.velocity.vertical = self.tuning.jump_velocity();
        self.action = ActionState::Jumping;
        signals.emit(CatSignal::IsJumping(true));
        signals.emit(CatSignal::SpacePressed(true));
        signals.emit(CatSignal::MeowSfx(false));
    }

    pub fn on_vocalize(&mut self, signals: &mut impl AnimationSink) {
        if !self.can_act() {
            debug!("Meow ignored: not grounded or not alive");
            return;
        }

        self.velocity.horizontal = 0.0;
        self.action = ActionState::Vocalizing;
        signals.emit(CatSignal::MeowButton);
        signals.emit(CatSignal::MeowSfx(true));
    }

    pub fn on_lie_down(&mut self, signals: &mut impl AnimationSink) {
        if !self.can_act() {
            debug!("Lie down ignored: not grounded or not alive");
            return;
        }
        // Only a jump ends a meow
        if self.action == ActionState::Vocalizing {
            debug!("Lie down ignored while meowing");
            return;
        }

        self.velocity.horizontal = 0.0;
        self.action = ActionState::Lying;
        signals.emit(CatSignal::LayButton);
    }

    /// Petting works mid-air too; only lying and meowing block it.
    pub fn on_pet(&mut self, signals: &mut impl AnimationSink, hunger: &mut impl HungerSink) {
        if matches!(self.action, ActionState::Vocalizing | ActionState::Lying) {
            debug!("Pet ignored while {:?}", self.action);
            return;
        }

        signals.emit(CatSignal::PetCat);
        if let Some(reward) = self.pets.record() {
            info!("Pet milestone {} reached, feeding {}", self.pets.count(), reward);
            hunger.add_hunger(reward as f32);
        }
    }

    pub fn on_pause(&mut self, hunger: &mut impl HungerSink, menu: &mut impl MenuSink) {
        let visible = !menu.pause_overlay_visible();
        menu.set_pause_overlay(visible);

        let paused = hunger.pressed_pause();
        menu.set_input_mode(if paused {
            InputMode::Menu
        } else {
            InputMode::Movement
        });
        info!("Pause toggled: paused={}", paused);
    }

    pub fn on_goal_reached(&mut self, hunger: &mut impl HungerSink, menu: &mut impl MenuSink) {
        let show_win = !menu.pause_overlay_visible();
        menu.set_win_overlay(show_win);
        hunger.pressed_pause();
        menu.set_input_mode(InputMode::Menu);
        info!("Goal reached with {} pets", self.pets.count());
    }

    pub fn on_hazard_contact(
        &mut self,
        mover: &mut impl BoundedMover,
        signals: &mut impl AnimationSink,
        hunger: &mut impl HungerSink,
    ) {
        if !self.is_alive() {
            return;
        }

        // The meow lock outlives death; only its sound stops
        if self.action == ActionState::Vocalizing {
            signals.emit(CatSignal::MeowSfx(false));
        } else {
            self.action = ActionState::Idle;
        }
        self.lifecycle = Lifecycle::Respawning {
            remaining: self.tuning.respawn_grace,
        };
        self.velocity = CatVelocity::default();
        self.collision_enabled = false;
        mover.set_collision_enabled(false);
        hunger.cats_update();
        info!(
            "Cat died at {:?}, respawning in {}s",
            self.position, self.tuning.respawn_grace
        );
    }

    pub fn on_liquid_enter(&mut self, signals: &mut impl AnimationSink) {
        self.wet.enter_contact(self.tuning.wet_duration);
        signals.emit(CatSignal::CatWet(true));
    }

    pub fn on_liquid_stay(&mut self, signals: &mut impl AnimationSink) {
        self.wet.soak(self.tuning.wet_duration);
        signals.emit(CatSignal::CatWet(true));
    }

    pub fn on_liquid_exit(&mut self) {
        self.wet.exit_contact();
    }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + delta / distance * max_delta
    }
}
