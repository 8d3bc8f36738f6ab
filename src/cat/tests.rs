//! Cat domain: tests for the controller state machine and its parts.

use bevy::math::Vec3;

use super::controller::{ActionState, CatController, Facing, Lifecycle, move_towards};
use super::pets::{PET_MILESTONES, PetCounter};
use super::ports::{AnimationSink, BoundedMover, CatSignal, GroundingQuery, HungerSink};
use super::wet::{WetEffect, WetStep};
use crate::cat::MenuSink;
use crate::content::CatConfig;
use crate::core::{InputMode, MenuOverlays};

// -----------------------------------------------------------------------------
// Test doubles
// -----------------------------------------------------------------------------

/// Cat half-height; with the floor surface at y = 0 the cat rests at this height.
const REST_Y: f32 = 0.3;
const DT: f32 = 0.1;

/// An infinite floor whose top surface sits at y = 0.
struct FlatFloor;

impl GroundingQuery for FlatFloor {
    fn touches_ground(&self, center: Vec3, radius: f32) -> bool {
        center.y - radius <= 0.0
    }
}

/// Nothing to stand on anywhere.
struct Void;

impl GroundingQuery for Void {
    fn touches_ground(&self, _center: Vec3, _radius: f32) -> bool {
        false
    }
}

/// Stops the cat from sinking below the floor and records collision toggles.
#[derive(Default)]
struct FloorMover {
    no_floor: bool,
    /// Highest resting height the cat can reach, if anything is overhead
    ceiling: Option<f32>,
    disabled: bool,
    toggles: Vec<bool>,
}

impl FloorMover {
    fn free_fall() -> Self {
        Self {
            no_floor: true,
            ..Default::default()
        }
    }
}

impl BoundedMover for FloorMover {
    fn move_and_slide(&mut self, from: Vec3, displacement: Vec3) -> Vec3 {
        let mut to = from + displacement;
        if !self.no_floor && !self.disabled && to.y < REST_Y {
            to.y = REST_Y;
        }
        if let Some(ceiling) = self.ceiling {
            to.y = to.y.min(ceiling);
        }
        to
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
        self.toggles.push(enabled);
    }
}

#[derive(Default)]
struct RecordingHunger {
    rewards: Vec<f32>,
    speed: f32,
    cats_updates: u32,
    paused: bool,
}

impl HungerSink for RecordingHunger {
    fn add_hunger(&mut self, amount: f32) {
        self.rewards.push(amount);
    }

    fn set_hunger_speed(&mut self, rate: f32) {
        self.speed = rate;
    }

    fn cats_update(&mut self) {
        self.cats_updates += 1;
    }

    fn pressed_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

struct Rig {
    cat: CatController,
    mover: FloorMover,
    signals: Vec<CatSignal>,
    hunger: RecordingHunger,
}

impl Rig {
    /// A cat standing still on the floor at the origin.
    fn on_floor() -> Self {
        let mut rig = Self {
            cat: CatController::new(&CatConfig::default(), Vec3::new(0.0, REST_Y, 0.0)),
            mover: FloorMover::default(),
            signals: Vec::new(),
            hunger: RecordingHunger::default(),
        };
        rig.tick(0.0);
        assert!(rig.cat.is_grounded());
        rig.signals.clear();
        rig
    }

    fn tick(&mut self, axis: f32) {
        self.cat.tick(
            DT,
            axis,
            &FlatFloor,
            &mut self.mover,
            &mut self.signals,
            &mut self.hunger,
        );
    }

    fn tick_in_void(&mut self, axis: f32) {
        self.cat.tick(
            DT,
            axis,
            &Void,
            &mut self.mover,
            &mut self.signals,
            &mut self.hunger,
        );
    }

    fn kill(&mut self) {
        self.cat
            .on_hazard_contact(&mut self.mover, &mut self.signals, &mut self.hunger);
    }

    fn pet(&mut self) {
        self.cat.on_pet(&mut self.signals, &mut self.hunger);
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// -----------------------------------------------------------------------------
// Vertical integrator
// -----------------------------------------------------------------------------

#[test]
fn test_airborne_fall_speed_decreases_until_clamped() {
    let mut rig = Rig::on_floor();
    rig.mover = FloorMover::free_fall();
    let tuning = *rig.cat.tuning();

    let mut previous = rig.cat.velocity().vertical;
    let mut hit_floor_speed = false;
    for _ in 0..60 {
        rig.tick_in_void(0.0);
        let current = rig.cat.velocity().vertical;

        assert!(current <= tuning.max_rise_speed);
        assert!(current >= tuning.min_fall_speed);
        if hit_floor_speed {
            assert_eq!(current, tuning.min_fall_speed);
        } else {
            assert!(current < previous, "{} should be below {}", current, previous);
        }
        hit_floor_speed = current == tuning.min_fall_speed;
        previous = current;
    }
    assert!(hit_floor_speed);
}

#[test]
fn test_landing_clears_residual_fall_speed() {
    let mut rig = Rig::on_floor();
    // Drop from a height and let the floor catch the cat
    let mut cat = CatController::new(&CatConfig::default(), Vec3::new(0.0, 3.0, 0.0));
    for _ in 0..40 {
        cat.tick(
            DT,
            0.0,
            &FlatFloor,
            &mut rig.mover,
            &mut rig.signals,
            &mut rig.hunger,
        );
    }

    assert!(cat.is_grounded());
    assert!(approx(cat.position().y, REST_Y));
    assert_eq!(cat.velocity().vertical, 0.0);
}

#[test]
fn test_jump_launches_with_closed_form_velocity() {
    let mut rig = Rig::on_floor();
    rig.cat.on_jump(&mut rig.signals);

    let tuning = *rig.cat.tuning();
    let expected = (tuning.jump_height * tuning.gravity * -2.0).sqrt();
    assert!(approx(rig.cat.velocity().vertical, expected));
    assert_eq!(rig.cat.action(), ActionState::Jumping);
    assert!(rig.signals.contains(&CatSignal::IsJumping(true)));
    assert!(rig.signals.contains(&CatSignal::SpacePressed(true)));
    assert!(rig.signals.contains(&CatSignal::MeowSfx(false)));
}

#[test]
fn test_jump_ignored_while_airborne() {
    let mut rig = Rig::on_floor();
    rig.mover = FloorMover::free_fall();
    rig.tick_in_void(0.0);
    let before = rig.cat.velocity().vertical;
    rig.signals.clear();

    rig.cat.on_jump(&mut rig.signals);

    assert_eq!(rig.cat.velocity().vertical, before);
    assert_eq!(rig.cat.action(), ActionState::Idle);
    assert!(rig.signals.is_empty());
}

#[test]
fn test_jump_ignored_while_dead() {
    let mut rig = Rig::on_floor();
    rig.kill();
    rig.signals.clear();

    rig.cat.on_jump(&mut rig.signals);

    assert_eq!(rig.cat.velocity().vertical, 0.0);
    assert!(rig.signals.is_empty());
}

#[test]
fn test_jump_lands_back_to_idle() {
    let mut rig = Rig::on_floor();
    rig.cat.on_jump(&mut rig.signals);

    let mut left_ground = false;
    for _ in 0..60 {
        rig.tick(0.0);
        left_ground |= !rig.cat.is_grounded();
        if left_ground && rig.cat.is_grounded() {
            break;
        }
    }

    assert!(left_ground);
    assert!(rig.cat.is_grounded());
    assert_eq!(rig.cat.action(), ActionState::Idle);
    assert!(rig.signals.contains(&CatSignal::IsJumping(false)));
}

// -----------------------------------------------------------------------------
// Horizontal locomotion and wet effect
// -----------------------------------------------------------------------------

#[test]
fn test_wet_halves_horizontal_displacement() {
    let mut dry = Rig::on_floor();
    let mut wet = Rig::on_floor();
    wet.cat.on_liquid_enter(&mut wet.signals);
    assert!(wet.signals.contains(&CatSignal::CatWet(true)));

    dry.tick(1.0);
    wet.tick(1.0);

    let dry_dx = dry.cat.position().x;
    let wet_dx = wet.cat.position().x;
    assert!(dry_dx > 0.0);
    assert!(approx(wet_dx, dry_dx / 2.0));
    assert!(approx(dry_dx, DT * dry.cat.tuning().speed));
}

#[test]
fn test_axis_is_clamped() {
    let mut rig = Rig::on_floor();
    rig.tick(5.0);

    assert_eq!(rig.cat.velocity().horizontal, 1.0);
    assert!(approx(rig.cat.position().x, DT * rig.cat.tuning().speed));
}

#[test]
fn test_wet_countdown_expires_after_duration() {
    let mut rig = Rig::on_floor();
    rig.cat.on_liquid_enter(&mut rig.signals);
    rig.cat.on_liquid_exit();

    let duration = rig.cat.tuning().wet_duration;
    let mut elapsed = 0.0;
    let mut dried_at = None;
    for _ in 0..40 {
        rig.signals.clear();
        rig.tick(0.0);
        elapsed += DT;
        if !rig.cat.wet().active() {
            // The visual is cleared on the very tick the effect ends
            assert!(rig.signals.contains(&CatSignal::CatWet(false)));
            dried_at = Some(elapsed);
            break;
        }
        assert!(!rig.signals.contains(&CatSignal::CatWet(false)));
    }

    let dried_at = dried_at.expect("wet effect should expire");
    assert!((dried_at - duration).abs() <= DT + 1e-4);
}

#[test]
fn test_wet_holds_while_in_puddle_and_resets_without_stacking() {
    let mut rig = Rig::on_floor();
    rig.cat.on_liquid_enter(&mut rig.signals);

    for _ in 0..50 {
        rig.tick(0.0);
        rig.cat.on_liquid_stay(&mut rig.signals);
    }
    assert!(approx(rig.cat.wet().remaining(), 3.0));
    assert_eq!(rig.signals.last(), Some(&CatSignal::CatWet(true)));

    rig.cat.on_liquid_exit();
    rig.tick(0.0);
    rig.tick(0.0);
    assert!(rig.cat.wet().remaining() < 3.0);

    rig.cat.on_liquid_enter(&mut rig.signals);
    rig.cat.on_liquid_enter(&mut rig.signals);
    assert_eq!(rig.cat.wet().remaining(), 3.0);
}

#[test]
fn test_wet_effect_tracks_overlapping_puddles() {
    let mut wet = WetEffect::default();
    wet.enter_contact(3.0);
    wet.enter_contact(3.0);
    wet.exit_contact();

    // Still standing in the second puddle
    assert_eq!(wet.tick(1.0), WetStep::Unchanged);
    assert_eq!(wet.remaining(), 3.0);

    wet.exit_contact();
    assert_eq!(wet.tick(1.0), WetStep::Unchanged);
    assert_eq!(wet.tick(2.5), WetStep::DriedOff);
    assert!(!wet.active());
    assert_eq!(wet.remaining(), 0.0);
}

#[test]
fn test_facing_flips_only_on_nonzero_input() {
    let mut rig = Rig::on_floor();
    assert_eq!(rig.cat.facing(), Facing::Right);

    rig.tick(-0.5);
    assert_eq!(rig.cat.facing(), Facing::Left);

    rig.tick(0.0);
    assert_eq!(rig.cat.facing(), Facing::Left);

    rig.tick(0.2);
    assert_eq!(rig.cat.facing(), Facing::Right);
}

// -----------------------------------------------------------------------------
// Action state controller
// -----------------------------------------------------------------------------

#[test]
fn test_lie_down_then_jump_ends_jumping() {
    let mut rig = Rig::on_floor();
    rig.cat.on_lie_down(&mut rig.signals);
    assert_eq!(rig.cat.action(), ActionState::Lying);
    assert!(rig.signals.contains(&CatSignal::LayButton));

    rig.cat.on_jump(&mut rig.signals);
    assert_eq!(rig.cat.action(), ActionState::Jumping);
}

#[test]
fn test_lying_halves_hunger_drain_and_movement_gets_up() {
    let mut rig = Rig::on_floor();
    rig.cat.on_lie_down(&mut rig.signals);

    rig.tick(0.0);
    assert_eq!(rig.hunger.speed, 0.25);
    assert_eq!(rig.cat.action(), ActionState::Lying);

    // Lying doesn't pin the cat: input moves it and ends the lie-down
    rig.tick(1.0);
    assert_eq!(rig.cat.action(), ActionState::Idle);
    assert!(rig.cat.position().x > 0.0);

    rig.tick(0.0);
    assert_eq!(rig.hunger.speed, 0.5);
}

#[test]
fn test_vocalize_suppresses_movement_until_jump() {
    let mut rig = Rig::on_floor();
    rig.tick(1.0);
    let x = rig.cat.position().x;

    rig.cat.on_vocalize(&mut rig.signals);
    assert_eq!(rig.cat.action(), ActionState::Vocalizing);
    assert_eq!(rig.cat.velocity().horizontal, 0.0);
    assert!(rig.signals.contains(&CatSignal::MeowButton));
    assert!(rig.signals.contains(&CatSignal::MeowSfx(true)));

    for _ in 0..5 {
        rig.tick(1.0);
    }
    assert_eq!(rig.cat.position().x, x);

    rig.signals.clear();
    rig.cat.on_jump(&mut rig.signals);
    assert!(rig.signals.contains(&CatSignal::MeowSfx(false)));
    rig.tick(1.0);
    assert!(rig.cat.position().x > x);
}

#[test]
fn test_lie_down_cannot_end_a_meow() {
    let mut rig = Rig::on_floor();
    rig.cat.on_vocalize(&mut rig.signals);
    rig.signals.clear();

    rig.cat.on_lie_down(&mut rig.signals);
    assert_eq!(rig.cat.action(), ActionState::Vocalizing);
    assert!(rig.signals.is_empty());

    let x = rig.cat.position().x;
    rig.tick(1.0);
    rig.tick(1.0);
    assert_eq!(rig.cat.position().x, x);
    assert_eq!(rig.cat.action(), ActionState::Vocalizing);
}

#[test]
fn test_jump_under_low_ceiling_returns_to_idle() {
    let mut rig = Rig::on_floor();
    rig.mover.ceiling = Some(REST_Y + 0.19);
    rig.cat.on_jump(&mut rig.signals);
    rig.signals.clear();

    rig.tick(0.0);

    // The bump stays inside probe range, so the cat never reads as airborne
    assert!(rig.cat.is_grounded());
    assert!(approx(rig.cat.position().y, REST_Y + 0.19));
    assert_eq!(rig.cat.velocity().vertical, 0.0);
    assert_eq!(rig.cat.action(), ActionState::Idle);
    assert!(rig.signals.contains(&CatSignal::IsJumping(false)));
    assert!(rig.signals.contains(&CatSignal::SpacePressed(false)));

    // And it can jump again
    rig.cat.on_jump(&mut rig.signals);
    assert_eq!(rig.cat.action(), ActionState::Jumping);
}

#[test]
fn test_ceiling_bump_clears_rising_speed() {
    let mut rig = Rig::on_floor();
    rig.mover.ceiling = Some(REST_Y + 0.4);
    rig.cat.on_jump(&mut rig.signals);

    rig.tick(0.0);

    assert_eq!(rig.cat.velocity().vertical, 0.0);
    assert!(approx(rig.cat.position().y, REST_Y + 0.4));
}

#[test]
fn test_actions_ignored_in_midair() {
    let mut rig = Rig::on_floor();
    rig.mover = FloorMover::free_fall();
    rig.tick_in_void(0.0);
    rig.signals.clear();

    rig.cat.on_vocalize(&mut rig.signals);
    rig.cat.on_lie_down(&mut rig.signals);

    assert_eq!(rig.cat.action(), ActionState::Idle);
    assert!(rig.signals.is_empty());
}

// -----------------------------------------------------------------------------
// Pet counter
// -----------------------------------------------------------------------------

#[test]
fn test_pet_milestone_fires_exactly_once() {
    let mut rig = Rig::on_floor();
    for _ in 0..20 {
        rig.pet();
    }
    assert!(rig.hunger.rewards.is_empty());

    rig.pet();
    assert_eq!(rig.cat.pet_count(), 21);
    assert_eq!(rig.hunger.rewards, vec![21.0]);

    rig.pet();
    assert_eq!(rig.hunger.rewards, vec![21.0]);
}

#[test]
fn test_pet_works_midair_but_not_while_lying_or_meowing() {
    let mut rig = Rig::on_floor();
    rig.cat.on_lie_down(&mut rig.signals);
    rig.pet();
    assert_eq!(rig.cat.pet_count(), 0);

    rig.cat.on_vocalize(&mut rig.signals);
    rig.pet();
    assert_eq!(rig.cat.pet_count(), 0);

    rig.cat.on_jump(&mut rig.signals);
    rig.signals.clear();
    rig.pet();
    assert_eq!(rig.cat.pet_count(), 1);
    assert_eq!(rig.signals, vec![CatSignal::PetCat]);
}

#[test]
fn test_pet_counter_pays_every_milestone_once() {
    let mut counter = PetCounter::default();
    let mut rewards = Vec::new();
    for _ in 0..2500 {
        if let Some(reward) = counter.record() {
            rewards.push(reward);
        }
    }

    assert_eq!(rewards, PET_MILESTONES.to_vec());
    assert_eq!(counter.count(), 2500);
}

// -----------------------------------------------------------------------------
// Death and respawn
// -----------------------------------------------------------------------------

#[test]
fn test_death_respawn_round_trip() {
    let mut rig = Rig::on_floor();
    for _ in 0..10 {
        rig.tick(1.0);
    }
    assert!(rig.cat.position().x > 1.0);

    rig.kill();
    assert!(!rig.cat.is_alive());
    assert!(rig.cat.is_respawning());
    assert!(!rig.cat.collision_enabled());
    assert_eq!(rig.mover.toggles, vec![false]);
    assert_eq!(rig.hunger.cats_updates, 1);
    assert_eq!(rig.cat.velocity().horizontal, 0.0);

    let grace = rig.cat.tuning().respawn_grace;
    let mut ticks = 0;
    while rig.cat.is_respawning() && ticks < 100 {
        // Input is ignored for the whole sequence
        rig.tick(1.0);
        ticks += 1;
        if rig.cat.is_respawning() {
            assert!(!rig.cat.is_alive());
        }
    }

    let elapsed = ticks as f32 * DT;
    assert!((elapsed - grace).abs() <= DT + 1e-4);
    assert!(rig.cat.is_alive());
    assert!(rig.cat.collision_enabled());
    assert_eq!(rig.mover.toggles, vec![false, true]);
    assert_eq!(rig.cat.position(), rig.cat.spawn_position());
}

#[test]
fn test_respawn_travel_is_bounded_per_tick() {
    let mut rig = Rig::on_floor();
    rig.mover = FloorMover::free_fall();
    for _ in 0..100 {
        rig.tick_in_void(0.0);
    }
    let fallen = rig.cat.position();

    rig.kill();
    rig.tick(0.0);

    let step = rig.cat.tuning().respawn_speed * DT;
    let distance = (fallen - rig.cat.spawn_position()).length();
    let moved = (rig.cat.position() - fallen).length();
    assert!(moved <= step + 1e-2);
    assert!((moved - distance.min(step)).abs() < 1e-2);
}

#[test]
fn test_hazard_ignored_while_respawning() {
    let mut rig = Rig::on_floor();
    rig.kill();
    rig.tick(0.0);
    let lifecycle = rig.cat.lifecycle();

    rig.kill();
    assert_eq!(rig.cat.lifecycle(), lifecycle);
    assert_eq!(rig.hunger.cats_updates, 1);
    assert_eq!(rig.mover.toggles, vec![false]);
}

#[test]
fn test_death_while_meowing_stops_sfx_and_clears_wet_on_respawn() {
    let mut rig = Rig::on_floor();
    rig.cat.on_liquid_enter(&mut rig.signals);
    rig.cat.on_liquid_exit();
    rig.cat.on_vocalize(&mut rig.signals);
    rig.signals.clear();

    rig.kill();
    assert!(rig.signals.contains(&CatSignal::MeowSfx(false)));

    while rig.cat.is_respawning() {
        rig.tick(0.0);
    }
    assert!(!rig.cat.wet().active());
    assert!(rig.signals.contains(&CatSignal::CatWet(false)));
    assert_eq!(rig.cat.lifecycle(), Lifecycle::Alive);
}

#[test]
fn test_meow_lock_survives_respawn_until_jump() {
    let mut rig = Rig::on_floor();
    rig.cat.on_vocalize(&mut rig.signals);
    rig.kill();
    while rig.cat.is_respawning() {
        rig.tick(0.0);
    }
    assert_eq!(rig.cat.action(), ActionState::Vocalizing);

    // Settle back onto the floor, still unable to walk
    rig.tick(1.0);
    let x = rig.cat.position().x;
    for _ in 0..5 {
        rig.tick(1.0);
    }
    assert!(rig.cat.is_grounded());
    assert_eq!(rig.cat.position().x, x);

    rig.cat.on_jump(&mut rig.signals);
    rig.tick(1.0);
    assert!(rig.cat.position().x > x);
}

#[test]
fn test_death_resets_other_actions_to_idle() {
    let mut rig = Rig::on_floor();
    rig.cat.on_lie_down(&mut rig.signals);

    rig.kill();
    assert_eq!(rig.cat.action(), ActionState::Idle);
}

#[test]
fn test_move_towards_never_overshoots() {
    let target = Vec3::new(3.0, 4.0, 0.0);
    assert_eq!(move_towards(Vec3::ZERO, target, 10.0), target);

    let partial = move_towards(Vec3::ZERO, target, 2.5);
    assert!(approx(partial.length(), 2.5));
    assert!(approx(partial.x / partial.y, 0.75));

    assert_eq!(move_towards(target, target, 0.0), target);
}

// -----------------------------------------------------------------------------
// Pause and goal
// -----------------------------------------------------------------------------

#[test]
fn test_pause_toggles_overlay_and_input_mode() {
    let mut rig = Rig::on_floor();
    let mut menu = MenuOverlays::default();

    rig.cat.on_pause(&mut rig.hunger, &mut menu);
    assert!(menu.pause_overlay_visible());
    assert!(rig.hunger.paused);
    assert_eq!(menu.input_mode, InputMode::Menu);

    rig.cat.on_pause(&mut rig.hunger, &mut menu);
    assert!(!menu.pause_overlay_visible());
    assert!(!rig.hunger.paused);
    assert_eq!(menu.input_mode, InputMode::Movement);
}

#[test]
fn test_goal_shows_win_overlay_and_locks_movement() {
    let mut rig = Rig::on_floor();
    let mut menu = MenuOverlays::default();

    rig.cat.on_goal_reached(&mut rig.hunger, &mut menu);

    assert!(menu.win_visible);
    assert!(!menu.accepts_movement());
    assert!(rig.hunger.paused);
}

#[test]
fn test_signal_vec_records_in_order() {
    let mut signals: Vec<CatSignal> = Vec::new();
    signals.emit(CatSignal::PetCat);
    signals.emit(CatSignal::CatWet(true));

    assert_eq!(signals, vec![CatSignal::PetCat, CatSignal::CatWet(true)]);
}
