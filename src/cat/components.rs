//! Cat domain: markers and physics layers for the cat and its surroundings.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms the cat can stand on
    Ground,
    /// Solid surfaces that block but don't ground
    Wall,
    /// The cat itself
    Cat,
    /// Puddles - slow the cat down
    Liquid,
    /// Spikes, pits and anything else that kills
    Hazard,
    /// End-of-level trigger
    Goal,
}

#[derive(Component, Debug)]
pub struct Cat;

/// How a sensor collider affects the cat on contact.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Liquid,
    Hazard,
    Goal,
}

/// Sensor contacts seen on the previous frame, used to tell entry from stay.
#[derive(Component, Debug, Default)]
pub struct SurfaceContacts {
    pub liquids: Vec<Entity>,
    pub hazard: bool,
    pub goal: bool,
}
