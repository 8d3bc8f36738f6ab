//! Cat domain: messages between input, the controller and presentation.

use bevy::ecs::message::Message;

use crate::cat::ports::CatSignal;

/// Discrete, edge-triggered player intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatAction {
    Jump,
    Vocalize,
    LieDown,
    Pet,
    Pause,
}

impl Message for CatAction {}

/// A signal emitted by the controller for the animator and effects.
#[derive(Debug, Clone, Copy)]
pub struct CatSignalEvent(pub CatSignal);

impl Message for CatSignalEvent {}
