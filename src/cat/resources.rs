//! Cat domain: per-frame input state.

use bevy::prelude::*;

/// Horizontal axis sampled this frame, in [-1, 1].
#[derive(Resource, Debug, Default)]
pub struct CatInput {
    pub axis: f32,
}
