//! Level domain: the single hand-built level the cat explores.

mod spawn;

use bevy::prelude::*;

use crate::level::spawn::spawn_level;

/// Where the cat starts and returns to after dying.
pub const CAT_SPAWN: Vec3 = Vec3::new(-10.0, -4.5, 1.0);

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}
