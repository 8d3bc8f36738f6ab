//! Core domain: camera, input routing and overlay state.

mod resources;
mod state;

pub use resources::MenuOverlays;
pub use state::InputMode;

use bevy::prelude::*;

/// Screen pixels per world unit. Gameplay runs in world units.
pub const PIXELS_PER_UNIT: f32 = 48.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuOverlays>()
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
