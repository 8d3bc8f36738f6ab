//! Cat domain: spawning the cat from the loaded config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::cat::components::{Cat, GameLayer, SurfaceContacts};
use crate::cat::controller::CatController;
use crate::cat::systems::presentation::{CAT_COLOR, CAT_SIZE, CatAnimator};
use crate::content::CatConfig;
use crate::level::CAT_SPAWN;

/// Spawn the cat at the level's spawn point. Runs after the config is loaded.
pub(crate) fn spawn_cat(
    mut commands: Commands,
    config: Res<CatConfig>,
    existing: Query<Entity, With<Cat>>,
) {
    if !existing.is_empty() {
        info!("Cat already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning cat at {:?}: speed={}, jump_height={}",
        CAT_SPAWN, config.tuning.speed, config.tuning.jump_height
    );

    commands.spawn((
        // Identity & state
        (
            Cat,
            CatController::new(&config, CAT_SPAWN),
            CatAnimator::default(),
            SurfaceContacts::default(),
        ),
        // Rendering
        Sprite {
            color: CAT_COLOR,
            custom_size: Some(CAT_SIZE),
            ..default()
        },
        Transform::from_translation(CAT_SPAWN),
        // Physics: the controller moves the body itself
        (
            RigidBody::Kinematic,
            Collider::rectangle(CAT_SIZE.x, CAT_SIZE.y),
            CollisionLayers::new(
                GameLayer::Cat,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Liquid,
                    GameLayer::Hazard,
                    GameLayer::Goal,
                ],
            ),
        ),
    ));
}
