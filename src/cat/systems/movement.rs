//! Cat domain: drives the controller each frame and mirrors it into the scene.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::cat::components::Cat;
use crate::cat::controller::CatController;
use crate::cat::events::CatSignalEvent;
use crate::cat::ports::CatSignal;
use crate::cat::resources::CatInput;
use crate::cat::systems::physics::{AvianGroundProbe, AvianMover};
use crate::ui::HungerMeter;

pub(crate) fn tick_cat(
    time: Res<Time>,
    input: Res<CatInput>,
    spatial_query: SpatialQuery,
    mut hunger: ResMut<HungerMeter>,
    mut signal_writer: MessageWriter<CatSignalEvent>,
    mut cats: Query<(Entity, &Collider, &mut CatController), With<Cat>>,
) {
    let dt = time.delta_secs();

    for (entity, collider, mut controller) in &mut cats {
        let ground = AvianGroundProbe::new(&spatial_query, entity);
        let mut mover =
            AvianMover::new(&spatial_query, collider, entity, controller.collision_enabled());
        let mut signals: Vec<CatSignal> = Vec::new();

        controller.tick(
            dt,
            input.axis,
            &ground,
            &mut mover,
            &mut signals,
            &mut *hunger,
        );

        for signal in signals {
            signal_writer.write(CatSignalEvent(signal));
        }
    }
}

pub(crate) fn sync_cat_transform(
    mut cats: Query<(&CatController, &mut Transform), (With<Cat>, Changed<CatController>)>,
) {
    for (controller, mut transform) in &mut cats {
        let position = controller.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// Keep the physics world's view of the cat in step with its lifecycle.
pub(crate) fn sync_collider_state(
    mut commands: Commands,
    cats: Query<(Entity, &CatController, Has<ColliderDisabled>), With<Cat>>,
) {
    for (entity, controller, disabled) in &cats {
        match (controller.collision_enabled(), disabled) {
            (true, true) => {
                commands.entity(entity).remove::<ColliderDisabled>();
            }
            (false, false) => {
                commands.entity(entity).insert(ColliderDisabled);
            }
            _ => {}
        }
    }
}
