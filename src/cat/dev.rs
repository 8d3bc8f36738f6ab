//! Cat domain: debug hotkeys, only built with the `dev-tools` feature.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::cat::components::Cat;
use crate::cat::controller::CatController;
use crate::cat::events::CatSignalEvent;
use crate::cat::ports::CatSignal;
use crate::cat::systems::physics::AvianMover;
use crate::ui::HungerMeter;

/// F1 kills the cat as if it touched a hazard, F2 dumps its state.
pub(crate) fn dev_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    spatial_query: SpatialQuery,
    mut hunger: ResMut<HungerMeter>,
    mut signal_writer: MessageWriter<CatSignalEvent>,
    mut cats: Query<(Entity, &Collider, &mut CatController), With<Cat>>,
) {
    let Ok((entity, collider, mut controller)) = cats.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F1) {
        let mut mover = AvianMover::new(&spatial_query, collider, entity, true);
        let mut signals: Vec<CatSignal> = Vec::new();
        controller.on_hazard_contact(&mut mover, &mut signals, &mut *hunger);
        for signal in signals {
            signal_writer.write(CatSignalEvent(signal));
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        info!(
            "Cat: pos={:?} spawn={:?} vel={:?} jump_v={:.2} grounded={} lifecycle={:?} action={:?} wet={:.2}s pets={} hunger={:.1}",
            controller.position(),
            controller.spawn_position(),
            controller.velocity(),
            controller.tuning().jump_velocity(),
            controller.is_grounded(),
            controller.lifecycle(),
            controller.action(),
            controller.wet().remaining(),
            controller.pet_count(),
            hunger.hunger
        );
    }
}
