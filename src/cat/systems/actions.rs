//! Cat domain: routes action messages to the controller's handlers.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::cat::controller::CatController;
use crate::cat::events::{CatAction, CatSignalEvent};
use crate::cat::{Cat, CatSignal};
use crate::core::MenuOverlays;
use crate::ui::HungerMeter;

pub(crate) fn apply_cat_actions(
    mut actions: MessageReader<CatAction>,
    mut hunger: ResMut<HungerMeter>,
    mut overlays: ResMut<MenuOverlays>,
    mut signal_writer: MessageWriter<CatSignalEvent>,
    mut cats: Query<&mut CatController, With<Cat>>,
) {
    let Ok(mut controller) = cats.single_mut() else {
        // Drain so stale actions don't fire once a cat exists
        actions.clear();
        return;
    };

    let mut signals: Vec<CatSignal> = Vec::new();
    for action in actions.read() {
        match action {
            CatAction::Jump => controller.on_jump(&mut signals),
            CatAction::Vocalize => controller.on_vocalize(&mut signals),
            CatAction::LieDown => controller.on_lie_down(&mut signals),
            CatAction::Pet => controller.on_pet(&mut signals, &mut *hunger),
            CatAction::Pause => controller.on_pause(&mut *hunger, &mut *overlays),
        }
    }

    for signal in signals {
        signal_writer.write(CatSignalEvent(signal));
    }
}
