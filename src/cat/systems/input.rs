//! Cat domain: keyboard sampling into axis state and action messages.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::cat::events::CatAction;
use crate::cat::resources::CatInput;
use crate::core::MenuOverlays;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    overlays: Res<MenuOverlays>,
    mut input: ResMut<CatInput>,
    mut actions: MessageWriter<CatAction>,
) {
    // Pause is bound in both the movement and menu maps
    if keyboard.just_pressed(KeyCode::Escape) {
        actions.write(CatAction::Pause);
    }

    if !overlays.accepts_movement() {
        input.axis = 0.0;
        return;
    }

    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis = x;

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyW) {
        actions.write(CatAction::Jump);
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        actions.write(CatAction::Vocalize);
    }
    if keyboard.just_pressed(KeyCode::KeyS) || keyboard.just_pressed(KeyCode::ArrowDown) {
        actions.write(CatAction::LieDown);
    }
    if keyboard.just_pressed(KeyCode::KeyP) {
        actions.write(CatAction::Pet);
    }
}
