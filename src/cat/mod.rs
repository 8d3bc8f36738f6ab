//! Cat domain: the playable cat's state machine and the systems that drive it.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod pets;
mod ports;
mod resources;
mod systems;
#[cfg(test)]
mod tests;
mod wet;

pub use components::{Cat, GameLayer, SurfaceKind};
pub use ports::{CatSignal, HungerSink, MenuSink};

use bevy::prelude::*;

use crate::cat::bootstrap::spawn_cat;
use crate::cat::events::{CatAction, CatSignalEvent};
use crate::cat::resources::CatInput;
use crate::cat::systems::{
    animate_cat_sprite, apply_cat_actions, apply_cat_signals, detect_surface_contacts, read_input,
    sync_cat_transform, sync_collider_state, tick_cat,
};
use crate::ui::gameplay_active;

pub struct CatPlugin;

impl Plugin for CatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatInput>()
            .add_message::<CatAction>()
            .add_message::<CatSignalEvent>()
            .add_systems(Startup, spawn_cat)
            .add_systems(
                Update,
                (
                    read_input,
                    apply_cat_actions,
                    tick_cat.run_if(gameplay_active),
                    detect_surface_contacts.run_if(gameplay_active),
                    sync_cat_transform,
                    sync_collider_state,
                    apply_cat_signals,
                    animate_cat_sprite,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            dev::dev_hotkeys
                .run_if(gameplay_active)
                .before(tick_cat),
        );
    }
}
