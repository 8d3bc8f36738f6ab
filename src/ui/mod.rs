//! UI domain: hunger HUD and menu overlays.

mod hud_hunger;
mod hunger;
mod overlays;

pub use hunger::{HungerMeter, gameplay_active};

use bevy::prelude::*;

use crate::ui::hud_hunger::{spawn_hunger_ui, update_hunger_ui};
use crate::ui::hunger::drain_hunger;
use crate::ui::overlays::{spawn_overlays, sync_overlays};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HungerMeter>()
            .add_systems(Startup, (spawn_hunger_ui, spawn_overlays))
            .add_systems(
                Update,
                (
                    drain_hunger.run_if(gameplay_active),
                    update_hunger_ui,
                    sync_overlays,
                ),
            );
    }
}
