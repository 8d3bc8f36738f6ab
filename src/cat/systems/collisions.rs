//! Cat domain: sensor contact detection for puddles, hazards and the goal.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::cat::components::{Cat, GameLayer, SurfaceContacts, SurfaceKind};
use crate::cat::controller::CatController;
use crate::cat::events::CatSignalEvent;
use crate::cat::ports::CatSignal;
use crate::cat::systems::physics::AvianMover;
use crate::core::MenuOverlays;
use crate::ui::HungerMeter;

/// Overlap the cat's collider with every sensor layer and turn the
/// difference from last frame into enter/stay/exit calls.
pub(crate) fn detect_surface_contacts(
    spatial_query: SpatialQuery,
    surfaces: Query<&SurfaceKind>,
    mut hunger: ResMut<HungerMeter>,
    mut overlays: ResMut<MenuOverlays>,
    mut signal_writer: MessageWriter<CatSignalEvent>,
    mut cats: Query<(Entity, &Collider, &mut CatController, &mut SurfaceContacts), With<Cat>>,
) {
    let Ok((entity, collider, mut controller, mut contacts)) = cats.single_mut() else {
        return;
    };

    // A disabled collider triggers nothing
    if !controller.collision_enabled() {
        *contacts = SurfaceContacts::default();
        return;
    }

    let filter =
        SpatialQueryFilter::from_mask([GameLayer::Liquid, GameLayer::Hazard, GameLayer::Goal])
            .with_excluded_entities([entity]);
    let hits = spatial_query.shape_intersections(
        collider,
        controller.position().truncate(),
        0.0,
        &filter,
    );

    let mut liquids = Vec::new();
    let mut hazard = false;
    let mut goal = false;
    for hit in hits {
        match surfaces.get(hit) {
            Ok(SurfaceKind::Liquid) => liquids.push(hit),
            Ok(SurfaceKind::Hazard) => hazard = true,
            Ok(SurfaceKind::Goal) => goal = true,
            Err(_) => {}
        }
    }

    let mut signals: Vec<CatSignal> = Vec::new();

    for &puddle in &liquids {
        if contacts.liquids.contains(&puddle) {
            controller.on_liquid_stay(&mut signals);
        } else {
            debug!("Cat stepped into puddle {:?}", puddle);
            controller.on_liquid_enter(&mut signals);
        }
    }
    for puddle in contacts.liquids.iter().filter(|p| !liquids.contains(p)) {
        debug!("Cat left puddle {:?}", puddle);
        controller.on_liquid_exit();
    }

    if hazard && !contacts.hazard {
        let mut mover = AvianMover::new(&spatial_query, collider, entity, true);
        controller.on_hazard_contact(&mut mover, &mut signals, &mut *hunger);
    }

    if goal && !contacts.goal {
        controller.on_goal_reached(&mut *hunger, &mut *overlays);
    }

    contacts.liquids = liquids;
    contacts.hazard = hazard;
    contacts.goal = goal;

    for signal in signals {
        signal_writer.write(CatSignalEvent(signal));
    }
}
