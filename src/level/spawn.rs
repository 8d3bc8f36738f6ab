//! Level domain: ground, walls, platforms and the sensor surfaces.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::cat::{GameLayer, SurfaceKind};

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.4);
const PLATFORM_COLOR: Color = Color::srgb(0.5, 0.4, 0.3);
const PUDDLE_COLOR: Color = Color::srgba(0.3, 0.5, 0.9, 0.8);
const SPIKE_COLOR: Color = Color::srgb(0.75, 0.2, 0.2);
const GOAL_COLOR: Color = Color::srgb(0.95, 0.85, 0.3);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// (center, size) of every standable surface
const FLOORS: [(Vec2, Vec2); 5] = [
    // Floor, split by a spike pit between x = 2 and x = 5
    (Vec2::new(-5.0, -6.0), Vec2::new(14.0, 1.0)),
    (Vec2::new(8.75, -6.0), Vec2::new(7.5, 1.0)),
    // Pit bottom
    (Vec2::new(3.5, -7.25), Vec2::new(3.0, 0.5)),
    // Stepping platforms up to the goal
    (Vec2::new(7.0, -4.5), Vec2::new(2.5, 0.4)),
    (Vec2::new(10.5, -3.3), Vec2::new(3.0, 0.4)),
];

const WALLS: [(Vec2, Vec2); 2] = [
    (Vec2::new(-12.75, 0.0), Vec2::new(0.5, 15.0)),
    (Vec2::new(12.75, 0.0), Vec2::new(0.5, 15.0)),
];

/// Puddle on the starting floor, spikes in the pit, goal on the top platform
const SENSORS: [(SurfaceKind, Vec2, Vec2); 3] = [
    (SurfaceKind::Liquid, Vec2::new(-4.0, -5.4), Vec2::new(2.5, 0.2)),
    (SurfaceKind::Hazard, Vec2::new(3.5, -6.6), Vec2::new(3.0, 0.8)),
    (SurfaceKind::Goal, Vec2::new(11.0, -2.5), Vec2::new(0.6, 1.2)),
];

pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Cat]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Cat]);

    for (i, (center, size)) in FLOORS.into_iter().enumerate() {
        // Floor pieces first, then platforms
        let color = if i < 3 { GROUND_COLOR } else { PLATFORM_COLOR };
        spawn_block(&mut commands, Ground, ground_layers, color, center, size);
    }

    for (center, size) in WALLS {
        spawn_block(&mut commands, Wall, wall_layers, WALL_COLOR, center, size);
    }

    for (kind, center, size) in SENSORS {
        spawn_sensor(&mut commands, kind, center, size);
    }

    info!(
        "Level spawned: {} floors, {} walls, {} sensors",
        FLOORS.len(),
        WALLS.len(),
        SENSORS.len()
    );
}

fn spawn_block(
    commands: &mut Commands,
    marker: impl Component,
    layers: CollisionLayers,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

fn spawn_sensor(commands: &mut Commands, kind: SurfaceKind, center: Vec2, size: Vec2) {
    let (layer, color) = match kind {
        SurfaceKind::Liquid => (GameLayer::Liquid, PUDDLE_COLOR),
        SurfaceKind::Hazard => (GameLayer::Hazard, SPIKE_COLOR),
        SurfaceKind::Goal => (GameLayer::Goal, GOAL_COLOR),
    };

    commands.spawn((
        kind,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.5)),
        RigidBody::Static,
        Sensor,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Cat]),
    ));
}
