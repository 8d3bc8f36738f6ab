//! Cat domain: avian2d-backed implementations of the grounding and mover ports.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::cat::components::GameLayer;
use crate::cat::ports::{BoundedMover, GroundingQuery};

/// Gap kept between the cat and whatever it slides against.
const SKIN: f32 = 0.01;

/// Circle overlap on the Ground layer.
pub(crate) struct AvianGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianGroundProbe<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, cat: Entity) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground)
                .with_excluded_entities([cat]),
        }
    }
}

impl GroundingQuery for AvianGroundProbe<'_, '_, '_> {
    fn touches_ground(&self, center: Vec3, radius: f32) -> bool {
        !self
            .spatial_query
            .shape_intersections(
                &Collider::circle(radius),
                center.truncate(),
                0.0,
                &self.filter,
            )
            .is_empty()
    }
}

/// Sweeps the cat's collider one axis at a time so blocked motion on one
/// axis still lets it slide along the other.
pub(crate) struct AvianMover<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    collider: &'a Collider,
    filter: SpatialQueryFilter,
    collision_enabled: bool,
}

impl<'a, 'w, 's> AvianMover<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        collider: &'a Collider,
        cat: Entity,
        collision_enabled: bool,
    ) -> Self {
        Self {
            spatial_query,
            collider,
            filter: SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall])
                .with_excluded_entities([cat]),
            collision_enabled,
        }
    }

    fn sweep(&self, origin: Vec2, delta: Vec2) -> Vec2 {
        let Ok(direction) = Dir2::new(delta) else {
            return Vec2::ZERO;
        };
        let distance = delta.length();

        let config = ShapeCastConfig {
            ignore_origin_penetration: true,
            ..ShapeCastConfig::from_max_distance(distance)
        };
        match self.spatial_query.cast_shape(
            self.collider,
            origin,
            0.0,
            direction,
            &config,
            &self.filter,
        ) {
            Some(hit) => *direction * (hit.distance - SKIN).max(0.0),
            None => delta,
        }
    }
}

impl BoundedMover for AvianMover<'_, '_, '_> {
    fn move_and_slide(&mut self, from: Vec3, displacement: Vec3) -> Vec3 {
        if !self.collision_enabled {
            return from + displacement;
        }

        let mut origin = from.truncate();
        origin += self.sweep(origin, Vec2::new(displacement.x, 0.0));
        origin += self.sweep(origin, Vec2::new(0.0, displacement.y));
        origin.extend(from.z)
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = enabled;
    }
}
