//! Cat domain: system modules for the cat's frame update.

pub(crate) mod actions;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod physics;
pub(crate) mod presentation;

pub(crate) use actions::apply_cat_actions;
pub(crate) use collisions::detect_surface_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{sync_cat_transform, sync_collider_state, tick_cat};
pub(crate) use presentation::{animate_cat_sprite, apply_cat_signals};
