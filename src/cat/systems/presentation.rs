//! Cat domain: stand-in animator fed by controller signals.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::cat::components::Cat;
use crate::cat::controller::{ActionState, CatController, Facing};
use crate::cat::events::CatSignalEvent;
use crate::cat::ports::CatSignal;

pub(crate) const CAT_SIZE: Vec2 = Vec2::new(0.8, 0.6);
pub(crate) const CAT_COLOR: Color = Color::srgb(0.95, 0.6, 0.25);
const WET_COLOR: Color = Color::srgb(0.45, 0.6, 0.95);
const GHOST_ALPHA: f32 = 0.35;

/// Animator parameters, as last set by the controller.
#[derive(Component, Debug, Default)]
pub struct CatAnimator {
    pub anim_speed: f32,
    pub jump_speed: f32,
    pub is_jumping: bool,
    pub space_pressed: bool,
    pub wet: bool,
    pub meowing: bool,
}

pub(crate) fn apply_cat_signals(
    mut signals: MessageReader<CatSignalEvent>,
    mut animators: Query<&mut CatAnimator, With<Cat>>,
) {
    let Ok(mut animator) = animators.single_mut() else {
        signals.clear();
        return;
    };

    for CatSignalEvent(signal) in signals.read() {
        match *signal {
            CatSignal::AnimSpeed(speed) => animator.anim_speed = speed,
            CatSignal::JumpSpeed(speed) => animator.jump_speed = speed,
            CatSignal::IsJumping(jumping) => animator.is_jumping = jumping,
            CatSignal::SpacePressed(pressed) => animator.space_pressed = pressed,
            CatSignal::CatWet(wet) => animator.wet = wet,
            CatSignal::MeowSfx(playing) => {
                if playing && !animator.meowing {
                    info!("Meow!");
                }
                animator.meowing = playing;
            }
            CatSignal::MeowButton => debug!("anim trigger: meowButton"),
            CatSignal::LayButton => debug!("anim trigger: layButton"),
            CatSignal::PetCat => debug!("anim trigger: petCat"),
        }
    }
}

pub(crate) fn animate_cat_sprite(
    mut cats: Query<(&CatController, &CatAnimator, &mut Sprite), With<Cat>>,
) {
    for (controller, animator, mut sprite) in &mut cats {
        sprite.flip_x = controller.facing() == Facing::Left;

        // Squash flat while lying down, stretch a little mid-jump
        let size = match controller.action() {
            ActionState::Lying => Vec2::new(CAT_SIZE.x * 1.2, CAT_SIZE.y * 0.6),
            _ if animator.is_jumping => Vec2::new(CAT_SIZE.x * 0.9, CAT_SIZE.y * 1.1),
            _ => CAT_SIZE,
        };
        sprite.custom_size = Some(size);

        let base = if animator.wet { WET_COLOR } else { CAT_COLOR };
        sprite.color = if controller.is_alive() {
            base
        } else {
            base.with_alpha(GHOST_ALPHA)
        };
    }
}
