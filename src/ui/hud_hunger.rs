//! UI domain: hunger bar and lost-cat counter.

use bevy::prelude::*;

use crate::ui::hunger::HungerMeter;

pub(crate) const HUNGER_BAR_WIDTH: f32 = 200.0;
pub(crate) const HUNGER_BAR_HEIGHT: f32 = 20.0;
pub(crate) const HUNGER_BAR_PADDING: f32 = 16.0;

/// Marker for the hunger bar container
#[derive(Component)]
pub struct HungerBarUI;

/// Marker for the hunger bar fill element
#[derive(Component)]
pub struct HungerBarFill;

/// Marker for the lost-cat counter text
#[derive(Component)]
pub struct CatsLostText;

pub(crate) fn spawn_hunger_ui(mut commands: Commands) {
    commands
        .spawn((
            HungerBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUNGER_BAR_PADDING),
                top: Val::Px(HUNGER_BAR_PADDING),
                width: Val::Px(HUNGER_BAR_WIDTH),
                height: Val::Px(HUNGER_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                HungerBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.6, 0.2)),
            ));
        });

    // Below the bar
    commands.spawn((
        CatsLostText,
        Text::new("Cats lost: 0"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUNGER_BAR_PADDING),
            top: Val::Px(HUNGER_BAR_PADDING + HUNGER_BAR_HEIGHT + 8.0),
            ..default()
        },
    ));
}

pub(crate) fn update_hunger_ui(
    meter: Res<HungerMeter>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<HungerBarFill>>,
    mut text_query: Query<&mut Text, With<CatsLostText>>,
) {
    if !meter.is_changed() {
        return;
    }

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = meter.percent();
        node.width = Val::Percent(percent * 100.0);

        // Orange when fed, fading to red as the cat gets hungry
        bg_color.0 = Color::srgb(0.9, 0.2 + percent * 0.4, 0.2);
    }

    for mut text in &mut text_query {
        **text = format!("Cats lost: {}", meter.cats_lost);
    }
}
