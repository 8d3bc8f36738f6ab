//! UI domain: pause and win overlays.

use bevy::prelude::*;

use crate::core::MenuOverlays;

/// Marker for the pause overlay root
#[derive(Component)]
pub struct PauseOverlayUI;

/// Marker for the win overlay root
#[derive(Component)]
pub struct WinOverlayUI;

pub(crate) fn spawn_overlays(mut commands: Commands) {
    spawn_overlay(
        &mut commands,
        PauseOverlayUI,
        "PAUSED",
        "Press [Esc] to keep exploring",
        Color::srgb(0.9, 0.9, 0.9),
    );
    spawn_overlay(
        &mut commands,
        WinOverlayUI,
        "YOU MADE IT HOME",
        "The cat curls up for a well-earned nap.",
        Color::srgb(0.95, 0.85, 0.3),
    );
}

fn spawn_overlay(
    commands: &mut Commands,
    marker: impl Component,
    title: &str,
    subtitle: &str,
    title_color: Color,
) {
    commands
        .spawn((
            marker,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            ZIndex(100),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtitle),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}

pub(crate) fn sync_overlays(
    overlays: Res<MenuOverlays>,
    mut pause_query: Query<&mut Visibility, (With<PauseOverlayUI>, Without<WinOverlayUI>)>,
    mut win_query: Query<&mut Visibility, (With<WinOverlayUI>, Without<PauseOverlayUI>)>,
) {
    if !overlays.is_changed() {
        return;
    }

    for mut visibility in &mut pause_query {
        *visibility = visible_if(overlays.pause_visible);
    }
    for mut visibility in &mut win_query {
        *visibility = visible_if(overlays.win_visible);
    }
}

fn visible_if(shown: bool) -> Visibility {
    if shown {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}
