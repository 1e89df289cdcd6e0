//! Aqua - interactive 2D fluid demo
//!
//! A block of fluid particles drops into a rectangular tank. Space pauses,
//! R resets, A and B raise and lower the pressure stiffness.

use aqua::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Aqua".to_string(),
                resolution: bevy::window::WindowResolution::new(1200, 900),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(FluidPlugin::default())
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (handle_input, update_debug_ui))
        .run();
}

/// Marker for the debug overlay text.
#[derive(Component)]
struct DebugText;

fn setup_scene(mut commands: Commands) {
    // The window matches the domain extents, so the default 2D camera shows
    // the whole tank at one world unit per pixel.
    commands.spawn(Camera2d);

    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        DebugText,
    ));
}

/// Maps keys to fluid commands. One key per command, no shared handling.
fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut params: ResMut<FluidParams>,
    mut simulation: ResMut<FluidSimulation>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        simulation.apply(FluidCommand::TogglePause, &mut params);
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        simulation.apply(FluidCommand::Reset, &mut params);
    }
    if keyboard.just_pressed(KeyCode::KeyA) {
        simulation.apply(FluidCommand::IncreaseStiffness, &mut params);
    }
    if keyboard.just_pressed(KeyCode::KeyB) {
        simulation.apply(FluidCommand::DecreaseStiffness, &mut params);
    }
}

/// Updates the debug overlay from the simulation state.
fn update_debug_ui(
    params: Res<FluidParams>,
    simulation: Res<FluidSimulation>,
    mut text_query: Query<&mut Text, With<DebugText>>,
) {
    for mut text in &mut text_query {
        let status = if simulation.is_paused() { "PAUSED" } else { "Running" };
        text.0 = format!(
            "Aqua ({status})\n\n\
             Controls:\n  \
             Space - Pause/Resume\n  \
             R - Reset\n  \
             A/B - Stiffness up/down\n\n\
             Particles: {}\n\
             Pressure multiplier: {:.4}",
            simulation.num_particles(),
            params.pressure_multiplier,
        );
    }
}
