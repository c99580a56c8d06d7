//! Squash Jump - Entry Point
//!
//! Controls:
//! - Space: Jump
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Squash Jump".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(squash_jump::SquashJumpPlugin)

        .run();
}
