//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::events::*;
use super::states::*;
use super::tween::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame and its Running/Paused sub-state)
/// - Global events (JumpStartedEvent, LandedEvent, etc.)
/// - Pausing and scale tweening
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<JumpStartedEvent>()
            .add_event::<JumpLaunchedEvent>()
            .add_event::<LandedEvent>()
            .add_event::<PlaySoundEvent>()

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)))
            .add_systems(OnEnter(PlayState::Paused), freeze_simulation)
            .add_systems(OnExit(PlayState::Paused), resume_simulation)

            // Scale tweens only advance during gameplay
            .add_systems(Update, update_scale_tweens.run_if(in_state(PlayState::Running)));
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}

fn freeze_simulation(
    mut time: ResMut<Time<Virtual>>,
    mut rapier_config: Query<&mut RapierConfiguration>,
) {
    time.pause();
    for mut config in rapier_config.iter_mut() {
        config.physics_pipeline_active = false;
    }
    info!("Paused");
}

fn resume_simulation(
    mut time: ResMut<Time<Virtual>>,
    mut rapier_config: Query<&mut RapierConfiguration>,
) {
    time.unpause();
    for mut config in rapier_config.iter_mut() {
        config.physics_pipeline_active = true;
    }
    info!("Resumed");
}
