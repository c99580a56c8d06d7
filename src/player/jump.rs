//! Jump input, the charge/launch sequence, landing and the air spin.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::config::JumpTuning;
use crate::core::{JumpLaunchedEvent, JumpStartedEvent, LandedEvent, PlayState, ScaleTween};

/// System set ordering for the jump.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct JumpSet;

/// Set up jump systems.
pub fn setup_jump_systems(app: &mut App) {
    app.configure_sets(Update, JumpSet.run_if(in_state(PlayState::Running)))
        .add_systems(
            Update,
            (
                handle_jump_input,
                advance_jump_sequence,
                detect_landing,
                update_air_spin,
            )
                .chain()
                .in_set(JumpSet),
        );
}

/// Start the charge when Space is pressed on the ground.
///
/// A spin still finishing from the previous jump blocks a new charge so the
/// two scale animations never fight.
pub fn handle_jump_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<JumpTuning>,
    mut player_query: Query<
        (Entity, &Transform, &mut JumpState, &OriginalAppearance),
        (With<Player>, Without<AirSpin>),
    >,
    mut started_events: EventWriter<JumpStartedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    for (entity, transform, mut state, original) in player_query.iter_mut() {
        if !state.try_start(&tuning) {
            continue;
        }

        commands.entity(entity).insert(ScaleTween::to(
            transform.scale,
            tuning.charge_scale(original.scale),
            tuning.pre_animation_duration * 0.5,
        ));
        started_events.send(JumpStartedEvent { player: entity });
        debug!("Jump charge started");
    }
}

/// Step the jump timeline and act on each transition.
pub fn advance_jump_sequence(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<JumpTuning>,
    mut player_query: Query<
        (Entity, &Transform, &mut JumpState, &OriginalAppearance, Option<&mut Velocity>),
        With<Player>,
    >,
    mut launched_events: EventWriter<JumpLaunchedEvent>,
) {
    for (entity, transform, mut state, original, velocity) in player_query.iter_mut() {
        let Some(step) = state.advance(time.delta(), &tuning) else {
            continue;
        };

        match step {
            JumpStep::Recover => {
                commands.entity(entity).insert(ScaleTween::to(
                    transform.scale,
                    original.scale,
                    tuning.animation_duration * 0.5,
                ));
            }
            JumpStep::Launch => {
                // Horizontal velocity is preserved
                if let Some(mut velocity) = velocity {
                    velocity.linvel.y = tuning.jump_force;
                }
                launched_events.send(JumpLaunchedEvent { player: entity });
                info!("Player launched with force {}", tuning.jump_force);
            }
            JumpStep::Spin => {
                commands.entity(entity).insert(AirSpin::default());
            }
        }
    }
}

/// Turn ground contacts into landings.
pub fn detect_landing(
    mut collision_events: EventReader<CollisionEvent>,
    ground_query: Query<(), With<Ground>>,
    mut player_query: Query<(&Transform, &mut JumpState), With<Player>>,
    mut landed_events: EventWriter<LandedEvent>,
) {
    for event in collision_events.read() {
        let &CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        let (player, other) = if player_query.contains(a) {
            (a, b)
        } else if player_query.contains(b) {
            (b, a)
        } else {
            continue;
        };

        if !ground_query.contains(other) {
            continue;
        }

        let Ok((transform, mut state)) = player_query.get_mut(player) else {
            continue;
        };

        if state.land() {
            landed_events.send(LandedEvent {
                player,
                position: transform.translation,
            });
            info!("Player landed at {:?}", transform.translation);
        }
    }
}

/// Rotate the player about Z while holding the stretched pose, then settle.
pub fn update_air_spin(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<JumpTuning>,
    mut query: Query<(Entity, &mut Transform, &mut AirSpin, &OriginalAppearance)>,
) {
    for (entity, mut transform, mut spin, original) in query.iter_mut() {
        match spin.advance(time.delta_secs(), tuning.spin_duration) {
            Some(rotation) => {
                transform.rotation = rotation;
                transform.scale = tuning.airborne_scale(original.scale);
            }
            None => {
                transform.rotation = Quat::IDENTITY;
                commands
                    .entity(entity)
                    .remove::<AirSpin>()
                    .insert(ScaleTween::to(
                        transform.scale,
                        original.scale,
                        tuning.animation_duration,
                    ));
            }
        }
    }
}
