//! Feedback plugin - everything the player sees and hears around a jump.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use super::audio::*;
use super::camera_shake::*;
use super::flicker::*;
use super::particles::*;
use super::shockwave::apply_shockwave;
use crate::core::{GameState, PlayState};
use crate::player::JumpSet;

/// System set ordering for feedback.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeedbackSet {
    /// Turn jump and landing events into effect requests
    React,
    /// Step running effects
    Animate,
}

/// Feedback plugin - camera shake, flicker, particles, audio, shockwave.
pub struct FeedbackPlugin;

impl Plugin for FeedbackPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<ScreenShake>()
            .add_audio_channel::<PlayerVoice>()

            // Assets depend on tuning, which is loaded at startup
            .add_systems(
                OnEnter(GameState::InGame),
                (load_sound_library, setup_particle_assets),
            )

            // System ordering
            .configure_sets(
                Update,
                (FeedbackSet::React, FeedbackSet::Animate)
                    .chain()
                    .after(JumpSet)
                    .run_if(in_state(PlayState::Running)),
            )

            // Reactions
            .add_systems(
                Update,
                (
                    shake_on_jump,
                    shake_on_landing,
                    start_flicker,
                    cue_charge_sound,
                    cue_drop_sound,
                    spawn_landing_particles,
                    apply_shockwave,
                )
                    .in_set(FeedbackSet::React),
            )

            // Running effects
            .add_systems(
                Update,
                (
                    update_camera_noise,
                    update_flicker,
                    update_particles,
                    play_sound_cues,
                )
                    .in_set(FeedbackSet::Animate),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JumpStartedEvent, LandedEvent, PlaySoundEvent, SoundCue};
    use crate::player::JumpTuning;

    fn react_app(tuning: JumpTuning) -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(tuning)
            .init_resource::<ScreenShake>()
            .add_event::<JumpStartedEvent>()
            .add_event::<LandedEvent>()
            .add_event::<PlaySoundEvent>()
            .add_systems(
                Update,
                (
                    shake_on_jump,
                    shake_on_landing,
                    start_flicker,
                    cue_charge_sound,
                    cue_drop_sound,
                    spawn_landing_particles,
                    apply_shockwave,
                ),
            );
        app
    }

    fn drain_sounds(app: &mut App) -> Vec<PlaySoundEvent> {
        app.world_mut()
            .resource_mut::<Events<PlaySoundEvent>>()
            .drain()
            .collect()
    }

    #[test]
    fn jump_start_triggers_one_shake_flicker_and_cue() {
        let tuning = JumpTuning::default();
        let (intensity, duration) = (tuning.drop_shake_intensity, tuning.shake_duration);
        let mut app = react_app(tuning);

        let player = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(JumpStartedEvent { player });
        app.update();

        let shake = app.world().resource::<ScreenShake>();
        assert_eq!(shake.amplitude, intensity);
        assert_eq!(shake.remaining, duration);
        assert!(app.world().get::<Flicker>(player).is_some());
        assert_eq!(
            drain_sounds(&mut app),
            vec![PlaySoundEvent {
                cue: SoundCue::Charge,
                volume: 0.2
            }]
        );

        // The event is consumed: nothing fires again on the next frame
        app.world_mut().entity_mut(player).remove::<Flicker>();
        app.update();
        assert!(app.world().get::<Flicker>(player).is_none());
        assert!(drain_sounds(&mut app).is_empty());
    }

    #[test]
    fn zero_flicker_count_inserts_nothing() {
        let mut app = react_app(JumpTuning {
            flicker_count: 0,
            ..default()
        });

        let player = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(JumpStartedEvent { player });
        app.update();

        assert!(app.world().get::<Flicker>(player).is_none());
        assert_eq!(app.world().resource::<ScreenShake>().amplitude, 2.0);
    }
}
