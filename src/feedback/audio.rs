//! Player voice: one audio channel that plays the charge and drop cues.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::core::{JumpStartedEvent, LandedEvent, PlaySoundEvent, SoundCue};
use crate::player::JumpTuning;

/// Audio channel owned by the player. A new cue replaces the previous one.
#[derive(Resource)]
pub struct PlayerVoice;

/// Loaded clip handles for each cue.
#[derive(Resource)]
pub struct SoundLibrary {
    pub charge: Handle<AudioSource>,
    pub drop: Handle<AudioSource>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> &Handle<AudioSource> {
        match cue {
            SoundCue::Charge => &self.charge,
            SoundCue::Drop => &self.drop,
        }
    }
}

/// Start loading the clips named in the tuning file.
pub fn load_sound_library(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<JumpTuning>,
) {
    commands.insert_resource(SoundLibrary {
        charge: asset_server.load(tuning.charge_sound.clone()),
        drop: asset_server.load(tuning.drop_sound.clone()),
    });
}

/// Queue the charge cue when a jump starts.
pub fn cue_charge_sound(
    mut events: EventReader<JumpStartedEvent>,
    tuning: Res<JumpTuning>,
    mut sounds: EventWriter<PlaySoundEvent>,
) {
    for _event in events.read() {
        sounds.send(PlaySoundEvent {
            cue: SoundCue::Charge,
            volume: tuning.charge_volume,
        });
    }
}

/// Queue the drop cue on landing.
pub fn cue_drop_sound(
    mut events: EventReader<LandedEvent>,
    tuning: Res<JumpTuning>,
    mut sounds: EventWriter<PlaySoundEvent>,
) {
    for _event in events.read() {
        sounds.send(PlaySoundEvent {
            cue: SoundCue::Drop,
            volume: tuning.drop_volume,
        });
    }
}

/// Play queued cues on the player voice.
pub fn play_sound_cues(
    mut events: EventReader<PlaySoundEvent>,
    library: Option<Res<SoundLibrary>>,
    voice: Res<AudioChannel<PlayerVoice>>,
) {
    let Some(library) = library else {
        events.clear();
        return;
    };

    for event in events.read() {
        voice.stop();
        voice
            .play(library.get(event.cue).clone())
            .with_volume(f64::from(event.volume));
        debug!("Playing {:?} at volume {}", event.cue, event.volume);
    }
}
