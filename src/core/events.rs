//! Global events used for cross-system communication.
//!
//! The jump sequence only reports what happened to the player. Feedback
//! systems (camera shake, particles, audio, shockwave) listen for these and
//! react on their own, so each effect can be tested without the others.

use bevy::prelude::*;

/// Sent when a grounded player starts charging a jump.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpStartedEvent {
    pub player: Entity,
}

/// Sent when the charge animation finishes and upward velocity is applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct JumpLaunchedEvent {
    pub player: Entity,
}

/// Sent when an airborne player touches the ground.
#[derive(Event, Debug, Clone, Copy)]
pub struct LandedEvent {
    pub player: Entity,
    /// Player translation at the moment of contact
    pub position: Vec3,
}

/// Audio cues the player voice can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Played when the jump charge starts
    Charge,
    /// Played on landing
    Drop,
}

/// Request to play a cue on the player voice.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlaySoundEvent {
    pub cue: SoundCue,
    /// Linear volume, 1.0 = unchanged
    pub volume: f32,
}
