//! Player-related components.

use std::time::Duration;

use bevy::prelude::*;

use super::config::JumpTuning;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker for bodies the player can land on.
#[derive(Component)]
pub struct Ground;

/// Scale and color the player had when spawned.
///
/// Every squash/stretch pose is relative to `scale`, and the flicker
/// always restores `color`.
#[derive(Component, Debug, Clone, Copy)]
pub struct OriginalAppearance {
    pub scale: Vec3,
    pub color: Color,
}

/// Bodies that receive an upward impulse when the player lands.
///
/// Entries may point at bodies that have since been despawned; those are
/// skipped.
#[derive(Component, Debug, Default, Clone)]
pub struct ShockwaveTargets(pub Vec<Entity>);

/// Where the player is in the jump sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum JumpPhase {
    /// Waiting for input
    Ready,
    /// Crouching into the charge pose
    Charging(Timer),
    /// Springing back to the original scale
    Recovering(Timer),
    /// Launched; waiting to see if the player is still airborne
    AwaitingSpin(Timer),
}

/// Transition reported by [`JumpState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    /// Charge pose reached, tween back to the original scale
    Recover,
    /// Apply upward velocity
    Launch,
    /// Still airborne after the spin delay, start the air spin
    Spin,
}

/// Grounded flag plus the jump sequence timeline.
#[derive(Component, Debug, Clone)]
pub struct JumpState {
    pub grounded: bool,
    pub phase: JumpPhase,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            grounded: true,
            phase: JumpPhase::Ready,
        }
    }
}

impl JumpState {
    /// Begin charging if grounded and no sequence is running.
    pub fn try_start(&mut self, tuning: &JumpTuning) -> bool {
        if !self.grounded || self.phase != JumpPhase::Ready {
            return false;
        }
        self.phase = JumpPhase::Charging(once(tuning.pre_animation_duration * 0.5));
        true
    }

    /// Advance the active phase timer, returning the step reached this frame.
    pub fn advance(&mut self, delta: Duration, tuning: &JumpTuning) -> Option<JumpStep> {
        match &mut self.phase {
            JumpPhase::Ready => None,
            JumpPhase::Charging(timer) => {
                if !timer.tick(delta).finished() {
                    return None;
                }
                self.phase = JumpPhase::Recovering(once(tuning.animation_duration * 0.5));
                Some(JumpStep::Recover)
            }
            JumpPhase::Recovering(timer) => {
                if !timer.tick(delta).finished() {
                    return None;
                }
                self.grounded = false;
                self.phase = JumpPhase::AwaitingSpin(once(tuning.spin_delay));
                Some(JumpStep::Launch)
            }
            JumpPhase::AwaitingSpin(timer) => {
                if !timer.tick(delta).finished() {
                    return None;
                }
                self.phase = JumpPhase::Ready;
                (!self.grounded).then_some(JumpStep::Spin)
            }
        }
    }

    /// Record a ground contact. Returns false if already grounded.
    pub fn land(&mut self) -> bool {
        if self.grounded {
            return false;
        }
        self.grounded = true;
        true
    }
}

fn once(seconds: f32) -> Timer {
    Timer::from_seconds(seconds.max(0.0), TimerMode::Once)
}

/// One full turn about Z performed in mid-air.
///
/// Keeps running after landing; only the accumulated angle ends it.
#[derive(Component, Debug, Default, Clone)]
pub struct AirSpin {
    /// Accumulated rotation in degrees
    pub angle: f32,
}

impl AirSpin {
    /// Advance the spin. Returns the rotation to show this frame, or `None`
    /// once the full turn is complete.
    pub fn advance(&mut self, delta: f32, spin_duration: f32) -> Option<Quat> {
        let speed = 360.0 / spin_duration;
        self.angle += speed * delta;
        if self.angle >= 360.0 {
            return None;
        }
        Some(Quat::from_rotation_z(self.angle.to_radians()))
    }
}
