//! Camera shake driven by Perlin noise.
//!
//! A shake sets the noise amplitude and holds it for a fixed time, then cuts
//! it back to zero. The noise itself is sampled every frame and offsets the
//! camera from its anchor pose.

use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

use crate::core::{JumpStartedEvent, LandedEvent};
use crate::player::JumpTuning;

/// World units of translation per unit of amplitude.
const POSITION_SCALE: f32 = 0.05;
/// Radians of roll per unit of amplitude.
const ROLL_SCALE: f32 = 0.01;

/// Screen shake state shared by every noise camera.
#[derive(Resource, Default, Debug)]
pub struct ScreenShake {
    /// Current noise amplitude
    pub amplitude: f32,
    /// Seconds until the amplitude is cut to zero
    pub remaining: f32,
}

impl ScreenShake {
    /// Start a shake. The latest shake always replaces the current one.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        self.amplitude = intensity;
        self.remaining = duration;
    }

    /// Advance the hold timer and return the amplitude for this frame.
    pub fn update(&mut self, delta: f32) -> f32 {
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.amplitude = 0.0;
        }
        self.amplitude
    }
}

/// Procedural noise on a camera.
#[derive(Component)]
pub struct CameraNoise {
    /// Amplitude applied this frame (mirrors the screen shake)
    pub amplitude_gain: f32,
    /// Noise samples per second
    pub frequency_gain: f32,
    /// Rest pose the noise is applied on top of
    pub anchor: Transform,
    elapsed: f64,
    perlin: Perlin,
}

impl CameraNoise {
    pub fn new(anchor: Transform, frequency_gain: f32, seed: u32) -> Self {
        Self {
            amplitude_gain: 0.0,
            frequency_gain,
            anchor,
            elapsed: 0.0,
            perlin: Perlin::new(seed),
        }
    }

    /// Move along the noise field by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += f64::from(delta * self.frequency_gain);
    }

    /// Pose for the current sample and amplitude.
    pub fn pose(&self) -> Transform {
        if self.amplitude_gain == 0.0 {
            return self.anchor;
        }

        // Each channel reads a separate row of the noise field
        let t = self.elapsed;
        let sample = |row: f64| self.perlin.get([t, row]) as f32;
        let offset = Vec3::new(sample(0.5), sample(7.5), sample(13.5))
            * self.amplitude_gain
            * POSITION_SCALE;
        let roll = sample(21.5) * self.amplitude_gain * ROLL_SCALE;

        let mut pose = self.anchor;
        pose.translation += offset;
        pose.rotation *= Quat::from_rotation_z(roll);
        pose
    }
}

/// Shake when a jump starts. The charge uses the same intensity as the drop.
pub fn shake_on_jump(
    mut events: EventReader<JumpStartedEvent>,
    tuning: Res<JumpTuning>,
    mut screen_shake: ResMut<ScreenShake>,
) {
    for _event in events.read() {
        screen_shake.shake(tuning.drop_shake_intensity, tuning.shake_duration);
    }
}

/// Shake with the drop intensity on landing.
pub fn shake_on_landing(
    mut events: EventReader<LandedEvent>,
    tuning: Res<JumpTuning>,
    mut screen_shake: ResMut<ScreenShake>,
) {
    for _event in events.read() {
        screen_shake.shake(tuning.drop_shake_intensity, tuning.shake_duration);
    }
}

/// Apply the shake amplitude to every noise camera.
///
/// With no noise camera in the world the shake still times out normally.
pub fn update_camera_noise(
    time: Res<Time>,
    mut screen_shake: ResMut<ScreenShake>,
    mut camera_query: Query<(&mut Transform, &mut CameraNoise)>,
) {
    let dt = time.delta_secs();
    let amplitude = screen_shake.update(dt);

    for (mut transform, mut noise) in camera_query.iter_mut() {
        noise.amplitude_gain = amplitude;
        noise.advance(dt);
        *transform = noise.pose();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn shake_cuts_to_zero_after_duration() {
        let mut shake = ScreenShake::default();
        shake.shake(2.0, 0.4);
        assert_eq!(shake.update(0.3), 2.0);
        assert_eq!(shake.update(0.15), 0.0);
        assert_eq!(shake.update(0.1), 0.0);
    }

    #[test]
    fn new_shake_restarts_the_timer() {
        let mut shake = ScreenShake::default();
        shake.shake(2.0, 0.4);
        shake.update(0.3);
        shake.shake(3.0, 0.4);
        assert_eq!(shake.update(0.3), 3.0);
    }

    #[test]
    fn silent_noise_rests_on_anchor() {
        let anchor = Transform::from_xyz(0.0, 4.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let mut noise = CameraNoise::new(anchor, 1.0, 7);
        noise.advance(0.37);
        assert_eq!(noise.pose(), anchor);
    }

    #[test]
    fn loud_noise_moves_the_camera_within_bounds() {
        let anchor = Transform::from_xyz(0.0, 4.0, 10.0);
        let mut noise = CameraNoise::new(anchor, 1.0, 7);
        noise.amplitude_gain = 2.0;
        noise.advance(0.37);
        let offset = noise.pose().translation - anchor.translation;
        // Perlin output stays in [-1, 1] per axis
        assert!(offset.abs().max_element() <= 2.0 * POSITION_SCALE + 1e-6);
    }

    #[test]
    fn landing_drives_camera_amplitude() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<JumpTuning>()
            .init_resource::<ScreenShake>()
            .add_event::<LandedEvent>()
            .add_systems(Update, (shake_on_landing, update_camera_noise).chain());

        let camera = app
            .world_mut()
            .spawn((Transform::default(), CameraNoise::new(Transform::default(), 1.0, 1)))
            .id();
        let player = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(LandedEvent {
            player,
            position: Vec3::ZERO,
        });
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.update();

        let noise = app.world().get::<CameraNoise>(camera).expect("noise camera");
        assert_eq!(noise.amplitude_gain, 2.0);
    }
}
