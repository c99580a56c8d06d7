//! Jump tuning loaded from an external RON file.
//!
//! Allows tweaking the feel of the jump without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::ConfigError;

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/player/jump_tuning.ron";

/// Landing particle burst settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    /// Particles spawned per landing
    pub count: u32,
    /// Initial speed in units per second
    pub speed: f32,
    /// Seconds each particle lives
    pub lifetime: f32,
    /// Edge length of a particle cube at spawn
    pub size: f32,
    /// Downward acceleration
    pub gravity: f32,
    pub color: (f32, f32, f32),
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: 16,
            speed: 3.0,
            lifetime: 0.6,
            size: 0.08,
            gravity: 9.81,
            color: (0.85, 0.8, 0.7),
        }
    }
}

/// Every tunable of the jump, its feedback effects and the landing.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    // Jump
    pub jump_force: f32,
    pub pre_squash_amount: f32,
    pub pre_stretch_amount: f32,
    pub pre_animation_duration: f32,
    pub squash_amount: f32,
    pub stretch_amount: f32,
    pub animation_duration: f32,
    /// Seconds after launch before the air spin may start
    pub spin_delay: f32,
    /// Seconds for one full turn
    pub spin_duration: f32,
    // Camera
    pub shake_duration: f32,
    pub drop_shake_intensity: f32,
    // Audio
    pub charge_sound: String,
    pub charge_volume: f32,
    pub drop_sound: String,
    pub drop_volume: f32,
    // Shockwave
    pub min_shock_force: f32,
    pub max_shock_force: f32,
    // Flicker
    pub flicker_color: (f32, f32, f32),
    pub flicker_interval: f32,
    pub flicker_count: u32,
    pub particles: ParticleSettings,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            jump_force: 5.0,
            pre_squash_amount: 0.5,
            pre_stretch_amount: 1.5,
            pre_animation_duration: 1.0,
            squash_amount: 0.7,
            stretch_amount: 1.3,
            animation_duration: 0.2,
            spin_delay: 0.1,
            spin_duration: 0.2,
            shake_duration: 0.4,
            drop_shake_intensity: 2.0,
            charge_sound: "audio/charge.wav".to_string(),
            charge_volume: 0.2,
            drop_sound: "audio/drop.wav".to_string(),
            drop_volume: 1.0,
            min_shock_force: 2.0,
            max_shock_force: 4.0,
            flicker_color: (1.0, 1.0, 1.0),
            flicker_interval: 0.1,
            flicker_count: 6,
            particles: ParticleSettings::default(),
        }
    }
}

impl JumpTuning {
    /// Parse and validate tuning from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let tuning: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate the file at `path`.
    pub fn try_load(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_ron(path, &contents)
    }

    /// Load tuning, falling back to defaults on any error.
    pub fn load(path: &str) -> Self {
        match Self::try_load(path) {
            Ok(tuning) => {
                info!("Loaded jump tuning from {}", path);
                tuning
            }
            Err(e @ ConfigError::Read { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (fr, fg, fb) = self.flicker_color;
        let (pr, pg, pb) = self.particles.color;
        let all_floats = [
            ("jump_force", self.jump_force),
            ("pre_squash_amount", self.pre_squash_amount),
            ("pre_stretch_amount", self.pre_stretch_amount),
            ("pre_animation_duration", self.pre_animation_duration),
            ("squash_amount", self.squash_amount),
            ("stretch_amount", self.stretch_amount),
            ("animation_duration", self.animation_duration),
            ("spin_delay", self.spin_delay),
            ("spin_duration", self.spin_duration),
            ("shake_duration", self.shake_duration),
            ("drop_shake_intensity", self.drop_shake_intensity),
            ("charge_volume", self.charge_volume),
            ("drop_volume", self.drop_volume),
            ("min_shock_force", self.min_shock_force),
            ("max_shock_force", self.max_shock_force),
            ("flicker_color", fr),
            ("flicker_color", fg),
            ("flicker_color", fb),
            ("flicker_interval", self.flicker_interval),
            ("particles.speed", self.particles.speed),
            ("particles.lifetime", self.particles.lifetime),
            ("particles.size", self.particles.size),
            ("particles.gravity", self.particles.gravity),
            ("particles.color", pr),
            ("particles.color", pg),
            ("particles.color", pb),
        ];
        for (field, value) in all_floats {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }

        let durations = [
            ("pre_animation_duration", self.pre_animation_duration),
            ("animation_duration", self.animation_duration),
            ("spin_delay", self.spin_delay),
            ("shake_duration", self.shake_duration),
            ("flicker_interval", self.flicker_interval),
            ("particles.lifetime", self.particles.lifetime),
        ];
        for (field, value) in durations {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("duration must be non-negative, got {value}"),
                });
            }
        }

        if !(self.spin_duration > 0.0) {
            return Err(ConfigError::Invalid {
                field: "spin_duration",
                reason: format!("must be positive, got {}", self.spin_duration),
            });
        }

        let factors = [
            ("pre_squash_amount", self.pre_squash_amount),
            ("pre_stretch_amount", self.pre_stretch_amount),
            ("squash_amount", self.squash_amount),
            ("stretch_amount", self.stretch_amount),
        ];
        for (field, value) in factors {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("scale factor must be positive, got {value}"),
                });
            }
        }

        if self.min_shock_force > self.max_shock_force {
            return Err(ConfigError::Invalid {
                field: "min_shock_force",
                reason: format!(
                    "{} exceeds max_shock_force {}",
                    self.min_shock_force, self.max_shock_force
                ),
            });
        }

        Ok(())
    }

    /// Scale of the crouched charge pose.
    pub fn charge_scale(&self, original: Vec3) -> Vec3 {
        Vec3::new(
            original.x * self.pre_stretch_amount,
            original.y * self.pre_squash_amount,
            original.z * self.pre_stretch_amount,
        )
    }

    /// Scale of the stretched airborne pose.
    pub fn airborne_scale(&self, original: Vec3) -> Vec3 {
        Vec3::new(
            original.x * self.squash_amount,
            original.y * self.stretch_amount,
            original.z * self.squash_amount,
        )
    }

    pub fn flicker_color(&self) -> Color {
        let (r, g, b) = self.flicker_color;
        Color::srgb(r, g, b)
    }
}

/// System to load jump tuning at startup.
pub fn load_jump_tuning(mut commands: Commands) {
    commands.insert_resource(JumpTuning::load(TUNING_PATH));
}
