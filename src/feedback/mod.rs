//! Feedback module - camera shake, flicker, particles, audio, and shockwave.

mod audio;
mod camera_shake;
mod flicker;
mod particles;
mod plugin;
mod shockwave;

pub use audio::{PlayerVoice, SoundLibrary};
pub use camera_shake::{CameraNoise, ScreenShake};
pub use flicker::Flicker;
pub use particles::{Particle, ParticleAssets};
pub use plugin::{FeedbackPlugin, FeedbackSet};
