//! Player module - player entity, jump sequence, and landing.

mod components;
mod config;
mod error;
mod jump;
mod plugin;
mod spawning;

pub use components::*;
pub use config::{JumpTuning, ParticleSettings, TUNING_PATH};
pub use error::ConfigError;
pub use jump::JumpSet;
pub use plugin::PlayerPlugin;
pub use spawning::{spawn_player, PLAYER_COLOR};
