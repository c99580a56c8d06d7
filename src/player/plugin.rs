//! Player plugin - tuning, jump sequence and landing.

use bevy::prelude::*;

use super::config::load_jump_tuning;
use super::jump;

/// Player plugin - handles tuning and the jump/land cycle.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Tuning must exist before the arena is spawned
        app.add_systems(Startup, load_jump_tuning);

        // Set up jump systems
        jump::setup_jump_systems(app);
    }
}
