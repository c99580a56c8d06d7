//! Squash Jump - a squash-and-stretch jumping cube in Bevy.
//!
//! Space charges a jump: the cube crouches, springs back, launches, spins
//! once in the air, and lands with a camera shake, a dust burst, a thud and
//! a shockwave that kicks nearby crates into the air.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, scale tweening
//! - **Player**: Tuning, jump sequence, landing detection, air spin
//! - **Feedback**: Camera shake, flicker, particles, audio, shockwave
//! - **World**: Arena setup and teardown

pub mod core;
pub mod feedback;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct SquashJumpPlugin;

impl Plugin for SquashJumpPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Jump and landing feedback
            .add_plugins(feedback::FeedbackPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
