//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The jump sequence,
//! tweens and feedback effects only advance while `PlayState::Running`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to read the tuning file
/// - Move to `InGame` once tuning is available
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Sub-states for gameplay - only active when GameState::InGame.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Input, physics and effects all advance
    #[default]
    Running,
    /// Virtual time and the physics pipeline are frozen
    Paused,
}
