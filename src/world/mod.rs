//! World module - the arena the player jumps around in.

mod arena;
mod plugin;

pub use arena::{build_arena, ArenaEntity, PLAYER_START};
pub use plugin::{setup_arena, WorldPlugin};
