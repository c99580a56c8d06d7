//! World plugin - loading gate, arena setup and teardown.

use bevy::prelude::*;

use crate::core::GameState;
use crate::feedback::Particle;
use crate::player::JumpTuning;

use super::arena::{build_arena, ArenaEntity};

/// World plugin - handles arena setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(OnEnter(GameState::InGame), setup_arena)
            .add_systems(OnExit(GameState::InGame), cleanup_arena);
    }
}

/// Move to gameplay once the tuning resource is available.
fn finish_loading(
    tuning: Option<Res<JumpTuning>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if tuning.is_some() {
        next_state.set(GameState::InGame);
    }
}

/// Set up the arena.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    build_arena(&mut commands, &mut meshes, &mut materials);
    info!("Arena ready");
}

/// Clean up arena entities when leaving InGame state.
fn cleanup_arena(
    mut commands: Commands,
    arena_query: Query<Entity, Or<(With<ArenaEntity>, With<Particle>)>>,
) {
    for entity in arena_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use bevy_rapier3d::prelude::*;

    use super::*;
    use crate::feedback::CameraNoise;
    use crate::player::{Ground, Player, ShockwaveTargets};

    #[test]
    fn arena_wires_player_to_crates() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, setup_arena);
        app.update();

        let world = app.world_mut();
        let targets = world
            .query_filtered::<&ShockwaveTargets, With<Player>>()
            .single(world)
            .0
            .clone();
        assert_eq!(targets.len(), 10);
        for target in targets {
            assert!(world.get::<ExternalImpulse>(target).is_some());
        }

        assert_eq!(world.query_filtered::<(), With<Ground>>().iter(world).count(), 1);
        assert_eq!(world.query::<&CameraNoise>().iter(world).count(), 1);
    }

    #[test]
    fn leaving_the_game_clears_arena_and_particles() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin)
            .init_state::<GameState>()
            .add_systems(OnExit(GameState::InGame), cleanup_arena);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();

        let world = app.world_mut();
        let child = world.spawn_empty().id();
        let arena = world.spawn(ArenaEntity).add_child(child).id();
        let particle = world.spawn(Particle::new(Vec3::Y, 1.0)).id();
        let bystander = world.spawn(Transform::default()).id();

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Loading);
        app.update();

        let entities = app.world().entities();
        assert!(!entities.contains(arena));
        assert!(!entities.contains(child));
        assert!(!entities.contains(particle));
        assert!(entities.contains(bystander));
    }
}
