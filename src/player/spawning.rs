//! Player entity construction.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;

/// Base color of the player cube.
pub const PLAYER_COLOR: Color = Color::srgb(0.9, 0.35, 0.2);

/// Spawn the player cube at `position`.
///
/// The body is dynamic with rotation locked, so the air spin is purely
/// visual and never tips the cube over. Collision events are enabled for
/// ground detection.
pub fn spawn_player(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    shockwave_targets: Vec<Entity>,
) -> Entity {
    let transform = Transform::from_translation(position);

    commands
        .spawn((
            Player,
            JumpState::default(),
            OriginalAppearance {
                scale: transform.scale,
                color: PLAYER_COLOR,
            },
            ShockwaveTargets(shockwave_targets),
            // Rendering, with a material of its own so flicker only affects the player
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: PLAYER_COLOR,
                perceptual_roughness: 0.6,
                ..default()
            })),
            transform,
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::cuboid(0.5, 0.5, 0.5),
            Velocity::default(),
            LockedAxes::ROTATION_LOCKED,
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}
